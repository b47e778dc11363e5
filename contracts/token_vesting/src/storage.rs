use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VestingStatus {
    Active,
    Revoked,
    Killed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingConfig {
    pub token: Address,
    pub beneficiary: Address,
    pub schedule: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Released,
    Status,
}

pub fn get_config(env: &Env) -> Option<VestingConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &VestingConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_released(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Released)
        .unwrap_or(0)
}

pub fn set_released(env: &Env, released: i128) {
    env.storage().instance().set(&DataKey::Released, &released);
}

pub fn get_status(env: &Env) -> VestingStatus {
    env.storage()
        .instance()
        .get(&DataKey::Status)
        .unwrap_or(VestingStatus::Active)
}

pub fn set_status(env: &Env, status: VestingStatus) {
    env.storage().instance().set(&DataKey::Status, &status);
}
