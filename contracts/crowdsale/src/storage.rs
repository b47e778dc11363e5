use crate::types::*;
use soroban_sdk::Env;

pub fn get_config(env: &Env) -> Option<SaleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_state(env: &Env) -> SaleState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or(SaleState::Pending)
}

pub fn set_state(env: &Env, state: SaleState) {
    env.storage().instance().set(&DataKey::State, &state);
}

pub fn get_total_raised(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}
