#![no_std]

mod calendar;
pub mod schedule;

pub use schedule::{unlocked_fraction, ScheduleKind, FULL_UNLOCK_BPS};

use sale_common::ownership;
use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address, Env,
};

contractmeta!(
    key = "Description",
    val = "Monthly token release schedule anchored at a release date"
);

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ScheduleConfig {
    pub kind: ScheduleKind,
    pub release_date: u64,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
}

fn get_config(env: &Env) -> Result<ScheduleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn set_config(env: &Env, config: &ScheduleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

#[contract]
pub struct ReleaseSchedule;

#[contractimpl]
impl ReleaseSchedule {
    pub fn initialize(
        env: Env,
        owner: Address,
        kind: ScheduleKind,
        release_date: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        ownership::set_owner(&env, &owner);
        set_config(&env, &ScheduleConfig { kind, release_date });
        env.events()
            .publish((symbol_short!("init"),), (kind, release_date));
        Ok(())
    }

    /// Moves the anchor. Nothing derived from it is cached, so every bound
    /// vesting account sees the new date on its next read.
    pub fn set_token_release_date(
        env: Env,
        caller: Address,
        release_date: u64,
    ) -> Result<(), Error> {
        let mut config = get_config(&env)?;
        if !ownership::is_owner(&env, &caller) {
            return Err(Error::Unauthorized);
        }

        let previous = config.release_date;
        config.release_date = release_date;
        set_config(&env, &config);
        env.events()
            .publish((symbol_short!("date_set"),), (previous, release_date));
        Ok(())
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        get_config(&env)?;
        if !ownership::transfer_ownership(&env, &caller, &new_owner) {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    // View functions
    pub fn unlocked_fraction(env: Env) -> Result<u32, Error> {
        let now = env.ledger().timestamp();
        Self::unlocked_fraction_at(env, now)
    }

    pub fn unlocked_fraction_at(env: Env, timestamp: u64) -> Result<u32, Error> {
        let config = get_config(&env)?;
        Ok(unlocked_fraction(config.kind, config.release_date, timestamp))
    }

    /// Monthly periods completed since the release date, `None` before it.
    pub fn current_period(env: Env) -> Result<Option<u32>, Error> {
        let config = get_config(&env)?;
        let last = (config.kind.cumulative_bps().len() - 1) as u32;
        Ok(schedule::periods_elapsed(
            config.release_date,
            env.ledger().timestamp(),
            last,
        ))
    }

    pub fn kind(env: Env) -> Result<ScheduleKind, Error> {
        Ok(get_config(&env)?.kind)
    }

    pub fn release_date(env: Env) -> Result<u64, Error> {
        Ok(get_config(&env)?.release_date)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        ownership::owner(&env).ok_or(Error::NotInitialized)
    }
}
