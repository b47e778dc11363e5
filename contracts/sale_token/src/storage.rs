use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn is_trade_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::TradeLocked)
        .unwrap_or(true)
}

pub fn set_trade_locked(env: &Env, locked: bool) {
    env.storage().instance().set(&DataKey::TradeLocked, &locked);
}

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(id.clone()), &amount);
}

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&allowance_key(from, spender))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) {
    let key = allowance_key(from, spender);
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

pub fn has_trade_exception(env: &Env, id: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::TradeException(id.clone()))
        .unwrap_or(false)
}

pub fn set_trade_exception(env: &Env, id: &Address, allowed: bool) {
    let key = DataKey::TradeException(id.clone());
    if allowed {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

fn allowance_key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceKey {
        from: from.clone(),
        spender: spender.clone(),
    })
}
