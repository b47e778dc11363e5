use crate::types::Allocation;
use soroban_sdk::{symbol_short, Address, Env};

pub fn initialized(env: &Env, token: &Address, start_time: u64, rate: i128) {
    env.events()
        .publish((symbol_short!("init"), token.clone()), (start_time, rate));
}

pub fn started(env: &Env, now: u64) {
    env.events().publish((symbol_short!("started"),), now);
}

pub fn purchased(env: &Env, payer: &Address, beneficiary: &Address, value: i128, split: &Allocation) {
    env.events().publish(
        (symbol_short!("purchase"), payer.clone(), beneficiary.clone()),
        (value, split.base, split.bonus),
    );
}

pub fn rate_changed(env: &Env, old: i128, new: i128) {
    env.events().publish((symbol_short!("rate"),), (old, new));
}

pub fn bonus_pool_set(env: &Env, pool: &Address) {
    env.events().publish((symbol_short!("pool"),), pool.clone());
}

pub fn whitelist_set(env: &Env, whitelist: &Address) {
    env.events()
        .publish((symbol_short!("wlist"),), whitelist.clone());
}

pub fn ended(env: &Env, now: u64, unsold: i128, collected: i128) {
    env.events()
        .publish((symbol_short!("ended"),), (now, unsold, collected));
}

pub fn tokens_withdrawn(env: &Env, pool: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("tok_out"), pool.clone()), amount);
}
