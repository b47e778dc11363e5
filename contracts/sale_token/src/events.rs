use soroban_sdk::{symbol_short, Address, Env};

pub fn initialized(env: &Env, owner: &Address, total_supply: i128) {
    env.events()
        .publish((symbol_short!("init"),), (owner.clone(), total_supply));
}

pub fn minted(env: &Env, to: &Address, amount: i128, balance: i128) {
    env.events()
        .publish((symbol_short!("mint"), to.clone()), (amount, balance));
}

pub fn transferred(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
    from_balance: i128,
    to_balance: i128,
) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        (amount, from_balance, to_balance),
    );
}

pub fn approval(env: &Env, from: &Address, spender: &Address, old: i128, new: i128) {
    env.events().publish(
        (symbol_short!("approve"), from.clone(), spender.clone()),
        (old, new),
    );
}

pub fn burned(env: &Env, from: &Address, amount: i128, balance: i128, total_supply: i128) {
    env.events().publish(
        (symbol_short!("burn"), from.clone()),
        (amount, balance, total_supply),
    );
}

pub fn trade_lock(env: &Env, locked: bool) {
    env.events().publish((symbol_short!("lock"),), locked);
}

pub fn trade_exception(env: &Env, id: &Address, allowed: bool) {
    env.events()
        .publish((symbol_short!("trade_exc"), id.clone()), allowed);
}

pub fn reclaimed(env: &Env, asset: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("reclaim"), asset.clone()),
        (to.clone(), amount),
    );
}
