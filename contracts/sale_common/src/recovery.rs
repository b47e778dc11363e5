use soroban_sdk::{symbol_short, token, Address, Env};

/// Moves this contract's whole balance of `asset` to `to` and returns the
/// amount moved. An empty balance is a no-op.
pub fn sweep(env: &Env, asset: &Address, to: &Address) -> i128 {
    let client = token::Client::new(env, asset);
    let here = env.current_contract_address();
    let balance = client.balance(&here);
    if balance > 0 {
        client.transfer(&here, to, &balance);
        env.events()
            .publish((symbol_short!("sweep"), asset.clone()), (to.clone(), balance));
    }
    balance
}
