use soroban_sdk::{Address, Env, String};

/// Account strkey of the all-zero ed25519 key. Nobody holds its secret, so it
/// stands in for the "null" address when validating recipients.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

pub fn is_zero_address(env: &Env, addr: &Address) -> bool {
    *addr == zero_address(env)
}
