//! Client-side views of the sale contracts.
//!
//! Callers depend on these traits instead of the contract crates so that a
//! contract's wasm never links another contract's exports.

use soroban_sdk::{contractclient, Address, Env};

/// Token ledger operations used by the crowdsale and vesting accounts.
#[contractclient(name = "LedgerClient")]
pub trait LedgerInterface {
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn can_trade(env: Env, addr: Address) -> bool;
}

/// Participant whitelist as seen by the crowdsale.
#[contractclient(name = "WhitelistClient")]
pub trait WhitelistInterface {
    fn is_whitelist(env: Env) -> bool;
    fn is_valid_purchase(env: Env, participant: Address, amount: i128) -> bool;
    fn get_bonus_percent(env: Env, participant: Address) -> u32;
    fn record_purchase(env: Env, caller: Address, participant: Address, amount: i128);
}

/// Release schedule as seen by a vesting account. Fractions are basis points.
#[contractclient(name = "ScheduleClient")]
pub trait ScheduleInterface {
    fn unlocked_fraction(env: Env) -> u32;
    fn release_date(env: Env) -> u64;
}

/// Anything with a transferable owner.
#[contractclient(name = "OwnableClient")]
pub trait OwnableInterface {
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, caller: Address, new_owner: Address);
}
