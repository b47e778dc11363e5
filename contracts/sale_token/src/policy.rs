//! Transfer policy under the global trade lock.

use crate::storage;
use soroban_sdk::{Address, Env};

/// A sender may move tokens when trading is unlocked or when it holds a
/// trade exception.
pub fn can_transfer(locked: bool, sender_has_exception: bool) -> bool {
    !locked || sender_has_exception
}

pub fn sender_can_trade(env: &Env, sender: &Address) -> bool {
    can_transfer(
        storage::is_trade_locked(env),
        storage::has_trade_exception(env, sender),
    )
}
