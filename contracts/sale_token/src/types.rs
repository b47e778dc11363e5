use soroban_sdk::{contracterror, contracttype, Address};

/// Base-unit scale of the token: one whole token is 10^18 units.
pub const DECIMALS: u32 = 18;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    LengthMismatch = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    TradeLocked = 7,
    InvalidAddress = 8,
    InvalidAmount = 9,
    Overflow = 10,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceKey {
    pub from: Address,
    pub spender: Address,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Initialized,
    TotalSupply,
    TradeLocked,
    Balance(Address),
    Allowance(AllowanceKey),
    TradeException(Address),
}
