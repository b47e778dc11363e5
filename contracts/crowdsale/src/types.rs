use soroban_sdk::{contracterror, contracttype, Address};

/// Bonus tiers are whole percents of the base allocation.
pub const PERCENT_DENOMINATOR: i128 = 100;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    AlreadyInitialized = 2,
    NotInitialized = 3,
    InvalidAmount = 4,
    InvalidAddress = 5,
    SaleNotActive = 6,
    AlreadyStarted = 7,
    AlreadyEnded = 8,
    TooEarly = 9,
    BelowMinimum = 10,
    NotWhitelisted = 11,
    InvalidBeneficiary = 12,
    InvalidWhitelist = 13,
    WhitelistNotSet = 14,
    BonusPoolNotSet = 15,
    Overflow = 16,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleState {
    Pending,
    Active,
    Ended,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub token: Address,
    /// Asset contributions are paid in.
    pub payment_token: Address,
    pub start_time: u64,
    pub end_time: Option<u64>,
    /// Tokens per unit of contributed value.
    pub rate: i128,
    pub min_purchase: i128,
    pub bonus_pool: Option<Address>,
    pub whitelist: Option<Address>,
}

/// Token split of a single purchase.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Allocation {
    pub base: i128,
    pub bonus: i128,
    pub total: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    State,
    TotalRaised,
}
