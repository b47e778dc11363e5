#![no_std]

//! Pieces shared by the sale contracts: ownership bookkeeping, the zero-address
//! sentinel, cross-contract client interfaces and asset sweeping.

pub mod address;
pub mod interfaces;
pub mod ownership;
pub mod recovery;

pub use address::{is_zero_address, zero_address, ZERO_ACCOUNT};
pub use interfaces::{LedgerClient, OwnableClient, ScheduleClient, WhitelistClient};
