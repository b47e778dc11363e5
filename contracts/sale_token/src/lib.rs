#![no_std]

mod contract;
mod events;
pub mod policy;
mod storage;
mod types;


pub use contract::{SaleToken, SaleTokenClient};
pub use types::*;
