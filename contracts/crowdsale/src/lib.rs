#![no_std]

mod contract;
mod events;
pub mod pricing;
mod storage;
mod types;


pub use contract::{Crowdsale, CrowdsaleClient};
pub use types::*;
