//! Token amounts owed for a contribution.

use crate::types::{Allocation, PERCENT_DENOMINATOR};

/// `base = value * rate`, `bonus = floor(base * bonus_percent / 100)`.
/// Returns `None` when any step overflows.
pub fn allocation(value: i128, rate: i128, bonus_percent: u32) -> Option<Allocation> {
    let base = value.checked_mul(rate)?;
    let bonus = base.checked_mul(i128::from(bonus_percent))? / PERCENT_DENOMINATOR;
    let total = base.checked_add(bonus)?;
    Some(Allocation { base, bonus, total })
}
