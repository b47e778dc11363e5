use crate::calendar::add_months;
use soroban_sdk::contracttype;

/// 100% in basis points.
pub const FULL_UNLOCK_BPS: u32 = 10_000;

const HOLD: [u32; 1] = [FULL_UNLOCK_BPS];
// per-period releases of 15/15/25/15/15/15 %
const STANDARD: [u32; 6] = [1_500, 3_000, 5_500, 7_000, 8_500, FULL_UNLOCK_BPS];
const FIFTY_PERCENT: [u32; 6] = [5_000, 6_000, 7_000, 8_000, 9_000, FULL_UNLOCK_BPS];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ScheduleKind {
    /// Nothing until the release date, everything from then on.
    Hold,
    /// Six monthly steps, 15% at the release date.
    Standard,
    /// Half at the release date, then 10% a month for five months.
    FiftyPercent,
}

impl ScheduleKind {
    /// Cumulative unlocked basis points, indexed by elapsed monthly periods.
    pub fn cumulative_bps(&self) -> &'static [u32] {
        match self {
            ScheduleKind::Hold => &HOLD,
            ScheduleKind::Standard => &STANDARD,
            ScheduleKind::FiftyPercent => &FIFTY_PERCENT,
        }
    }
}

/// Number of monthly anniversaries of `release_date` reached by `now`, capped
/// at `max`. `None` before the release date. An anniversary past the end of
/// the timestamp range is never reached.
pub fn periods_elapsed(release_date: u64, now: u64, max: u32) -> Option<u32> {
    if now < release_date {
        return None;
    }
    let mut periods = 0;
    while periods < max {
        match add_months(release_date, periods + 1) {
            Some(anniversary) if anniversary <= now => periods += 1,
            _ => break,
        }
    }
    Some(periods)
}

/// Fraction of an allocation unlocked at `now`, in basis points. Depends only
/// on its arguments.
pub fn unlocked_fraction(kind: ScheduleKind, release_date: u64, now: u64) -> u32 {
    let table = kind.cumulative_bps();
    let last = (table.len() - 1) as u32;
    match periods_elapsed(release_date, now, last) {
        Some(period) => table[period as usize],
        None => 0,
    }
}
