//! Civil-calendar arithmetic on unix timestamps (proleptic Gregorian, UTC).

const SECONDS_PER_DAY: u64 = 86_400;

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Days since 1970-01-01 for the given date.
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    let shifted_month = i64::from((month + 9) % 12);
    let day_of_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Date `(year, month, day)` of a day count since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let days = days + 719_468;
    let era = if days >= 0 { days } else { days - 146_096 } / 146_097;
    let day_of_era = days - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u32;
    let month = (if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    }) as u32;
    let year = year_of_era + era * 400;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

/// `timestamp` moved forward by `months` calendar months, keeping the time of
/// day. Days past the end of the target month clamp to its last day.
/// `None` when the result does not fit in a `u64` timestamp.
pub fn add_months(timestamp: u64, months: u32) -> Option<u64> {
    let days = (timestamp / SECONDS_PER_DAY) as i64;
    let seconds_into_day = timestamp % SECONDS_PER_DAY;
    let (year, month, day) = civil_from_days(days);

    let month_index = year * 12 + i64::from(month - 1) + i64::from(months);
    let target_year = month_index.div_euclid(12);
    let target_month = month_index.rem_euclid(12) as u32 + 1;
    let target_day = day.min(days_in_month(target_year, target_month));

    let target_days = u64::try_from(days_from_civil(target_year, target_month, target_day)).ok()?;
    target_days
        .checked_mul(SECONDS_PER_DAY)?
        .checked_add(seconds_into_day)
}
