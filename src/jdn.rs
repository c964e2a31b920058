//! Julian Day Number conversions.
//!
//! Every calendar is reduced to two pieces: the Julian Day Number of the
//! first day of a year (`year_start`) and the month length table from
//! [`Calendar::month_lengths`]. Conversions in both directions are built from
//! those, using integer arithmetic only.

use crate::{
    Calendar, Month,
    calendar::is_gregorian_leap_year,
    consts::{
        ARABIC_EPOCH_JDN, GREGORIAN_EPOCH_JDN, INDIAN_NEW_YEAR, INDIAN_YEAR_OFFSET, MAX_DAY_COUNT,
        MAX_YEAR, MIN_DAY, MONTHS_IN_YEAR, PERSIAN_CYCLE, PERSIAN_EPOCH_JDN, PERSIAN_LEAP_RESIDUES,
    },
};

/// Julian Day Number of day 1 of month 1 of `year` in `calendar`.
pub fn year_start(calendar: Calendar, year: i64) -> i64 {
    let year = year.clamp(-MAX_YEAR, MAX_YEAR);
    let elapsed = year - 1;
    match calendar {
        Calendar::Gregorian => gregorian_year_start(year),
        Calendar::Persian => PERSIAN_EPOCH_JDN + 365 * elapsed + persian_leaps_through(elapsed),
        Calendar::Arabic => ARABIC_EPOCH_JDN + 354 * elapsed + (3 + 11 * year).div_euclid(30),
        Calendar::Indian => {
            let gregorian_year = year + INDIAN_YEAR_OFFSET;
            let (month, day) = INDIAN_NEW_YEAR;
            gregorian_year_start(gregorian_year)
                + days_before_month(Calendar::Gregorian, gregorian_year, month)
                + day
                - 1
                - i64::from(is_gregorian_leap_year(gregorian_year))
        }
    }
}

fn gregorian_year_start(year: i64) -> i64 {
    let elapsed = year - 1;
    GREGORIAN_EPOCH_JDN + 365 * elapsed + elapsed.div_euclid(4) - elapsed.div_euclid(100)
        + elapsed.div_euclid(400)
}

/// Number of Persian leap years in `1..=year`, negative when `year < 0`.
fn persian_leaps_through(year: i64) -> i64 {
    let cycles = year.div_euclid(PERSIAN_CYCLE);
    let residue = year.rem_euclid(PERSIAN_CYCLE);
    let partial = PERSIAN_LEAP_RESIDUES.iter().filter(|&&r| r <= residue).count();
    cycles * PERSIAN_LEAP_RESIDUES.len() as i64 + partial as i64
}

/// Days from the start of `year` to the start of `month` (1-based).
fn days_before_month(calendar: Calendar, year: i64, month: i64) -> i64 {
    debug_assert!((1..=i64::from(MONTHS_IN_YEAR)).contains(&month));
    calendar
        .month_lengths(year)
        .iter()
        .take((month - 1) as usize)
        .map(|&days| i64::from(days))
        .sum()
}

/// Folds an out-of-range month into `1..=12`, carrying whole years.
pub fn normalize_month(year: i64, month: i64) -> (i64, i64) {
    let months = i64::from(MONTHS_IN_YEAR);
    let zero_based = month.saturating_sub(1);
    (
        year.saturating_add(zero_based.div_euclid(months)),
        zero_based.rem_euclid(months) + 1,
    )
}

/// Julian Day Number of `(year, month, day)` in `calendar`.
///
/// Month and day need not be in range: month 13 is month 1 of the next year,
/// day 0 is the last day of the previous month, and so on.
pub fn to_jdn(calendar: Calendar, year: i64, month: i64, day: i64) -> i64 {
    let (year, month) = normalize_month(year, month);
    let year = year.clamp(-MAX_YEAR, MAX_YEAR);
    year_start(calendar, year)
        .saturating_add(days_before_month(calendar, year, month))
        .saturating_add(day.saturating_sub(1))
        .clamp(-MAX_DAY_COUNT, MAX_DAY_COUNT)
}

/// `(year, month, day)` in `calendar` of Julian Day Number `jdn`.
pub fn from_jdn(calendar: Calendar, jdn: i64) -> (i64, u8, u8) {
    let jdn = jdn.clamp(-MAX_DAY_COUNT, MAX_DAY_COUNT);
    let (cycle_years, cycle_days) = calendar.mean_year();
    let mut year = (jdn - calendar.epoch()).saturating_mul(cycle_years).div_euclid(cycle_days) + 1;
    while year > -MAX_YEAR && year_start(calendar, year) > jdn {
        year -= 1;
    }
    while year < MAX_YEAR && year_start(calendar, year + 1) <= jdn {
        year += 1;
    }

    let mut remaining = jdn - year_start(calendar, year);
    let lengths = calendar.month_lengths(year);
    for (month, &length) in (1..=MONTHS_IN_YEAR).zip(lengths.iter()) {
        let length = i64::from(length);
        if remaining < length || month == MONTHS_IN_YEAR {
            return (year, month, (remaining + 1) as u8);
        }
        remaining -= length;
    }
    (year, MONTHS_IN_YEAR, (remaining + 1) as u8)
}

/// Whether `(year, month, day)` names a real day without any carrying.
pub fn is_valid_date(calendar: Calendar, year: i64, month: i64, day: i64) -> bool {
    Month::new(month)
        .is_ok_and(|month| (MIN_DAY..=i64::from(calendar.days_in_month(year, month))).contains(&day))
}

/// Weekday of `jdn`, 0 = Sunday.
pub const fn week_day(jdn: i64) -> u8 {
    (jdn + 1).rem_euclid(7) as u8
}
