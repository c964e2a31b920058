//! Calendar descriptors.
//!
//! Each supported calendar is a variant of [`Calendar`]; the rules that define
//! it (leap predicate, month lengths, epoch, first day of the week) are plain
//! functions matched on the variant, so there is no registry to mutate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    DateError, Month,
    consts::{
        ARABIC_CYCLE, ARABIC_CYCLE_DAYS, CENTURY_CYCLE, GREGORIAN_CYCLE, GREGORIAN_CYCLE_DAYS,
        INDIAN_YEAR_OFFSET, LAST_MONTH, LEAP_YEAR_CYCLE, PERSIAN_CYCLE, PERSIAN_CYCLE_DAYS,
        PERSIAN_LEAP_RESIDUES,
    },
    jdn,
    prelude::*,
};

/// The calendar systems a [`DateObject`](crate::DateObject) can be viewed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    /// Proleptic Gregorian calendar
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Solar Hijri calendar, 33-year arithmetic leap cycle
    #[display(fmt = "persian")]
    Persian,
    /// Tabular Islamic calendar, 30-year leap cycle
    #[display(fmt = "arabic")]
    Arabic,
    /// Indian National (Saka) calendar
    #[display(fmt = "indian")]
    Indian,
}

impl Calendar {
    /// Every supported calendar, in declaration order.
    pub const ALL: [Self; 4] = [Self::Gregorian, Self::Persian, Self::Arabic, Self::Indian];

    /// The lowercase key used to select this calendar.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gregorian => "gregorian",
            Self::Persian => "persian",
            Self::Arabic => "arabic",
            Self::Indian => "indian",
        }
    }

    /// Human readable name.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Gregorian => "Gregorian",
            Self::Persian => "Persian (Solar Hijri)",
            Self::Arabic => "Islamic (Tabular Hijri)",
            Self::Indian => "Indian National (Saka)",
        }
    }

    pub const fn is_leap_year(self, year: i64) -> bool {
        match self {
            Self::Gregorian => is_gregorian_leap_year(year),
            Self::Persian => {
                let residue = year.rem_euclid(PERSIAN_CYCLE);
                let mut i = 0;
                while i < PERSIAN_LEAP_RESIDUES.len() {
                    if PERSIAN_LEAP_RESIDUES[i] == residue {
                        return true;
                    }
                    i += 1;
                }
                false
            }
            Self::Arabic => (14 + 11 * year.rem_euclid(ARABIC_CYCLE)).rem_euclid(ARABIC_CYCLE) < 11,
            Self::Indian => is_gregorian_leap_year(year.rem_euclid(GREGORIAN_CYCLE) + INDIAN_YEAR_OFFSET),
        }
    }

    /// The month (1-based) that gains a day in leap years.
    pub const fn leap_month(self) -> u8 {
        match self {
            Self::Gregorian => 2,
            Self::Persian | Self::Arabic => LAST_MONTH,
            Self::Indian => 1,
        }
    }

    /// Lengths of the twelve months of `year`, in order.
    pub const fn month_lengths(self, year: i64) -> [u8; 12] {
        let mut lengths = match self {
            Self::Gregorian => [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
            Self::Persian => [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29],
            Self::Arabic => [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],
            Self::Indian => [30, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 30],
        };
        if self.is_leap_year(year) {
            lengths[self.leap_month() as usize - 1] += 1;
        }
        lengths
    }

    /// Number of days in `month` of `year`.
    pub const fn days_in_month(self, year: i64, month: Month) -> u8 {
        self.month_lengths(year)[month.index()]
    }

    pub const fn days_in_year(self, year: i64) -> i64 {
        let base = match self {
            Self::Arabic => 354,
            Self::Gregorian | Self::Persian | Self::Indian => 365,
        };
        if self.is_leap_year(year) { base + 1 } else { base }
    }

    /// Weekday the calendar's week starts on, 0 = Sunday.
    pub const fn first_week_day(self) -> u8 {
        match self {
            Self::Gregorian | Self::Indian => 0,
            Self::Persian | Self::Arabic => 6,
        }
    }

    /// Julian Day Number of day 1 of month 1 of year 1.
    pub fn epoch(self) -> i64 {
        jdn::year_start(self, 1)
    }

    /// Mean year as a `(years, days)` ratio of the leap cycle.
    pub(crate) const fn mean_year(self) -> (i64, i64) {
        match self {
            Self::Gregorian | Self::Indian => (GREGORIAN_CYCLE, GREGORIAN_CYCLE_DAYS),
            Self::Persian => (PERSIAN_CYCLE, PERSIAN_CYCLE_DAYS),
            Self::Arabic => (ARABIC_CYCLE, ARABIC_CYCLE_DAYS),
        }
    }
}

impl FromStr for Calendar {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|calendar| calendar.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| DateError::UnknownCalendar(s.to_owned()))
    }
}

pub(crate) const fn is_gregorian_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}
