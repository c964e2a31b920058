use serde::{Deserialize, Serialize};

use crate::consts::{MAX_DAY_COUNT, MS_PER_DAY, UNIX_EPOCH_JDN};

/// Calendar independent point in time: a Julian Day Number plus the
/// milliseconds elapsed since midnight of that day.
///
/// `millis` is always in `0..MS_PER_DAY`; every constructor carries overflow
/// into `day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Instant {
    day:    i64,
    millis: u32,
}

impl Instant {
    /// Builds an instant, carrying `millis` outside a day into `day`.
    pub fn new(day: i64, millis: i64) -> Self {
        let day = day
            .saturating_add(millis.div_euclid(MS_PER_DAY))
            .clamp(-MAX_DAY_COUNT, MAX_DAY_COUNT);
        Self {
            day,
            millis: millis.rem_euclid(MS_PER_DAY) as u32,
        }
    }

    /// Instant `millis` milliseconds after 1970-01-01T00:00:00.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self::new(UNIX_EPOCH_JDN, millis)
    }

    /// Julian Day Number
    #[inline]
    pub const fn day(self) -> i64 {
        self.day
    }

    /// Milliseconds since midnight
    #[inline]
    pub const fn millis(self) -> u32 {
        self.millis
    }

    /// Milliseconds since 1970-01-01T00:00:00, saturating at the `i64` range.
    pub fn unix_millis(self) -> i64 {
        (self.day - UNIX_EPOCH_JDN)
            .saturating_mul(MS_PER_DAY)
            .saturating_add(i64::from(self.millis))
    }

    pub fn with_day(self, day: i64) -> Self {
        Self::new(day, i64::from(self.millis))
    }

    pub fn with_millis(self, millis: i64) -> Self {
        Self::new(self.day, millis)
    }

    pub fn add_days(self, days: i64) -> Self {
        self.with_day(self.day.saturating_add(days))
    }

    pub fn add_millis(self, millis: i64) -> Self {
        let days = millis.div_euclid(MS_PER_DAY);
        let rest = millis.rem_euclid(MS_PER_DAY);
        Self::new(self.day.saturating_add(days), i64::from(self.millis) + rest)
    }
}
