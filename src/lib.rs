//! A date and time value that can be viewed in the Gregorian, Persian,
//! Islamic (tabular) and Indian National calendars.
//!
//! A [`DateObject`] stores one calendar independent [`Instant`]. Year, month,
//! day and every other calendar field are derived from it on each read, and
//! every write goes back through the Julian Day conversion, so switching the
//! calendar or locale never changes the point in time.
//!
//! ```
//! use date_object::{Calendar, DateObject};
//!
//! let mut date = DateObject::from_ymd(Calendar::Gregorian, 2020, 12, 6);
//! date.convert(Calendar::Indian);
//! assert_eq!((date.year(), date.month().number, date.day()), (1942, 9, 15));
//! ```

mod arith;
mod calendar;
mod config;
mod consts;
mod error;
mod field;
mod format;
mod instant;
pub mod jdn;
mod locale;
mod parse;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use arith::Unit;
pub use calendar::Calendar;
pub use config::{DateConfig, DateSource};
pub use consts::*;
pub use error::DateError;
pub use field::{Field, Value};
pub use instant::Instant;
pub use locale::{Locale, NamePair};
pub use parse::ParseError;
pub use types::{DigitTable, Meridiem, Month, NameTable, NamedUnit};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A point in time viewed through a calendar and a locale.
///
/// All mutators work in place and return `&mut Self` so calls can be chained.
/// `Clone` gives an independent copy; two clones never observe each other's
/// changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateObject {
    instant:     Instant,
    calendar:    Calendar,
    locale:      Locale,
    format:      Option<String>,
    ignore_list: Vec<String>,
    custom:      CustomNames,
    /// Minutes east of UTC that `instant` is shifted by
    utc_offset:  i32,
    is_utc:      bool,
    is_valid:    bool,
}

/// Overrides for the locale tables, owned by one `DateObject`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CustomNames {
    months:    Option<NameTable>,
    week_days: Option<NameTable>,
    digits:    Option<DigitTable>,
}

/// Anything a `DateObject` can take its point in time from.
#[derive(Debug, Clone, From)]
pub enum DateInput {
    /// Milliseconds since 1970-01-01T00:00:00
    Timestamp(i64),
    SystemTime(SystemTime),
    /// Text parsed with the target's format
    Text(String),
    /// Another date; only its point in time is taken
    Date(Box<DateObject>),
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<DateObject> for DateInput {
    fn from(date: DateObject) -> Self {
        Self::Date(Box::new(date))
    }
}

/// Plain snapshot of every derived field, as produced by
/// [`DateObject::to_object`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSnapshot<'a> {
    pub year:         i64,
    pub month:        NamedUnit<'a>,
    pub day:          u8,
    pub week_day:     NamedUnit<'a>,
    pub hour:         u8,
    pub minute:       u8,
    pub second:       u8,
    pub millisecond:  u16,
    pub week_of_year: i64,
    pub day_of_year:  i64,
    pub days_left:    i64,
    pub calendar:     Calendar,
    pub locale:       Locale,
    pub format:       Option<&'a str>,
}

impl DateObject {
    fn with_instant(instant: Instant) -> Self {
        Self {
            instant,
            calendar: Calendar::default(),
            locale: Locale::default(),
            format: None,
            ignore_list: Vec::new(),
            custom: CustomNames::default(),
            utc_offset: 0,
            is_utc: false,
            is_valid: true,
        }
    }

    /// The current time from the system clock, Gregorian calendar, English.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Date `millis` milliseconds after 1970-01-01T00:00:00.
    pub fn from_unix_millis(millis: i64) -> Self {
        Self::with_instant(Instant::from_unix_millis(millis))
    }

    pub fn from_system_time(time: SystemTime) -> Self {
        let millis = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_millis()).map_or(i64::MIN, |m| -m),
        };
        Self::from_unix_millis(millis)
    }

    pub fn from_instant(instant: Instant) -> Self {
        Self::with_instant(instant)
    }

    /// Midnight of `(year, month, day)` in `calendar`.
    ///
    /// Out of range months and days are carried into neighbouring months and
    /// years; [`is_valid`](Self::is_valid) reports whether that happened.
    pub fn from_ymd(calendar: Calendar, year: i64, month: i64, day: i64) -> Self {
        let mut date = Self::with_instant(Instant::new(0, 0));
        date.calendar = calendar;
        date.set_ymd(year, month, day);
        date
    }

    /// Builds a date from a configuration.
    ///
    /// Without `date` or date fields the current time is used; with date
    /// fields only, the time of day starts at midnight.
    ///
    /// # Errors
    /// Returns `DateError` if the configuration does not validate or its
    /// date text cannot be parsed.
    pub fn from_config(config: &DateConfig) -> Result<Self, DateError> {
        if config.date.is_none() && !config.has_date_fields() {
            let mut date = Self::now();
            date.apply(config)?;
            return Ok(date);
        }

        let mut config = config.clone();
        if config.date.is_none() {
            config.hour.get_or_insert(0);
            config.minute.get_or_insert(0);
            config.second.get_or_insert(0);
            config.millisecond.get_or_insert(0);
        }
        let mut date = Self::from_unix_millis(0);
        date.apply(&config)?;
        Ok(date)
    }

    // --- derived fields ---

    /// `(year, month, day)` of the current instant in the current calendar.
    fn ymd(&self) -> (i64, u8, u8) {
        jdn::from_jdn(self.calendar, self.instant.day())
    }

    /// Position of `day` in the calendar's week, 0 = first day of the week.
    fn week_day_index(&self, day: i64) -> u8 {
        let first = i64::from(self.calendar.first_week_day());
        (i64::from(jdn::week_day(day)) - first).rem_euclid(DAYS_IN_WEEK) as u8
    }

    pub const fn instant(&self) -> Instant {
        self.instant
    }

    pub const fn calendar(&self) -> Calendar {
        self.calendar
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// The custom format, if one was set.
    pub fn format_string(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn ignore_list(&self) -> &[String] {
        &self.ignore_list
    }

    pub const fn is_utc(&self) -> bool {
        self.is_utc
    }

    /// Minutes east of UTC the wall clock fields are shifted by.
    pub const fn utc_offset(&self) -> i32 {
        self.utc_offset
    }

    /// Whether the last explicit year/month/day input named a real day
    /// without carrying.
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn year(&self) -> i64 {
        self.ymd().0
    }

    pub fn month(&self) -> NamedUnit<'_> {
        self.month_unit(self.ymd().1 - 1)
    }

    fn month_unit(&self, index: u8) -> NamedUnit<'_> {
        match &self.custom.months {
            Some(table) => table.unit(index),
            None => {
                let (name, short) = self.locale.months(self.calendar)[usize::from(index)];
                NamedUnit::new(name, short, index)
            }
        }
    }

    /// Day of the month
    pub fn day(&self) -> u8 {
        self.ymd().2
    }

    pub const fn hour(&self) -> u8 {
        (self.instant.millis() as i64 / MS_PER_HOUR) as u8
    }

    pub const fn minute(&self) -> u8 {
        (self.instant.millis() as i64 % MS_PER_HOUR / MS_PER_MINUTE) as u8
    }

    pub const fn second(&self) -> u8 {
        (self.instant.millis() as i64 % MS_PER_MINUTE / MS_PER_SECOND) as u8
    }

    pub const fn millisecond(&self) -> u16 {
        (self.instant.millis() as i64 % MS_PER_SECOND) as u16
    }

    /// Day of the week; `index` 0 is the calendar's first weekday.
    pub fn week_day(&self) -> NamedUnit<'_> {
        self.week_day_unit(self.week_day_index(self.instant.day()))
    }

    fn week_day_unit(&self, index: u8) -> NamedUnit<'_> {
        match &self.custom.week_days {
            Some(table) => table.unit(index),
            None => {
                let absolute = (index + self.calendar.first_week_day()) % 7;
                let (name, short) = self.locale.week_days()[usize::from(absolute)];
                NamedUnit::new(name, short, index)
            }
        }
    }

    /// 1-based day number within the year.
    pub fn day_of_year(&self) -> i64 {
        self.instant.day() - jdn::year_start(self.calendar, self.year()) + 1
    }

    /// 1-based week number within the year; week 1 holds the first day of
    /// the year.
    pub fn week_of_year(&self) -> i64 {
        let first = jdn::year_start(self.calendar, self.year());
        (self.day_of_year() - 1 + i64::from(self.week_day_index(first))) / DAYS_IN_WEEK + 1
    }

    /// Days remaining in the year after today.
    pub fn days_left(&self) -> i64 {
        self.calendar.days_in_year(self.year()) - self.day_of_year()
    }

    pub fn is_leap(&self) -> bool {
        self.calendar.is_leap_year(self.year())
    }

    /// Days elapsed since day 1 of month 1 of year 1 of the calendar.
    pub fn day_of_beginning(&self) -> i64 {
        self.instant.day() - self.calendar.epoch()
    }

    /// Leap years from year 1 up to and including the current year, in
    /// order. The years are produced lazily; use
    /// [`leap_year_count`](Self::leap_year_count) when only the number is
    /// needed.
    pub fn leap_years(&self) -> impl Iterator<Item = i64> + use<> {
        let calendar = self.calendar;
        (1..=self.year()).filter(move |&year| calendar.is_leap_year(year))
    }

    /// Number of leap years from year 1 up to and including the current
    /// year, computed from the calendar's day count.
    pub fn leap_year_count(&self) -> i64 {
        let year = self.year();
        if year < 1 {
            return 0;
        }
        let common = self.calendar.days_in_year(year) - i64::from(self.is_leap());
        jdn::year_start(self.calendar, year) - self.calendar.epoch() - common * (year - 1)
            + i64::from(self.is_leap())
    }

    /// Every month of the current calendar, as named by the current locale.
    pub fn months(&self) -> Vec<NamedUnit<'_>> {
        (0..LAST_MONTH).map(|index| self.month_unit(index)).collect()
    }

    /// Every weekday, starting from the calendar's first weekday.
    pub fn week_days(&self) -> Vec<NamedUnit<'_>> {
        (0..7).map(|index| self.week_day_unit(index)).collect()
    }

    pub fn meridiems(&self) -> &'static [Meridiem; 2] {
        self.locale.meridiems()
    }

    /// Ante or post meridiem label of the current time.
    pub fn meridiem(&self) -> Meridiem {
        self.meridiems()[usize::from(self.hour() >= 12)]
    }

    /// Digit glyphs 0 through 9 used when formatting.
    pub fn digits(&self) -> Vec<&str> {
        match &self.custom.digits {
            Some(table) => table.iter().map(String::as_str).collect(),
            None => self.locale.digits().to_vec(),
        }
    }

    // --- setters ---

    /// Points the instant at `(year, month, day)` of the current calendar,
    /// keeping the time of day.
    fn set_ymd(&mut self, year: i64, month: i64, day: i64) -> &mut Self {
        self.is_valid = jdn::is_valid_date(self.calendar, year, month, day);
        let day_count = jdn::to_jdn(self.calendar, year, month, day);
        self.instant = self.instant.with_day(day_count);
        self
    }

    /// Points the instant at day `day_of_year` (1-based) of `year`, keeping
    /// the time of day. Days past the end of the year carry.
    fn set_year_day(&mut self, year: i64, day_of_year: i64) -> &mut Self {
        self.is_valid = (1..=self.calendar.days_in_year(year)).contains(&day_of_year);
        let day_count = jdn::to_jdn(self.calendar, year, 1, day_of_year);
        self.instant = self.instant.with_day(day_count);
        self
    }

    fn set_time_of_day(&mut self, hour: i64, minute: i64, second: i64, millisecond: i64) -> &mut Self {
        let millis = hour
            .saturating_mul(MS_PER_HOUR)
            .saturating_add(minute.saturating_mul(MS_PER_MINUTE))
            .saturating_add(second.saturating_mul(MS_PER_SECOND))
            .saturating_add(millisecond);
        self.instant = self.instant.with_millis(millis);
        self
    }

    fn time_fields(&self) -> (i64, i64, i64, i64) {
        (
            i64::from(self.hour()),
            i64::from(self.minute()),
            i64::from(self.second()),
            i64::from(self.millisecond()),
        )
    }

    pub fn set_year(&mut self, year: i64) -> &mut Self {
        let (_, month, day) = self.ymd();
        self.set_ymd(year, i64::from(month), i64::from(day))
    }

    /// Sets the month by its 1-based number.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if `month` is outside `1..=12`; the
    /// date is left unchanged.
    pub fn set_month(&mut self, month: i64) -> Result<&mut Self, DateError> {
        let month = Month::new(month)?;
        let (year, _, day) = self.ymd();
        Ok(self.set_ymd(year, i64::from(month.get()), i64::from(day)))
    }

    /// Sets the day of the month; values past the month's end carry.
    pub fn set_day(&mut self, day: i64) -> &mut Self {
        let (year, month, _) = self.ymd();
        self.set_ymd(year, i64::from(month), day)
    }

    /// Sets the hour; values outside `0..24` carry into the day.
    pub fn set_hour(&mut self, hour: i64) -> &mut Self {
        let (_, minute, second, millisecond) = self.time_fields();
        self.set_time_of_day(hour, minute, second, millisecond)
    }

    pub fn set_minute(&mut self, minute: i64) -> &mut Self {
        let (hour, _, second, millisecond) = self.time_fields();
        self.set_time_of_day(hour, minute, second, millisecond)
    }

    pub fn set_second(&mut self, second: i64) -> &mut Self {
        let (hour, minute, _, millisecond) = self.time_fields();
        self.set_time_of_day(hour, minute, second, millisecond)
    }

    pub fn set_millisecond(&mut self, millisecond: i64) -> &mut Self {
        let (hour, minute, second, _) = self.time_fields();
        self.set_time_of_day(hour, minute, second, millisecond)
    }

    /// Switches the calendar the date is viewed in. The instant is kept, so
    /// converting back restores every field.
    pub fn convert(&mut self, calendar: Calendar) -> &mut Self {
        if calendar != self.calendar {
            tracing::debug!(from = %self.calendar, to = %calendar, "converting calendar");
            // Month names belong to one calendar.
            self.custom.months = None;
            self.calendar = calendar;
        }
        self
    }

    /// Alias of [`convert`](Self::convert).
    pub fn set_calendar(&mut self, calendar: Calendar) -> &mut Self {
        self.convert(calendar)
    }

    pub fn set_locale(&mut self, locale: Locale) -> &mut Self {
        tracing::trace!(%locale, "setting locale");
        self.locale = locale;
        self
    }

    pub fn set_format(&mut self, format: impl Into<String>) -> &mut Self {
        self.format = Some(format.into());
        self
    }

    /// Drops the custom format so the default one is used again.
    pub fn clear_format(&mut self) -> &mut Self {
        self.format = None;
        self
    }

    /// Substrings of the format that are printed verbatim.
    pub fn set_ignore_list<I, S>(&mut self, ignore_list: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_list = ignore_list.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_months(&mut self, months: NameTable) -> &mut Self {
        self.custom.months = Some(months);
        self
    }

    pub fn set_week_days(&mut self, week_days: NameTable) -> &mut Self {
        self.custom.week_days = Some(week_days);
        self
    }

    pub fn set_digits(&mut self, digits: DigitTable) -> &mut Self {
        self.custom.digits = Some(digits);
        self
    }

    /// Drops every custom month, weekday and digit table.
    pub fn clear_custom_names(&mut self) -> &mut Self {
        self.custom = CustomNames::default();
        self
    }

    pub fn set_instant(&mut self, instant: Instant) -> &mut Self {
        self.instant = instant;
        self.is_valid = true;
        self
    }

    /// Takes the point in time from `input`, keeping calendar, locale and
    /// format. Text is parsed with the current format.
    ///
    /// # Errors
    /// Returns `DateError::Parse` if text input cannot be parsed; the date
    /// is left unchanged.
    pub fn set_date(&mut self, input: impl Into<DateInput>) -> Result<&mut Self, DateError> {
        match input.into() {
            DateInput::Timestamp(millis) => {
                let local = millis.saturating_add(i64::from(self.utc_offset) * MS_PER_MINUTE);
                self.set_instant(Instant::from_unix_millis(local));
            }
            DateInput::SystemTime(time) => {
                let millis = Self::from_system_time(time).value_of();
                return self.set_date(millis);
            }
            DateInput::Text(text) => {
                self.parse(&text)?;
            }
            DateInput::Date(other) => {
                return self.set_date(other.value_of());
            }
        }
        Ok(self)
    }

    /// Shifts the wall clock fields to a fixed offset of `minutes` east of
    /// UTC. The point in time is unchanged.
    pub fn set_utc_offset(&mut self, minutes: i32) -> &mut Self {
        let shift = i64::from(minutes) - i64::from(self.utc_offset);
        self.instant = self.instant.add_millis(shift * MS_PER_MINUTE);
        self.utc_offset = minutes;
        self.is_utc = minutes == 0 && self.is_utc;
        self
    }

    /// Shifts the wall clock fields to UTC and marks the date as UTC.
    #[allow(clippy::wrong_self_convention)]
    pub fn to_utc(&mut self) -> &mut Self {
        self.set_utc_offset(0);
        self.is_utc = true;
        self
    }

    // --- output ---

    /// Milliseconds since 1970-01-01T00:00:00 UTC.
    pub fn value_of(&self) -> i64 {
        self.instant
            .unix_millis()
            .saturating_sub(i64::from(self.utc_offset) * MS_PER_MINUTE)
    }

    /// Seconds since 1970-01-01T00:00:00 UTC.
    pub fn unix(&self) -> i64 {
        self.value_of().div_euclid(MS_PER_SECOND)
    }

    /// Julian Day Number of the wall clock date.
    pub const fn to_julian_day(&self) -> i64 {
        self.instant.day()
    }

    /// `None` when the date is outside the platform's `SystemTime` range.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        let millis = self.value_of();
        let magnitude = Duration::from_millis(millis.unsigned_abs());
        if millis >= 0 {
            UNIX_EPOCH.checked_add(magnitude)
        } else {
            UNIX_EPOCH.checked_sub(magnitude)
        }
    }

    pub fn to_object(&self) -> DateSnapshot<'_> {
        DateSnapshot {
            year:         self.year(),
            month:        self.month(),
            day:          self.day(),
            week_day:     self.week_day(),
            hour:         self.hour(),
            minute:       self.minute(),
            second:       self.second(),
            millisecond:  self.millisecond(),
            week_of_year: self.week_of_year(),
            day_of_year:  self.day_of_year(),
            days_left:    self.days_left(),
            calendar:     self.calendar,
            locale:       self.locale,
            format:       self.format_string(),
        }
    }
}

impl fmt::Display for DateObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for DateObject {
    type Err = DateError;

    /// Parses with the default parse format in the Gregorian calendar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut date = Self::now();
        date.parse(s)?;
        Ok(date)
    }
}

impl From<SystemTime> for DateObject {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

impl Serialize for DateObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let config = DateConfig::deserialize(deserializer)?;
        Self::from_config(&config).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{at, date_in, gregorian};

    #[test]
    fn test_unix_zero_is_epoch() {
        let date = DateObject::from_unix_millis(0);
        assert_eq!(date.year(), 1970);
        assert_eq!(date.month().number, 1);
        assert_eq!(date.day(), 1);
        assert_eq!((date.hour(), date.minute(), date.second()), (0, 0, 0));
        assert_eq!(date.value_of(), 0);
        assert_eq!(date.week_day().name, "Thursday");
    }

    #[test]
    fn test_known_reference_day_in_every_calendar() {
        struct TestCase {
            calendar: Calendar,
            ymd:      (i64, u8, u8),
            month:    &'static str,
        }

        let cases = [
            TestCase {
                calendar: Calendar::Gregorian,
                ymd:      (2020, 12, 6),
                month:    "December",
            },
            TestCase {
                calendar: Calendar::Persian,
                ymd:      (1399, 9, 16),
                month:    "Azar",
            },
            TestCase {
                calendar: Calendar::Arabic,
                ymd:      (1442, 4, 20),
                month:    "Rabi ul-Thani",
            },
            TestCase {
                calendar: Calendar::Indian,
                ymd:      (1942, 9, 15),
                month:    "Agrahayana",
            },
        ];

        let mut date = gregorian(2020, 12, 6);
        for case in &cases {
            date.convert(case.calendar);
            assert_eq!(
                (date.year(), date.month().number, date.day()),
                case.ymd,
                "{}",
                case.calendar
            );
            assert_eq!(date.month().name, case.month, "{}", case.calendar);
        }
    }

    #[test]
    fn test_conversion_round_trip_keeps_fields() {
        let original = at(gregorian(2021, 7, 23), 13, 45, 12, 250);
        for from in Calendar::ALL {
            for to in Calendar::ALL {
                let mut date = original.clone();
                date.convert(from);
                let before = (date.year(), date.month().number, date.day());
                date.convert(to).convert(from);
                assert_eq!((date.year(), date.month().number, date.day()), before);
                assert_eq!(date.instant(), original.instant());
                assert_eq!(
                    (date.hour(), date.minute(), date.second(), date.millisecond()),
                    (13, 45, 12, 250)
                );
            }
        }
    }

    #[test]
    fn test_week_day_follows_calendar_week_start() {
        // 2020-12-05 was a Saturday
        let mut date = gregorian(2020, 12, 5);
        assert_eq!(date.week_day().name, "Saturday");
        assert_eq!(date.week_day().index, 6);

        date.convert(Calendar::Persian);
        assert_eq!(date.week_day().name, "Saturday");
        assert_eq!(date.week_day().index, 0);
        assert_eq!(date.week_day().number, 1);

        date.set_locale(Locale::Fa);
        assert_eq!(date.week_day().name, "شنبه");
    }

    #[test]
    fn test_day_of_year_and_days_left() {
        let date = gregorian(2020, 12, 31);
        assert_eq!(date.day_of_year(), 366);
        assert_eq!(date.days_left(), 0);
        assert!(date.is_leap());

        let date = gregorian(2021, 3, 1);
        assert_eq!(date.day_of_year(), 60);
        assert_eq!(date.days_left(), 305);
    }

    #[test]
    fn test_week_of_year() {
        // 2021-01-01 was a Friday: Jan 1-2 are week 1, Jan 3 starts week 2
        assert_eq!(gregorian(2021, 1, 1).week_of_year(), 1);
        assert_eq!(gregorian(2021, 1, 2).week_of_year(), 1);
        assert_eq!(gregorian(2021, 1, 3).week_of_year(), 2);
        assert_eq!(gregorian(2021, 12, 31).week_of_year(), 53);
    }

    #[test]
    fn test_day_of_beginning() {
        let date = gregorian(1, 1, 1);
        assert_eq!(date.day_of_beginning(), 0);
        assert_eq!(gregorian(1, 1, 31).day_of_beginning(), 30);
        assert_eq!(gregorian(2, 1, 1).day_of_beginning(), 365);
    }

    #[test]
    fn test_leap_years() {
        let date = gregorian(20, 6, 1);
        assert_eq!(date.leap_years().collect::<Vec<_>>(), vec![4, 8, 12, 16, 20]);
        assert_eq!(gregorian(-5, 1, 1).leap_years().next(), None);
    }

    #[test]
    fn test_leap_year_count() {
        assert_eq!(gregorian(20, 6, 1).leap_year_count(), 5);
        assert_eq!(gregorian(2020, 1, 1).leap_year_count(), 490);
        assert_eq!(gregorian(-5, 1, 1).leap_year_count(), 0);

        for calendar in Calendar::ALL {
            for year in [1, 2, 33, 400, 1399, 1442, 2021] {
                let date = date_in(calendar, year, 1, 1);
                let listed = date.leap_years().count() as i64;
                assert_eq!(date.leap_year_count(), listed, "{calendar} {year}");
            }
        }

        let far = gregorian(100_000_000_000, 1, 1);
        assert_eq!(far.leap_year_count(), 24_250_000_000);
    }

    #[test]
    fn test_setters_recompute_instant() {
        let mut date = gregorian(2020, 2, 29);
        date.set_year(2024);
        assert_eq!((date.year(), date.month().number, date.day()), (2024, 2, 29));
        assert!(date.is_valid());

        date.set_year(2021);
        assert_eq!((date.year(), date.month().number, date.day()), (2021, 3, 1));
        assert!(!date.is_valid());

        date.set_month(12).unwrap().set_day(25);
        assert_eq!((date.year(), date.month().number, date.day()), (2021, 12, 25));
        assert!(date.is_valid());
    }

    #[test]
    fn test_set_month_rejects_out_of_range() {
        let mut date = gregorian(2021, 5, 10);
        let before = date.clone();
        assert_eq!(date.set_month(13).err(), Some(DateError::InvalidMonth(13)));
        assert_eq!(date.set_month(0).err(), Some(DateError::InvalidMonth(0)));
        assert_eq!(date, before);
    }

    #[test]
    fn test_day_overflow_carries_and_marks_invalid() {
        let date = DateObject::from_ymd(Calendar::Gregorian, 2021, 1, 32);
        assert_eq!((date.year(), date.month().number, date.day()), (2021, 2, 1));
        assert!(!date.is_valid());

        let date = DateObject::from_ymd(Calendar::Gregorian, 2021, 13, 1);
        assert_eq!((date.year(), date.month().number, date.day()), (2022, 1, 1));
        assert!(!date.is_valid());

        let date = DateObject::from_ymd(Calendar::Persian, 1399, 12, 30);
        assert!(date.is_valid());
    }

    #[test]
    fn test_extreme_months_saturate() {
        for month in [i64::MIN, i64::MAX] {
            for calendar in Calendar::ALL {
                let date = DateObject::from_ymd(calendar, 2020, month, 1);
                assert!(!date.is_valid(), "{calendar} month {month}");
                assert_eq!(date.year().signum(), month.signum(), "{calendar} month {month}");
            }
        }
    }

    #[test]
    fn test_time_setters_carry() {
        let mut date = at(gregorian(2021, 1, 31), 10, 0, 0, 0);
        date.set_minute(75);
        assert_eq!((date.hour(), date.minute()), (11, 15));

        date.set_hour(25);
        assert_eq!((date.month().number, date.day(), date.hour()), (2, 1, 1));

        date.set_second(-1);
        assert_eq!((date.hour(), date.minute(), date.second()), (1, 14, 59));

        date.set_millisecond(1500);
        assert_eq!((date.minute(), date.second(), date.millisecond()), (15, 0, 500));
    }

    #[test]
    fn test_custom_names_override_locale() {
        let mut date = gregorian(2020, 12, 6);
        date.set_months(
            NameTable::months([
                ("jan", "j"),
                ("feb", "f"),
                ("mar", "m"),
                ("apr", "a"),
                ("may", "m"),
                ("jun", "j"),
                ("jul", "j"),
                ("aug", "a"),
                ("sep", "s"),
                ("oct", "o"),
                ("nov", "n"),
                ("dec", "d"),
            ])
            .unwrap(),
        );
        assert_eq!(date.month(), NamedUnit::new("dec", "d", 11));
        assert_eq!(date.months().len(), 12);

        date.set_digits(DigitTable::new(["o", "i", "z", "e", "h", "s", "G", "t", "B", "g"]).unwrap());
        assert_eq!(date.digits()[2], "z");

        // custom month names belong to the calendar they were set for
        date.convert(Calendar::Persian);
        assert_eq!(date.month().name, "Azar");
        assert_eq!(date.digits()[2], "z");
    }

    #[test]
    fn test_set_date_variants() {
        let mut date = gregorian(2000, 1, 1);
        date.set_date(0_i64).unwrap();
        assert_eq!(date.year(), 1970);

        let other = gregorian(2021, 4, 5);
        date.set_date(other).unwrap();
        assert_eq!((date.year(), date.month().number, date.day()), (2021, 4, 5));

        let mut shifted = DateObject::from_unix_millis(0);
        shifted.set_utc_offset(210);
        date.set_date(shifted.clone()).unwrap();
        assert_eq!(date.value_of(), 0);
        assert_eq!((date.hour(), date.minute()), (0, 0));

        let mut behind = gregorian(2000, 1, 1);
        behind.set_utc_offset(-60);
        behind.set_date(shifted).unwrap();
        assert_eq!(behind.value_of(), 0);
        assert_eq!((behind.year(), behind.hour()), (1969, 23));

        date.set_date(UNIX_EPOCH).unwrap();
        assert_eq!(date.value_of(), 0);

        date.set_date("2020/12/06").unwrap();
        assert_eq!((date.year(), date.month().number, date.day()), (2020, 12, 6));

        let before = date.clone();
        assert!(date.set_date("not a date").is_err());
        assert_eq!(date, before);
    }

    #[test]
    fn test_utc_offset_only_affects_boundaries() {
        let mut date = DateObject::from_unix_millis(0);
        date.set_utc_offset(210);
        assert_eq!((date.hour(), date.minute()), (3, 30));
        assert_eq!(date.value_of(), 0);
        assert!(!date.is_utc());

        date.to_utc();
        assert_eq!((date.hour(), date.minute()), (0, 0));
        assert_eq!(date.value_of(), 0);
        assert!(date.is_utc());
    }

    #[test]
    fn test_value_of_unix_and_julian_day() {
        let date = at(gregorian(2020, 12, 6), 0, 0, 1, 500);
        assert_eq!(date.value_of(), 1_607_212_801_500);
        assert_eq!(date.unix(), 1_607_212_801);
        assert_eq!(date.to_julian_day(), 2_459_190);
    }

    #[test]
    fn test_system_time_round_trip() {
        let date = DateObject::from_unix_millis(1_607_212_801_500);
        let time = date.to_system_time().unwrap();
        assert_eq!(DateObject::from(time).value_of(), 1_607_212_801_500);

        let before_epoch = DateObject::from_unix_millis(-86_400_000);
        let time = before_epoch.to_system_time().unwrap();
        assert_eq!(DateObject::from_system_time(time).value_of(), -86_400_000);
    }

    #[test]
    fn test_to_object_snapshot() {
        let mut date = at(gregorian(2020, 12, 6), 18, 50, 0, 0);
        date.set_format("YYYY");
        let object = date.to_object();
        assert_eq!(object.year, 2020);
        assert_eq!(object.month.name, "December");
        assert_eq!(object.week_day.name, "Sunday");
        assert_eq!(object.day_of_year, 341);
        assert_eq!(object.days_left, 25);
        assert_eq!(object.format, Some("YYYY"));
    }

    #[test]
    fn test_serde() {
        let date = gregorian(2020, 12, 6);
        let json = serde_json::to_value(&date).unwrap();
        assert_eq!(json["year"], 2020);
        assert_eq!(json["month"]["shortName"], "Dec");
        assert_eq!(json["weekDay"]["number"], 1);
        assert_eq!(json["calendar"], "gregorian");
        assert_eq!(json["locale"], "en");

        let parsed: DateObject =
            serde_json::from_str(r#"{"year": 1399, "month": 9, "day": 16, "calendar": "persian"}"#)
                .unwrap();
        assert_eq!(parsed.to_julian_day(), 2_459_190);

        let result: Result<DateObject, _> = serde_json::from_str(r#"{"calendar": "julian"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_uses_format() {
        let mut date = gregorian(2020, 12, 2);
        assert_eq!(date.to_string(), "2020/12/02");
        date.set_format("MM/DD/YYYY");
        assert_eq!(date.to_string(), "12/02/2020");
    }

    #[test]
    fn test_from_str() {
        let date: DateObject = "2020 12 06 10 30 15 250 pm".parse().unwrap();
        assert_eq!((date.year(), date.month().number, date.day()), (2020, 12, 6));
        assert_eq!(
            (date.hour(), date.minute(), date.second(), date.millisecond()),
            (22, 30, 15, 250)
        );

        assert!("".parse::<DateObject>().is_err());
    }
}
