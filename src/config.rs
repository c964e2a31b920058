//! Declarative construction and bulk updates of a [`DateObject`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Calendar, DateError, DateObject, DigitTable, Locale, NameTable, prelude::*};

/// Where a configured date takes its point in time from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, From)]
#[serde(untagged)]
pub enum DateSource {
    /// Milliseconds since 1970-01-01T00:00:00 UTC
    Timestamp(i64),
    /// Text read with the configured format
    Text(String),
}

impl From<&str> for DateSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Options for [`DateObject::from_config`] and [`DateObject::apply`].
///
/// Every option is optional. Loads from JSON with camelCase keys:
///
/// ```
/// use date_object::{Calendar, DateConfig, DateObject};
///
/// let config: DateConfig = serde_json::from_str(
///     r#"{ "year": 1399, "month": 9, "day": 16, "calendar": "persian", "locale": "fa" }"#,
/// )
/// .unwrap();
/// let date = DateObject::from_config(&config).unwrap();
/// assert_eq!(date.format(), "۱۳۹۹/۰۹/۱۶");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DateConfig {
    pub date:        Option<DateSource>,
    pub year:        Option<i64>,
    pub month:       Option<i64>,
    pub day:         Option<i64>,
    pub hour:        Option<i64>,
    pub minute:      Option<i64>,
    pub second:      Option<i64>,
    pub millisecond: Option<i64>,
    pub calendar:    Option<Calendar>,
    pub locale:      Option<Locale>,
    pub format:      Option<String>,
    pub ignore_list: Option<Vec<String>>,
    pub months:      Option<Vec<(String, String)>>,
    pub week_days:   Option<Vec<(String, String)>>,
    pub digits:      Option<Vec<String>>,
    /// Minutes east of UTC
    pub utc_offset:  Option<i32>,
}

type NameTables = (Option<NameTable>, Option<NameTable>, Option<DigitTable>);

impl DateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<DateSource>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Year, month and day in the configured calendar. Out of range values
    /// are carried.
    pub fn with_ymd(mut self, year: i64, month: i64, day: i64) -> Self {
        self.year = Some(year);
        self.month = Some(month);
        self.day = Some(day);
        self
    }

    pub fn with_time(mut self, hour: i64, minute: i64, second: i64, millisecond: i64) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self.second = Some(second);
        self.millisecond = Some(millisecond);
        self
    }

    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = Some(calendar);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_ignore_list<I, S>(mut self, ignore_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_list = Some(ignore_list.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_months<I, N, S>(mut self, months: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        self.months = Some(months.into_iter().map(|(n, s)| (n.into(), s.into())).collect());
        self
    }

    pub fn with_week_days<I, N, S>(mut self, week_days: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        self.week_days = Some(week_days.into_iter().map(|(n, s)| (n.into(), s.into())).collect());
        self
    }

    pub fn with_digits<I, S>(mut self, digits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.digits = Some(digits.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset = Some(minutes);
        self
    }

    /// Checks the custom name tables without building a date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidNameTable` if a month, weekday or digit
    /// table has the wrong length.
    pub fn validate(&self) -> Result<(), DateError> {
        self.name_tables().map(|_| ())
    }

    fn name_tables(&self) -> Result<NameTables, DateError> {
        let months = self.months.clone().map(NameTable::months).transpose()?;
        let week_days = self.week_days.clone().map(NameTable::week_days).transpose()?;
        let digits = self.digits.clone().map(DigitTable::new).transpose()?;
        Ok((months, week_days, digits))
    }

    pub(crate) const fn has_date_fields(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    const fn has_time_fields(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some() || self.millisecond.is_some()
    }
}

impl DateObject {
    /// Applies every option set in `config`.
    ///
    /// Settings are applied first, then the date source, then the date
    /// fields and finally the time fields, so `date` can be text in the
    /// configured format and `year` can override part of it.
    ///
    /// # Errors
    /// Returns `DateError` if a name table is invalid or the date text
    /// cannot be parsed. Nothing is changed on error.
    pub fn apply(&mut self, config: &DateConfig) -> Result<&mut Self, DateError> {
        let (months, week_days, digits) = config.name_tables()?;
        let mut next = self.clone();

        if let Some(calendar) = config.calendar {
            next.convert(calendar);
        }
        if let Some(locale) = config.locale {
            next.set_locale(locale);
        }
        if let Some(format) = &config.format {
            next.set_format(format.as_str());
        }
        if let Some(ignore_list) = &config.ignore_list {
            next.set_ignore_list(ignore_list.iter().cloned());
        }
        if let Some(minutes) = config.utc_offset {
            next.set_utc_offset(minutes);
        }
        if let Some(months) = months {
            next.set_months(months);
        }
        if let Some(week_days) = week_days {
            next.set_week_days(week_days);
        }
        if let Some(digits) = digits {
            next.set_digits(digits);
        }

        match &config.date {
            Some(DateSource::Timestamp(millis)) => {
                next.set_date(*millis)?;
            }
            Some(DateSource::Text(text)) => {
                next.set_date(text.as_str())?;
            }
            None => {}
        }

        if config.has_date_fields() {
            let (year, month, day) = next.ymd();
            next.set_ymd(
                config.year.unwrap_or(year),
                config.month.unwrap_or_else(|| i64::from(month)),
                config.day.unwrap_or_else(|| i64::from(day)),
            );
        }
        if config.has_time_fields() {
            let (hour, minute, second, millisecond) = next.time_fields();
            next.set_time_of_day(
                config.hour.unwrap_or(hour),
                config.minute.unwrap_or(minute),
                config.second.unwrap_or(second),
                config.millisecond.unwrap_or(millisecond),
            );
        }

        debug!(calendar = %next.calendar, locale = %next.locale, valid = next.is_valid, "applied date config");
        *self = next;
        Ok(self)
    }
}
