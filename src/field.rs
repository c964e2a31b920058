//! Access to date properties by their string key.

use std::str::FromStr;

use crate::{
    DateError, DateObject, DigitTable, NameTable, NamedUnit,
    consts::DEFAULT_FORMAT,
    prelude::*,
};

/// Every property reachable through [`DateObject::get_property`] and
/// [`DateObject::set_property`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
    #[display(fmt = "millisecond")]
    Millisecond,
    #[display(fmt = "weekDay")]
    WeekDay,
    #[display(fmt = "dayOfYear")]
    DayOfYear,
    #[display(fmt = "weekOfYear")]
    WeekOfYear,
    #[display(fmt = "daysLeft")]
    DaysLeft,
    #[display(fmt = "dayOfBeginning")]
    DayOfBeginning,
    #[display(fmt = "calendar")]
    Calendar,
    #[display(fmt = "locale")]
    Locale,
    #[display(fmt = "format")]
    Format,
    #[display(fmt = "unix")]
    Unix,
    #[display(fmt = "julianDay")]
    JulianDay,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "weekDays")]
    WeekDays,
    #[display(fmt = "digits")]
    Digits,
    #[display(fmt = "ignoreList")]
    IgnoreList,
    /// Milliseconds since the unix epoch on read; a timestamp or text on
    /// write
    #[display(fmt = "date")]
    Date,
}

impl Field {
    pub const ALL: [Self; 22] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
        Self::Millisecond,
        Self::WeekDay,
        Self::DayOfYear,
        Self::WeekOfYear,
        Self::DaysLeft,
        Self::DayOfBeginning,
        Self::Calendar,
        Self::Locale,
        Self::Format,
        Self::Unix,
        Self::JulianDay,
        Self::Months,
        Self::WeekDays,
        Self::Digits,
        Self::IgnoreList,
        Self::Date,
    ];

    /// Whether [`DateObject::set_property`] accepts this field. Derived
    /// counts can only be read.
    pub const fn is_writable(self) -> bool {
        !matches!(
            self,
            Self::WeekDay
                | Self::DayOfYear
                | Self::WeekOfYear
                | Self::DaysLeft
                | Self::DayOfBeginning
                | Self::Unix
                | Self::JulianDay
        )
    }
}

impl FromStr for Field {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.to_string() == s)
            .ok_or_else(|| DateError::UnknownField(s.to_owned()))
    }
}

/// A property value.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Value {
    Number(i64),
    Text(String),
    List(Vec<String>),
    /// `(name, short name)` pairs
    Names(Vec<(String, String)>),
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

fn name_pairs(units: &[NamedUnit<'_>]) -> Value {
    Value::Names(
        units
            .iter()
            .map(|unit| (unit.name.to_owned(), unit.short_name.to_owned()))
            .collect(),
    )
}

impl DateObject {
    /// Reads the property named `key`.
    ///
    /// # Errors
    /// Returns `DateError::UnknownField` if `key` names no property.
    pub fn get_property(&self, key: &str) -> Result<Value, DateError> {
        let value = match key.parse::<Field>()? {
            Field::Year => Value::Number(self.year()),
            Field::Month => Value::Number(i64::from(self.month().number)),
            Field::Day => Value::Number(i64::from(self.day())),
            Field::Hour => Value::Number(i64::from(self.hour())),
            Field::Minute => Value::Number(i64::from(self.minute())),
            Field::Second => Value::Number(i64::from(self.second())),
            Field::Millisecond => Value::Number(i64::from(self.millisecond())),
            Field::WeekDay => Value::Number(i64::from(self.week_day().number)),
            Field::DayOfYear => Value::Number(self.day_of_year()),
            Field::WeekOfYear => Value::Number(self.week_of_year()),
            Field::DaysLeft => Value::Number(self.days_left()),
            Field::DayOfBeginning => Value::Number(self.day_of_beginning()),
            Field::Calendar => Value::from(self.calendar.key()),
            Field::Locale => Value::from(self.locale.key()),
            Field::Format => Value::from(self.format_string().unwrap_or(DEFAULT_FORMAT)),
            Field::Unix => Value::Number(self.unix()),
            Field::JulianDay => Value::Number(self.to_julian_day()),
            Field::Months => name_pairs(&self.months()),
            Field::WeekDays => name_pairs(&self.week_days()),
            Field::Digits => Value::List(self.digits().into_iter().map(str::to_owned).collect()),
            Field::IgnoreList => Value::List(self.ignore_list.clone()),
            Field::Date => Value::Number(self.value_of()),
        };
        Ok(value)
    }

    /// Writes the property named `key`.
    ///
    /// ```
    /// use date_object::DateObject;
    ///
    /// let mut date = DateObject::from_unix_millis(0);
    /// date.set_property("calendar", "persian").unwrap().set_property("year", 1400_i64).unwrap();
    /// assert_eq!(date.year(), 1400);
    /// ```
    ///
    /// # Errors
    /// Returns `DateError::UnknownField` for an unknown key,
    /// `DateError::ReadOnlyField` for a derived property and
    /// `DateError::InvalidValue` when `value` has the wrong shape. Errors
    /// from the underlying setter are passed through. The date is left
    /// unchanged on error.
    pub fn set_property(&mut self, key: &str, value: impl Into<Value>) -> Result<&mut Self, DateError> {
        let field: Field = key.parse()?;
        if !field.is_writable() {
            return Err(DateError::ReadOnlyField(key.to_owned()));
        }
        let invalid = |expected| DateError::InvalidValue {
            field: key.to_owned(),
            expected,
        };

        match (field, value.into()) {
            (Field::Year, Value::Number(year)) => self.set_year(year),
            (Field::Month, Value::Number(month)) => self.set_month(month)?,
            (Field::Day, Value::Number(day)) => self.set_day(day),
            (Field::Hour, Value::Number(hour)) => self.set_hour(hour),
            (Field::Minute, Value::Number(minute)) => self.set_minute(minute),
            (Field::Second, Value::Number(second)) => self.set_second(second),
            (Field::Millisecond, Value::Number(millisecond)) => self.set_millisecond(millisecond),
            (Field::Calendar, Value::Text(name)) => self.set_calendar(name.parse()?),
            (Field::Locale, Value::Text(name)) => self.set_locale(name.parse()?),
            (Field::Format, Value::Text(format)) => self.set_format(format),
            (Field::Months, Value::Names(names)) => self.set_months(NameTable::months(names)?),
            (Field::WeekDays, Value::Names(names)) => self.set_week_days(NameTable::week_days(names)?),
            (Field::Digits, Value::List(glyphs)) => self.set_digits(DigitTable::new(glyphs)?),
            (Field::IgnoreList, Value::List(ignore_list)) => self.set_ignore_list(ignore_list),
            (Field::Date, Value::Number(millis)) => self.set_date(millis)?,
            (Field::Date, Value::Text(text)) => self.set_date(text)?,
            (
                Field::Year
                | Field::Month
                | Field::Day
                | Field::Hour
                | Field::Minute
                | Field::Second
                | Field::Millisecond,
                _,
            ) => return Err(invalid("a number")),
            (Field::Calendar | Field::Locale | Field::Format, _) => return Err(invalid("text")),
            (Field::Months | Field::WeekDays, _) => return Err(invalid("a list of name pairs")),
            (Field::Digits | Field::IgnoreList, _) => return Err(invalid("a list of strings")),
            (Field::Date, _) => return Err(invalid("a timestamp or text")),
            (_, _) => return Err(DateError::ReadOnlyField(key.to_owned())),
        };
        Ok(self)
    }
}
