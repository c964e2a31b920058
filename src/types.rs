use crate::{
    DateError,
    consts::{DIGIT_COUNT, FIRST_MONTH, LAST_MONTH},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month number guaranteed to be in the range `1..=12`.
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=12`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is outside `1..=12`.
    pub fn new(value: i64) -> Result<Self, DateError> {
        if !(i64::from(FIRST_MONTH)..=i64::from(LAST_MONTH)).contains(&value) {
            return Err(DateError::InvalidMonth(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(DateError::InvalidMonth(value))
    }

    /// Clamps `value` into `1..=12`.
    pub(crate) const fn saturating(value: i64) -> Self {
        let value = if value < FIRST_MONTH as i64 {
            FIRST_MONTH
        } else if value > LAST_MONTH as i64 {
            LAST_MONTH
        } else {
            value as u8
        };
        match NonZeroU8::new(value) {
            Some(month) => Self(month),
            None => Self(NonZeroU8::MIN),
        }
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based position of the month in the year
    #[inline]
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month or weekday as seen through a locale: its names plus its position.
///
/// `number` is always `index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedUnit<'a> {
    pub name:       &'a str,
    pub short_name: &'a str,
    pub number:     u8,
    pub index:      u8,
}

impl<'a> NamedUnit<'a> {
    pub(crate) const fn new(name: &'a str, short_name: &'a str, index: u8) -> Self {
        Self {
            name,
            short_name,
            number: index + 1,
            index,
        }
    }
}

impl fmt::Display for NamedUnit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl From<NamedUnit<'_>> for u8 {
    fn from(unit: NamedUnit<'_>) -> Self {
        unit.number
    }
}

/// Ante/post meridiem label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meridiem {
    pub name:       &'static str,
    pub short_name: &'static str,
}

/// User supplied `(name, short name)` pairs replacing a locale's month or
/// weekday names. The length is checked on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Into)]
pub struct NameTable(Vec<(String, String)>);

impl NameTable {
    /// Twelve month names, first month first.
    ///
    /// # Errors
    /// Returns `DateError::InvalidNameTable` unless exactly 12 pairs are given.
    pub fn months<I, N, S>(entries: I) -> Result<Self, DateError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        Self::with_len("month", usize::from(LAST_MONTH), entries)
    }

    /// Seven weekday names, in the calendar's week order.
    ///
    /// # Errors
    /// Returns `DateError::InvalidNameTable` unless exactly 7 pairs are given.
    pub fn week_days<I, N, S>(entries: I) -> Result<Self, DateError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        Self::with_len("weekday", 7, entries)
    }

    fn with_len<I, N, S>(kind: &'static str, expected: usize, entries: I) -> Result<Self, DateError>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let table: Vec<(String, String)> = entries
            .into_iter()
            .map(|(name, short)| (name.into(), short.into()))
            .collect();
        if table.len() != expected {
            return Err(DateError::InvalidNameTable {
                kind,
                expected,
                found: table.len(),
            });
        }
        Ok(Self(table))
    }

    pub(crate) fn unit(&self, index: u8) -> NamedUnit<'_> {
        let (name, short) = &self.0[usize::from(index)];
        NamedUnit::new(name, short, index)
    }
}

/// User supplied glyphs for the digits 0 through 9.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Into)]
pub struct DigitTable(Vec<String>);

impl DigitTable {
    /// # Errors
    /// Returns `DateError::InvalidNameTable` unless exactly 10 glyphs are given.
    pub fn new<I, S>(glyphs: I) -> Result<Self, DateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table: Vec<String> = glyphs.into_iter().map(Into::into).collect();
        if table.len() != DIGIT_COUNT {
            return Err(DateError::InvalidNameTable {
                kind:     "digit",
                expected: DIGIT_COUNT,
                found:    table.len(),
            });
        }
        Ok(Self(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        for m in [0, 13, -1, 255, i64::MAX] {
            assert!(
                matches!(Month::new(m), Err(DateError::InvalidMonth(v)) if v == m),
                "Month {m} should be invalid"
            );
        }
    }

    #[test]
    fn test_month_get_and_index() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.get(), 8);
        assert_eq!(month.index(), 7);
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_named_unit_number_follows_index() {
        let unit = NamedUnit::new("January", "Jan", 0);
        assert_eq!(unit.number, 1);
        assert_eq!(unit.index, 0);
        assert_eq!(unit.to_string(), "January");
        assert_eq!(u8::from(unit), 1);
    }

    #[test]
    fn test_name_table_length_is_checked() {
        let short = NameTable::months([("a", "a"); 11]);
        assert_eq!(
            short,
            Err(DateError::InvalidNameTable {
                kind:     "month",
                expected: 12,
                found:    11,
            })
        );

        let table = NameTable::week_days([("su", "s"), ("mo", "m"), ("tu", "t"), ("we", "w"), ("th", "t"), ("fr", "f"), ("sa", "s")]).unwrap();
        assert_eq!(table.len(), 7);
        assert_eq!(table.unit(1), NamedUnit::new("mo", "m", 1));
    }

    #[test]
    fn test_digit_table_length_is_checked() {
        assert!(DigitTable::new(["0", "1"]).is_err());
        let digits = DigitTable::new(["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]).unwrap();
        assert_eq!(digits[3], "d");
    }

    #[test]
    fn test_named_unit_serializes_camel_case() {
        let json = serde_json::to_string(&NamedUnit::new("Azar", "Aza", 8)).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Azar","shortName":"Aza","number":9,"index":8}"#
        );
    }
}
