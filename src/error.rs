use crate::ParseError;

/// Error type for all fallible operations on a [`DateObject`](crate::DateObject).
///
/// A failing operation never leaves the value half-updated: either every
/// requested change is applied or none is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Calendar key is not one of `gregorian`, `persian`, `arabic`, `indian`.
    #[error("Unknown calendar: {0}")]
    UnknownCalendar(String),

    /// Locale key is not one of `en`, `fa`, `ar`, `hi`.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Duration unit passed to `add`/`subtract` is not recognized.
    #[error("Unknown duration unit: {0}")]
    UnknownUnit(String),

    /// Property key passed to `get_property`/`set_property` is not recognized.
    #[error("Unknown property: {0}")]
    UnknownField(String),

    /// Property exists but cannot be written.
    #[error("Property {0} is read-only")]
    ReadOnlyField(String),

    /// Month number outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i64),

    /// A custom name table with the wrong number of entries.
    #[error("Invalid {kind} table: expected {expected} entries, found {found}")]
    InvalidNameTable {
        kind:     &'static str,
        expected: usize,
        found:    usize,
    },

    /// Property value has the wrong shape for the key it was assigned to.
    #[error("Invalid value for {field}: expected {expected}")]
    InvalidValue {
        field:    String,
        expected: &'static str,
    },

    /// Error parsing a date string.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DateError::UnknownCalendar("julian".into()).to_string(),
            "Unknown calendar: julian"
        );
        assert_eq!(DateError::InvalidMonth(13).to_string(), "Invalid month: 13 (must be 1-12)");
        assert_eq!(
            DateError::InvalidNameTable {
                kind:     "month",
                expected: 12,
                found:    3,
            }
            .to_string(),
            "Invalid month table: expected 12 entries, found 3"
        );
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: DateError = ParseError::EmptyInput.into();
        assert_eq!(err.to_string(), ParseError::EmptyInput.to_string());
    }
}
