/// Number of months in every supported calendar
pub const MONTHS_IN_YEAR: u8 = 12;

/// Number of days in a week
pub const DAYS_IN_WEEK: i64 = 7;

/// Number of digit glyphs in a digit table (0-9)
pub const DIGIT_COUNT: usize = 10;

/// First day of month, used for lower bounds
pub const MIN_DAY: i64 = 1;

/// Month number for January (or the first month of any calendar)
pub const FIRST_MONTH: u8 = 1;
/// Month number for the last month of any calendar
pub const LAST_MONTH: u8 = 12;

/// Milliseconds in one second
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds in one minute
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds in one hour
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Milliseconds in one day
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Julian Day Number of 1970-01-01 (Gregorian)
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Julian Day Number of 0001-01-01 in the proleptic Gregorian calendar
pub(crate) const GREGORIAN_EPOCH_JDN: i64 = 1_721_426;
/// Julian Day Number of 1 Farvardin 1 under the 33-year arithmetic rule
pub(crate) const PERSIAN_EPOCH_JDN: i64 = 1_948_320;
/// Julian Day Number of 1 Muharram 1 (civil tabular epoch)
pub(crate) const ARABIC_EPOCH_JDN: i64 = 1_948_440;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;
/// Days in a full 400-year Gregorian cycle
pub(crate) const GREGORIAN_CYCLE_DAYS: i64 = 146_097;

/// Length of the Persian arithmetic leap cycle, in years
pub(crate) const PERSIAN_CYCLE: i64 = 33;
/// Days in a full 33-year Persian cycle
pub(crate) const PERSIAN_CYCLE_DAYS: i64 = 12_053;
/// Positions of the leap years inside a 33-year Persian cycle
pub(crate) const PERSIAN_LEAP_RESIDUES: [i64; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

/// Length of the tabular Islamic leap cycle, in years
pub(crate) const ARABIC_CYCLE: i64 = 30;
/// Days in a full 30-year Islamic cycle
pub(crate) const ARABIC_CYCLE_DAYS: i64 = 10_631;

/// The Saka era is 78 years behind the Gregorian one
pub(crate) const INDIAN_YEAR_OFFSET: i64 = 78;
/// Chaitra 1 falls on March 22 (March 21 in leap years)
pub(crate) const INDIAN_NEW_YEAR: (i64, i64) = (3, 22);

/// Day counts are clamped to this magnitude; arithmetic beyond it saturates
pub const MAX_DAY_COUNT: i64 = 365_242_500_000_000;
/// Years are clamped to this magnitude, which covers `MAX_DAY_COUNT` in every calendar
pub const MAX_YEAR: i64 = 2_000_000_000_000;

/// Format used by `format()` when no custom format is set
pub const DEFAULT_FORMAT: &str = "YYYY/MM/DD";
/// Format used by `parse()` when no custom format is set
pub const DEFAULT_PARSE_FORMAT: &str = "YYYY MM DD hh mm ss SSS a";
