//! Duration arithmetic and snapping to calendar boundaries.

use std::str::FromStr;

use tracing::trace;

use crate::{
    DateError, DateObject, Month,
    consts::{DAYS_IN_WEEK, MAX_YEAR, MONTHS_IN_YEAR, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND},
    jdn,
    prelude::*,
};

/// Unit of a duration passed to [`DateObject::add`] and
/// [`DateObject::subtract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Unit {
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "seconds")]
    Seconds,
    #[display(fmt = "milliseconds")]
    Milliseconds,
}

impl FromStr for Unit {
    type Err = DateError;

    /// Accepts the plural, singular and short form of each unit. `M` is
    /// months and `m` is minutes; every other form ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim() {
            "M" => Self::Months,
            "m" => Self::Minutes,
            other => match other.to_ascii_lowercase().as_str() {
                "years" | "year" | "y" => Self::Years,
                "months" | "month" => Self::Months,
                "days" | "day" | "d" => Self::Days,
                "hours" | "hour" | "h" => Self::Hours,
                "minutes" | "minute" => Self::Minutes,
                "seconds" | "second" | "s" => Self::Seconds,
                "milliseconds" | "millisecond" | "ms" => Self::Milliseconds,
                _ => return Err(DateError::UnknownUnit(s.to_owned())),
            },
        };
        Ok(unit)
    }
}

#[allow(clippy::wrong_self_convention)]
impl DateObject {
    /// Moves the date by `amount` units.
    ///
    /// Years and months move the calendar fields and clamp the day to the
    /// length of the month they land in, so January 31 plus one month is the
    /// last day of February. Smaller units move the instant and carry.
    pub fn add(&mut self, amount: i64, unit: Unit) -> &mut Self {
        trace!(amount, %unit, calendar = %self.calendar, "adding duration");
        match unit {
            Unit::Years => self.shift_months(amount.saturating_mul(i64::from(MONTHS_IN_YEAR))),
            Unit::Months => self.shift_months(amount),
            Unit::Days => self.instant = self.instant.add_days(amount),
            Unit::Hours => self.instant = self.instant.add_millis(amount.saturating_mul(MS_PER_HOUR)),
            Unit::Minutes => {
                self.instant = self.instant.add_millis(amount.saturating_mul(MS_PER_MINUTE));
            }
            Unit::Seconds => {
                self.instant = self.instant.add_millis(amount.saturating_mul(MS_PER_SECOND));
            }
            Unit::Milliseconds => self.instant = self.instant.add_millis(amount),
        }
        self
    }

    pub fn subtract(&mut self, amount: i64, unit: Unit) -> &mut Self {
        self.add(amount.saturating_neg(), unit)
    }

    /// [`add`](Self::add) with the unit given by name.
    ///
    /// # Errors
    /// Returns `DateError::UnknownUnit` if `unit` is not a known unit name;
    /// the date is left unchanged.
    pub fn try_add(&mut self, amount: i64, unit: &str) -> Result<&mut Self, DateError> {
        let unit = unit.parse()?;
        Ok(self.add(amount, unit))
    }

    /// [`subtract`](Self::subtract) with the unit given by name.
    ///
    /// # Errors
    /// Returns `DateError::UnknownUnit` if `unit` is not a known unit name;
    /// the date is left unchanged.
    pub fn try_subtract(&mut self, amount: i64, unit: &str) -> Result<&mut Self, DateError> {
        let unit = unit.parse()?;
        Ok(self.subtract(amount, unit))
    }

    fn shift_months(&mut self, months: i64) {
        let (year, month, day) = self.ymd();
        let (year, month) = jdn::normalize_month(year, i64::from(month).saturating_add(months));
        let year = year.clamp(-MAX_YEAR, MAX_YEAR);
        let last = self.calendar.days_in_month(year, Month::saturating(month));
        let day_count = jdn::to_jdn(self.calendar, year, month, i64::from(day.min(last)));
        self.move_to_day(day_count);
    }

    fn move_to_day(&mut self, day_count: i64) -> &mut Self {
        self.instant = self.instant.with_day(day_count);
        self
    }

    pub fn to_first_of_month(&mut self) -> &mut Self {
        let (year, month, _) = self.ymd();
        self.move_to_day(jdn::to_jdn(self.calendar, year, i64::from(month), 1))
    }

    pub fn to_last_of_month(&mut self) -> &mut Self {
        let (year, month, _) = self.ymd();
        let last = self.calendar.days_in_month(year, Month::saturating(i64::from(month)));
        self.move_to_day(jdn::to_jdn(self.calendar, year, i64::from(month), i64::from(last)))
    }

    pub fn to_first_of_year(&mut self) -> &mut Self {
        let start = jdn::year_start(self.calendar, self.year());
        self.move_to_day(start)
    }

    pub fn to_last_of_year(&mut self) -> &mut Self {
        let end = jdn::year_start(self.calendar, self.year() + 1) - 1;
        self.move_to_day(end)
    }

    /// Moves back to the calendar's first weekday, at most 6 days.
    pub fn to_first_of_week(&mut self) -> &mut Self {
        let day = self.instant.day();
        let index = i64::from(self.week_day_index(day));
        self.move_to_day(day - index)
    }

    /// Moves forward to the calendar's last weekday, at most 6 days.
    pub fn to_last_of_week(&mut self) -> &mut Self {
        let day = self.instant.day();
        let index = i64::from(self.week_day_index(day));
        self.move_to_day(day + DAYS_IN_WEEK - 1 - index)
    }

    /// Moves to the first day of the year that starts a full week.
    pub fn to_first_week_of_year(&mut self) -> &mut Self {
        let start = jdn::year_start(self.calendar, self.year());
        let index = i64::from(self.week_day_index(start));
        self.move_to_day(start + (DAYS_IN_WEEK - index) % DAYS_IN_WEEK)
    }

    /// Moves to the last day of the year that ends a full week.
    pub fn to_last_week_of_year(&mut self) -> &mut Self {
        let end = jdn::year_start(self.calendar, self.year() + 1) - 1;
        let index = i64::from(self.week_day_index(end));
        self.move_to_day(end - (index + 1) % DAYS_IN_WEEK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Calendar,
        test_utils::{at, date_in, gregorian, ymd},
    };

    #[test]
    fn test_unit_from_str() {
        struct TestCase {
            input:    &'static str,
            expected: Result<Unit, DateError>,
        }

        let cases = [
            TestCase {
                input:    "years",
                expected: Ok(Unit::Years),
            },
            TestCase {
                input:    "y",
                expected: Ok(Unit::Years),
            },
            TestCase {
                input:    "M",
                expected: Ok(Unit::Months),
            },
            TestCase {
                input:    "month",
                expected: Ok(Unit::Months),
            },
            TestCase {
                input:    "Days",
                expected: Ok(Unit::Days),
            },
            TestCase {
                input:    "h",
                expected: Ok(Unit::Hours),
            },
            TestCase {
                input:    "m",
                expected: Ok(Unit::Minutes),
            },
            TestCase {
                input:    "second",
                expected: Ok(Unit::Seconds),
            },
            TestCase {
                input:    "ms",
                expected: Ok(Unit::Milliseconds),
            },
            TestCase {
                input:    "weeks",
                expected: Err(DateError::UnknownUnit("weeks".into())),
            },
        ];

        for case in &cases {
            assert_eq!(case.input.parse::<Unit>(), case.expected, "{}", case.input);
        }
    }

    #[test]
    fn test_month_addition_clamps_day() {
        struct TestCase {
            start:    DateObject,
            amount:   i64,
            unit:     Unit,
            expected: (i64, u8, u8),
        }

        let cases = [
            TestCase {
                start:    gregorian(2021, 1, 31),
                amount:   1,
                unit:     Unit::Months,
                expected: (2021, 2, 28),
            },
            TestCase {
                start:    gregorian(2020, 1, 31),
                amount:   1,
                unit:     Unit::Months,
                expected: (2020, 2, 29),
            },
            TestCase {
                start:    gregorian(2021, 3, 31),
                amount:   -1,
                unit:     Unit::Months,
                expected: (2021, 2, 28),
            },
            TestCase {
                start:    gregorian(2020, 2, 29),
                amount:   1,
                unit:     Unit::Years,
                expected: (2021, 2, 28),
            },
            TestCase {
                start:    gregorian(2020, 11, 15),
                amount:   14,
                unit:     Unit::Months,
                expected: (2022, 1, 15),
            },
            TestCase {
                start:    date_in(Calendar::Persian, 1399, 12, 30),
                amount:   1,
                unit:     Unit::Years,
                expected: (1400, 12, 29),
            },
            TestCase {
                start:    date_in(Calendar::Persian, 1399, 6, 31),
                amount:   1,
                unit:     Unit::Months,
                expected: (1399, 7, 30),
            },
            TestCase {
                start:    date_in(Calendar::Arabic, 1442, 1, 30),
                amount:   1,
                unit:     Unit::Months,
                expected: (1442, 2, 29),
            },
        ];

        for case in cases {
            let mut date = case.start;
            date.add(case.amount, case.unit);
            assert_eq!(ymd(&date), case.expected, "{} {}", case.amount, case.unit);
        }
    }

    #[test]
    fn test_small_units_carry() {
        let mut date = at(gregorian(2020, 12, 31), 10, 59, 0, 0);
        date.add(2, Unit::Minutes);
        assert_eq!((date.hour(), date.minute()), (11, 1));

        let mut date = at(gregorian(2020, 12, 31), 23, 59, 59, 999);
        date.add(1, Unit::Milliseconds);
        assert_eq!(ymd(&date), (2021, 1, 1));
        assert_eq!((date.hour(), date.minute(), date.second()), (0, 0, 0));

        date.subtract(1, Unit::Seconds);
        assert_eq!(ymd(&date), (2020, 12, 31));
        assert_eq!(date.second(), 59);

        date.add(25, Unit::Hours);
        assert_eq!(ymd(&date), (2021, 1, 2));

        date.subtract(366, Unit::Days);
        assert_eq!(ymd(&date), (2020, 1, 2));
    }

    #[test]
    fn test_try_add_rejects_unknown_unit() {
        let mut date = gregorian(2021, 5, 5);
        let before = date.clone();
        assert_eq!(
            date.try_add(1, "fortnight").err(),
            Some(DateError::UnknownUnit("fortnight".into()))
        );
        assert_eq!(date, before);

        date.try_add(1, "M").unwrap().try_subtract(5, "d").unwrap();
        assert_eq!(ymd(&date), (2021, 5, 31));
    }

    #[test]
    fn test_add_saturates() {
        let mut date = gregorian(2021, 1, 1);
        date.add(i64::MAX, Unit::Days);
        assert!(date.year() > 0);
        date.add(i64::MAX, Unit::Years).add(i64::MAX, Unit::Milliseconds);
        assert!(date.year() > 0);
        date.subtract(i64::MAX, Unit::Months);
        assert!(date.to_julian_day() >= -crate::MAX_DAY_COUNT);
    }

    #[test]
    fn test_month_and_year_snaps() {
        let mut date = at(gregorian(2020, 2, 10), 8, 30, 0, 0);
        date.to_last_of_month();
        assert_eq!(ymd(&date), (2020, 2, 29));
        date.to_first_of_month();
        assert_eq!(ymd(&date), (2020, 2, 1));
        date.to_last_of_year();
        assert_eq!(ymd(&date), (2020, 12, 31));
        date.to_first_of_year();
        assert_eq!(ymd(&date), (2020, 1, 1));
        assert_eq!((date.hour(), date.minute()), (8, 30));

        let mut date = date_in(Calendar::Persian, 1399, 5, 5);
        date.to_last_of_year();
        assert_eq!(ymd(&date), (1399, 12, 30));
    }

    #[test]
    fn test_week_snaps_span_six_days() {
        for calendar in Calendar::ALL {
            for offset in 0..14 {
                let mut start = gregorian(2020, 12, 1);
                start.convert(calendar).add(offset, Unit::Days);

                let mut first = start.clone();
                first.to_first_of_week();
                let mut last = start.clone();
                last.to_last_of_week();

                assert_eq!(last.to_julian_day() - first.to_julian_day(), 6, "{calendar}");
                assert_eq!(first.week_day().index, 0, "{calendar}");
                assert_eq!(last.week_day().index, 6, "{calendar}");
                assert!(first.to_julian_day() <= start.to_julian_day());
                assert!(last.to_julian_day() >= start.to_julian_day());
            }
        }
    }

    #[test]
    fn test_week_of_year_snaps() {
        // 2021-01-01 was a Friday and 2021-12-31 a Friday
        let mut date = gregorian(2021, 6, 15);
        date.to_first_week_of_year();
        assert_eq!(ymd(&date), (2021, 1, 3));
        assert_eq!(date.week_day().name, "Sunday");

        date.to_last_week_of_year();
        assert_eq!(ymd(&date), (2021, 12, 25));
        assert_eq!(date.week_day().name, "Saturday");

        // Persian weeks start on Saturday; 1 Farvardin 1400 was a Sunday
        let mut date = date_in(Calendar::Persian, 1400, 6, 1);
        date.to_first_week_of_year();
        assert_eq!(ymd(&date), (1400, 1, 7));
        assert_eq!(date.week_day().index, 0);
    }

    #[test]
    fn test_snaps_are_idempotent() {
        type Snap = fn(&mut DateObject) -> &mut DateObject;
        let snaps: [Snap; 8] = [
            DateObject::to_first_of_month,
            DateObject::to_last_of_month,
            DateObject::to_first_of_year,
            DateObject::to_last_of_year,
            DateObject::to_first_of_week,
            DateObject::to_last_of_week,
            DateObject::to_first_week_of_year,
            DateObject::to_last_week_of_year,
        ];

        for calendar in Calendar::ALL {
            for snap in snaps {
                let mut once = at(gregorian(2021, 7, 14), 9, 15, 0, 0);
                once.convert(calendar);
                snap(&mut once);
                let mut twice = once.clone();
                snap(&mut twice);
                assert_eq!(once, twice, "{calendar}");
                assert_eq!((once.hour(), once.minute()), (9, 15));
            }
        }
    }
}
