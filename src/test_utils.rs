use crate::{Calendar, DateObject};

/// Midnight of a Gregorian date.
pub fn gregorian(year: i64, month: i64, day: i64) -> DateObject {
    date_in(Calendar::Gregorian, year, month, day)
}

pub fn date_in(calendar: Calendar, year: i64, month: i64, day: i64) -> DateObject {
    DateObject::from_ymd(calendar, year, month, day)
}

/// `date` with its time of day replaced.
pub fn at(mut date: DateObject, hour: i64, minute: i64, second: i64, millisecond: i64) -> DateObject {
    date.set_hour(hour)
        .set_minute(minute)
        .set_second(second)
        .set_millisecond(millisecond);
    date
}

/// `(year, month, day)` of `date` in its current calendar.
pub fn ymd(date: &DateObject) -> (i64, u8, u8) {
    (date.year(), date.month().number, date.day())
}
