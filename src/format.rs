//! Format tokens and rendering of a [`DateObject`] to text.

use crate::{DateObject, consts::DEFAULT_FORMAT};

/// One placeholder of a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Token {
    /// `YYYY`
    Year,
    /// `YY`, the last two digits of the year
    YearShort,
    /// `MMMM`
    MonthName,
    /// `MMM`
    MonthShortName,
    /// `MM`
    MonthPadded,
    /// `M`
    Month,
    /// `DDDD`
    DayOfYearPadded,
    /// `DDD`
    DayOfYear,
    /// `DD`
    DayPadded,
    /// `D`
    Day,
    /// `dddd`
    WeekDayName,
    /// `ddd`
    WeekDayShortName,
    /// `dd`
    WeekDayPadded,
    /// `d`
    WeekDay,
    /// `WW`
    WeekOfYearPadded,
    /// `W`
    WeekOfYear,
    /// `HH`
    HourPadded,
    /// `H`
    Hour,
    /// `hh`, 12-hour clock
    Hour12Padded,
    /// `h`
    Hour12,
    /// `mm`
    MinutePadded,
    /// `m`
    Minute,
    /// `ss`
    SecondPadded,
    /// `s`
    Second,
    /// `SSS`
    Millisecond,
    /// `SS`, hundredths of a second
    Centisecond,
    /// `S`, tenths of a second
    Decisecond,
    /// `A`
    Meridiem,
    /// `a`
    MeridiemShort,
}

/// Every token pattern, longest first so `MMMM` wins over `MM`.
const PATTERNS: [(&str, Token); 29] = [
    ("YYYY", Token::Year),
    ("MMMM", Token::MonthName),
    ("DDDD", Token::DayOfYearPadded),
    ("dddd", Token::WeekDayName),
    ("MMM", Token::MonthShortName),
    ("DDD", Token::DayOfYear),
    ("ddd", Token::WeekDayShortName),
    ("SSS", Token::Millisecond),
    ("YY", Token::YearShort),
    ("MM", Token::MonthPadded),
    ("DD", Token::DayPadded),
    ("dd", Token::WeekDayPadded),
    ("WW", Token::WeekOfYearPadded),
    ("HH", Token::HourPadded),
    ("hh", Token::Hour12Padded),
    ("mm", Token::MinutePadded),
    ("ss", Token::SecondPadded),
    ("SS", Token::Centisecond),
    ("M", Token::Month),
    ("D", Token::Day),
    ("d", Token::WeekDay),
    ("W", Token::WeekOfYear),
    ("H", Token::Hour),
    ("h", Token::Hour12),
    ("m", Token::Minute),
    ("s", Token::Second),
    ("S", Token::Decisecond),
    ("A", Token::Meridiem),
    ("a", Token::MeridiemShort),
];

impl Token {
    pub(crate) fn pattern(self) -> &'static str {
        PATTERNS
            .iter()
            .find(|(_, token)| *token == self)
            .map_or("", |(pattern, _)| pattern)
    }

    /// Zero padded width of a numeric token, `None` for name tokens.
    pub(crate) const fn width(self) -> Option<usize> {
        match self {
            Self::Year => Some(4),
            Self::DayOfYearPadded | Self::Millisecond => Some(3),
            Self::YearShort
            | Self::MonthPadded
            | Self::DayPadded
            | Self::WeekDayPadded
            | Self::WeekOfYearPadded
            | Self::HourPadded
            | Self::Hour12Padded
            | Self::MinutePadded
            | Self::SecondPadded
            | Self::Centisecond => Some(2),
            Self::Month
            | Self::DayOfYear
            | Self::Day
            | Self::WeekDay
            | Self::WeekOfYear
            | Self::Hour
            | Self::Hour12
            | Self::Minute
            | Self::Second
            | Self::Decisecond => Some(1),
            Self::MonthName
            | Self::MonthShortName
            | Self::WeekDayName
            | Self::WeekDayShortName
            | Self::Meridiem
            | Self::MeridiemShort => None,
        }
    }
}

/// A format string split into tokens and the literal text between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Token(Token),
    Literal(&'a str),
}

/// Splits `format` into segments. Substrings listed in `ignore_list` are
/// kept as literals even when they contain token letters.
pub(crate) fn tokenize<'a>(format: &'a str, ignore_list: &[&str]) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < format.len() {
        let rest = &format[pos..];

        if let Some(ignored) = ignore_list
            .iter()
            .filter(|ignored| !ignored.is_empty() && rest.starts_with(**ignored))
            .max_by_key(|ignored| ignored.len())
        {
            pos += ignored.len();
            continue;
        }

        if let Some((pattern, token)) = PATTERNS.iter().find(|(pattern, _)| rest.starts_with(pattern)) {
            if literal_start < pos {
                segments.push(Segment::Literal(&format[literal_start..pos]));
            }
            segments.push(Segment::Token(*token));
            pos += pattern.len();
            literal_start = pos;
            continue;
        }

        pos += rest.chars().next().map_or(1, char::len_utf8);
    }

    if literal_start < format.len() {
        segments.push(Segment::Literal(&format[literal_start..]));
    }
    segments
}

impl DateObject {
    /// Renders the date with its own format (`YYYY/MM/DD` unless one was
    /// set) and ignore list.
    pub fn format(&self) -> String {
        let ignore_list: Vec<&str> = self.ignore_list.iter().map(String::as_str).collect();
        self.format_with(self.format.as_deref().unwrap_or(DEFAULT_FORMAT), &ignore_list)
    }

    /// Renders the date with `format`, leaving substrings in `ignore_list`
    /// untouched.
    ///
    /// ```
    /// use date_object::{Calendar, DateObject};
    ///
    /// let date = DateObject::from_ymd(Calendar::Gregorian, 2020, 12, 2);
    /// assert_eq!(date.format_with("Date:MM/DD/YYYY", &["Date"]), "Date:12/02/2020");
    /// ```
    pub fn format_with(&self, format: &str, ignore_list: &[&str]) -> String {
        let digits = self.digits();
        let mut out = String::with_capacity(format.len() * 2);
        for segment in tokenize(format, ignore_list) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(token) => self.render(token, &digits, &mut out),
            }
        }
        out
    }

    fn render(&self, token: Token, digits: &[&str], out: &mut String) {
        let value = match token {
            Token::MonthName => return out.push_str(self.month().name),
            Token::MonthShortName => return out.push_str(self.month().short_name),
            Token::WeekDayName => return out.push_str(self.week_day().name),
            Token::WeekDayShortName => return out.push_str(self.week_day().short_name),
            Token::Meridiem => return out.push_str(self.meridiem().name),
            Token::MeridiemShort => return out.push_str(self.meridiem().short_name),
            numeric => self.numeric_value(numeric),
        };
        let width = token.width().unwrap_or(1);
        let padded = format!("{:0width$}", value.unsigned_abs());
        if value < 0 {
            out.push('-');
        }
        for c in padded.chars() {
            match c.to_digit(10).and_then(|d| digits.get(d as usize)) {
                Some(glyph) => out.push_str(glyph),
                None => out.push(c),
            }
        }
    }

    fn numeric_value(&self, token: Token) -> i64 {
        match token {
            Token::Year => self.year(),
            Token::YearShort => self.year().rem_euclid(100),
            Token::MonthPadded | Token::Month => i64::from(self.month().number),
            Token::DayOfYearPadded | Token::DayOfYear => self.day_of_year(),
            Token::DayPadded | Token::Day => i64::from(self.day()),
            Token::WeekDayPadded | Token::WeekDay => i64::from(self.week_day().number),
            Token::WeekOfYearPadded | Token::WeekOfYear => self.week_of_year(),
            Token::HourPadded | Token::Hour => i64::from(self.hour()),
            Token::Hour12Padded | Token::Hour12 => match self.hour() % 12 {
                0 => 12,
                hour => i64::from(hour),
            },
            Token::MinutePadded | Token::Minute => i64::from(self.minute()),
            Token::SecondPadded | Token::Second => i64::from(self.second()),
            Token::Millisecond => i64::from(self.millisecond()),
            Token::Centisecond => i64::from(self.millisecond() / 10),
            Token::Decisecond => i64::from(self.millisecond() / 100),
            Token::MonthName
            | Token::MonthShortName
            | Token::WeekDayName
            | Token::WeekDayShortName
            | Token::Meridiem
            | Token::MeridiemShort => 0,
        }
    }
}
