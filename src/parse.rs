//! Reading a [`DateObject`] back from text with a format string.
//!
//! The format is split into the same tokens [`format`](DateObject::format)
//! renders. Tokens are matched against the input in order; anything that is
//! not a letter or digit separates fields and is skipped. Numbers may use any
//! supported locale's digits, names match the full or short month, weekday
//! and meridiem names of the current locale and calendar, ignoring ASCII
//! case.

use crate::{
    DateObject, Locale,
    consts::DEFAULT_PARSE_FORMAT,
    format::{Segment, Token, tokenize},
    locale::digit_value,
    prelude::*,
};
use tracing::debug;

/// Reasons a string could not be read as a date.
///
/// Positions are byte offsets into the trimmed input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Format {_0:?} has no date tokens")]
    InvalidFormat(String),
    #[display(fmt = "Expected a number for {token} at position {position}")]
    InvalidNumber { token: &'static str, position: usize },
    #[display(fmt = "No name for {token} matches at position {position}")]
    UnknownName { token: &'static str, position: usize },
    #[display(fmt = "Date string has no {_0}")]
    MissingField(&'static str),
    #[display(fmt = "Unexpected text at position {position}")]
    TrailingInput { position: usize },
}

impl std::error::Error for ParseError {}

/// Fields read from the input before they are applied to a date.
#[derive(Debug, Default)]
struct ParsedFields {
    year:          Option<i64>,
    month:         Option<i64>,
    day:           Option<i64>,
    day_of_year:   Option<i64>,
    hour:          Option<i64>,
    minute:        Option<i64>,
    second:        Option<i64>,
    millisecond:   Option<i64>,
    post_meridiem: Option<bool>,
}

struct Cursor<'a> {
    input: &'a str,
    pos:   usize,
}

impl<'a> Cursor<'a> {
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Skips everything that is not a letter or digit. A `-` directly in
    /// front of a digit is kept when `keep_sign` is set.
    fn skip_separators(&mut self, keep_sign: bool) {
        let mut chars = self.rest().chars().peekable();
        while let Some(c) = chars.next() {
            if c.is_alphanumeric() {
                break;
            }
            if keep_sign && c == '-' && chars.peek().is_some_and(|&next| digit_value(next).is_some()) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, literal: &str) {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
        }
    }

    /// Reads at most `max_digits` digits, with an optional leading `-` when
    /// `signed` is set.
    fn number(&mut self, max_digits: usize, signed: bool) -> Option<i64> {
        let rest = self.rest();
        let negative = signed && rest.starts_with('-');
        let mut consumed = usize::from(negative);
        let mut value: i64 = 0;
        let mut count = 0;
        for c in rest[consumed..].chars() {
            if count == max_digits {
                break;
            }
            let Some(digit) = digit_value(c) else { break };
            value = value * 10 + i64::from(digit);
            count += 1;
            consumed += c.len_utf8();
        }
        if count == 0 {
            return None;
        }
        self.pos += consumed;
        Some(if negative { -value } else { value })
    }

    /// Index of the longest name that starts the remaining input, matching
    /// either the full or the short form.
    fn name<'n, I>(&mut self, names: I) -> Option<usize>
    where
        I: IntoIterator<Item = (&'n str, &'n str)>,
    {
        let rest = self.rest();
        let matches = |candidate: &str| {
            !candidate.is_empty()
                && rest
                    .get(..candidate.len())
                    .is_some_and(|prefix| prefix.eq_ignore_ascii_case(candidate))
        };
        let (index, len) = names
            .into_iter()
            .enumerate()
            .flat_map(|(index, (name, short))| [(index, name), (index, short)])
            .filter(|(_, candidate)| matches(candidate))
            .map(|(index, candidate)| (index, candidate.len()))
            .max_by_key(|&(_, len)| len)?;
        self.pos += len;
        Some(index)
    }
}

/// Largest number of digits a numeric token reads.
const fn max_digits(token: Token) -> usize {
    match token {
        Token::Year => 4,
        Token::DayOfYearPadded | Token::DayOfYear | Token::Millisecond => 3,
        Token::WeekDayPadded | Token::WeekDay | Token::Decisecond => 1,
        _ => 2,
    }
}

impl DateObject {
    /// Sets the date from `input`, read with the date's format or
    /// `YYYY MM DD hh mm ss SSS a` when none is set. Calendar, locale and
    /// names stay as they are.
    ///
    /// ```
    /// use date_object::DateObject;
    ///
    /// let mut date = DateObject::from_unix_millis(0);
    /// date.set_format("dddd DD MMMM YYYY");
    /// date.parse("Monday 24 August 2020").unwrap();
    /// assert_eq!(date.format_with("YYYY-MM-DD", &[]), "2020-08-24");
    /// ```
    ///
    /// # Errors
    /// Returns `ParseError` if the input is empty, a field cannot be read,
    /// year, month or day is missing, or letters or digits are left over
    /// after the last field. The date is left unchanged.
    pub fn parse(&mut self, input: &str) -> Result<&mut Self, ParseError> {
        let format = self
            .format
            .clone()
            .unwrap_or_else(|| DEFAULT_PARSE_FORMAT.to_owned());
        self.parse_with_format(input, &format)
    }

    /// Like [`parse`](Self::parse) with an explicit format.
    ///
    /// # Errors
    /// See [`parse`](Self::parse).
    pub fn parse_with_format(&mut self, input: &str, format: &str) -> Result<&mut Self, ParseError> {
        let fields = self
            .read_fields(input, format)
            .inspect_err(|err| debug!(%err, input, format, "failed to parse date"))?;

        let year = fields.year.ok_or(ParseError::MissingField("year"))?;

        let mut hour = fields.hour.unwrap_or(0);
        match fields.post_meridiem {
            Some(true) if hour < 12 => hour += 12,
            Some(false) if hour == 12 => hour = 0,
            _ => {}
        }

        match (fields.month, fields.day, fields.day_of_year) {
            (Some(month), Some(day), _) => self.set_ymd(year, month, day),
            (None, None, Some(day_of_year)) => self.set_year_day(year, day_of_year),
            (None, ..) => return Err(ParseError::MissingField("month")),
            (Some(_), None, _) => return Err(ParseError::MissingField("day")),
        };
        self.set_time_of_day(
            hour,
            fields.minute.unwrap_or(0),
            fields.second.unwrap_or(0),
            fields.millisecond.unwrap_or(0),
        );
        Ok(self)
    }

    fn read_fields(&self, input: &str, format: &str) -> Result<ParsedFields, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let ignore_list: Vec<&str> = self.ignore_list.iter().map(String::as_str).collect();
        let segments = tokenize(format, &ignore_list);
        if !segments.iter().any(|s| matches!(s, Segment::Token(_))) {
            return Err(ParseError::InvalidFormat(format.to_owned()));
        }

        let mut cursor = Cursor { input, pos: 0 };
        let mut fields = ParsedFields::default();
        for segment in segments {
            cursor.skip_separators(segment == Segment::Token(Token::Year));
            if cursor.at_end() {
                break;
            }
            match segment {
                Segment::Literal(text) => {
                    let text = text.trim_matches(|c: char| !c.is_alphanumeric());
                    if !text.is_empty() {
                        cursor.eat(text);
                    }
                }
                Segment::Token(token) => self.read_token(token, &mut cursor, &mut fields)?,
            }
        }

        cursor.skip_separators(false);
        if !cursor.at_end() {
            return Err(ParseError::TrailingInput { position: cursor.pos });
        }
        Ok(fields)
    }

    fn read_token(
        &self,
        token: Token,
        cursor: &mut Cursor<'_>,
        fields: &mut ParsedFields,
    ) -> Result<(), ParseError> {
        let position = cursor.pos;
        let unknown_name = || ParseError::UnknownName {
            token: token.pattern(),
            position,
        };

        match token {
            Token::MonthName | Token::MonthShortName => {
                let months = self.months();
                let index = cursor
                    .name(months.iter().map(|m| (m.name, m.short_name)))
                    .ok_or_else(unknown_name)?;
                fields.month = Some(index as i64 + 1);
            }
            Token::WeekDayName | Token::WeekDayShortName => {
                let week_days = self.week_days();
                cursor
                    .name(week_days.iter().map(|d| (d.name, d.short_name)))
                    .ok_or_else(unknown_name)?;
            }
            Token::Meridiem | Token::MeridiemShort => {
                let index = cursor
                    .name(
                        self.meridiems()
                            .iter()
                            .chain(Locale::En.meridiems())
                            .map(|m| (m.name, m.short_name)),
                    )
                    .ok_or_else(unknown_name)?;
                fields.post_meridiem = Some(index % 2 == 1);
            }
            numeric => {
                let value = cursor
                    .number(max_digits(numeric), numeric == Token::Year)
                    .ok_or(ParseError::InvalidNumber {
                        token: numeric.pattern(),
                        position,
                    })?;
                self.store_number(numeric, value, fields);
            }
        }
        Ok(())
    }

    fn store_number(&self, token: Token, value: i64, fields: &mut ParsedFields) {
        let slot = match token {
            Token::Year => &mut fields.year,
            Token::YearShort => {
                fields.year = Some(self.year().div_euclid(100) * 100 + value);
                return;
            }
            Token::MonthPadded | Token::Month => &mut fields.month,
            Token::DayOfYearPadded | Token::DayOfYear => &mut fields.day_of_year,
            Token::DayPadded | Token::Day => &mut fields.day,
            Token::HourPadded | Token::Hour | Token::Hour12Padded | Token::Hour12 => &mut fields.hour,
            Token::MinutePadded | Token::Minute => &mut fields.minute,
            Token::SecondPadded | Token::Second => &mut fields.second,
            Token::Millisecond => &mut fields.millisecond,
            Token::Centisecond => {
                fields.millisecond = Some(value * 10);
                return;
            }
            Token::Decisecond => {
                fields.millisecond = Some(value * 100);
                return;
            }
            // Weekday and week numbers follow from the date itself.
            _ => return,
        };
        *slot = Some(value);
    }
}
