//! Date pattern engine
//!
//! Patterns are compiled against a [`Culture`] into a token list that can
//! render a date or read one back.
//!
//! | Specifier | Meaning |
//! |-----------|---------|
//! | `d`, `dd` | day of month, 1-2 digits / exactly 2 digits |
//! | `ddd`, `dddd` | abbreviated / full day name |
//! | `M`, `MM` | month, 1-2 digits / exactly 2 digits |
//! | `MMM`, `MMMM` | abbreviated / full month name |
//! | `y`, `yy` | two-digit year (2049 is the last year read as 20xx) |
//! | `yyy`, `yyyy`, ... | year, zero padded to the run length |
//! | `H`, `HH`, `m`, `mm`, `s`, `ss` | time of day |
//! | `/`, `:` | culture date separator, time separator |
//! | `'...'`, `"..."`, `\c` | literal text |
//! | `%c` | lone custom specifier |
//!
//! A pattern of exactly `d` or `D` is a standard format and expands to the
//! culture's short or long date pattern.
//!
//! Parsing is exact: numeric fields take the digit counts above, literals
//! must match verbatim, and whitespace is only skipped where
//! [`DateStyles`] allows it.

use crate::culture::Culture;
use calends_core::registry::eq_ignore_case;
use chrono::{Datelike, NaiveDate, Weekday};

/// Last year read for a two-digit year; `50` reads as 1950
pub const TWO_DIGIT_YEAR_MAX: i32 = 2049;

/// Whitespace tolerance when parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DateStyles {
    /// Skip whitespace before the first field
    pub allow_leading_white: bool,
    /// Skip whitespace after the last field
    pub allow_trailing_white: bool,
    /// Skip whitespace between fields
    pub allow_inner_white: bool,
}

impl DateStyles {
    /// Strict: no whitespace anywhere
    pub const NONE: DateStyles = DateStyles {
        allow_leading_white: false,
        allow_trailing_white: false,
        allow_inner_white: false,
    };

    /// Whitespace allowed everywhere
    pub const ALLOW_WHITE_SPACES: DateStyles = DateStyles {
        allow_leading_white: true,
        allow_trailing_white: true,
        allow_inner_white: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Day(usize),
    Month(usize),
    Year(usize),
    Hour(usize),
    Minute(usize),
    Second(usize),
    DateSeparator,
    TimeSeparator,
    Literal(String),
}

/// A compiled date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

/// Fields read by [`Pattern::parse`]
///
/// Date fields the pattern does not mention stay `None`; time fields
/// default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedFields {
    /// Year
    pub year: Option<i32>,
    /// Month, 1-based
    pub month: Option<u32>,
    /// Day of month
    pub day: Option<u32>,
    /// Day of week, when a day name was read
    pub weekday: Option<Weekday>,
    /// Hour, 0-23
    pub hour: u32,
    /// Minute
    pub minute: u32,
    /// Second
    pub second: u32,
}

impl ParsedFields {
    /// The calendar date described by the fields
    ///
    /// Missing year, month or day default to 1. Returns `None` for an
    /// impossible date or a day name that disagrees with the date.
    pub fn date(&self) -> Option<NaiveDate> {
        let date = NaiveDate::from_ymd_opt(
            self.year.unwrap_or(1),
            self.month.unwrap_or(1),
            self.day.unwrap_or(1),
        )?;
        match self.weekday {
            Some(weekday) if weekday != date.weekday() => None,
            _ => Some(date),
        }
    }

    /// Check that no time of day was read
    pub fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0 && self.second == 0
    }
}

impl Pattern {
    /// Compile `pattern` for `culture`
    ///
    /// Never fails: characters that are not specifiers are literal text,
    /// and an unterminated quote runs to the end of the pattern.
    pub fn compile(pattern: &str, culture: &Culture) -> Pattern {
        let mut chars = pattern.chars();
        let expanded = match (chars.next(), chars.next()) {
            (Some('d'), None) => culture.short_date_pattern(),
            (Some('D'), None) => culture.long_date_pattern(),
            _ => pattern,
        };
        Pattern {
            tokens: tokenize(expanded),
        }
    }

    /// Render `date`
    pub fn format(&self, date: NaiveDate, culture: &Culture) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Day(1) => push_number(&mut out, date.day() as i64, 1),
                Token::Day(2) => push_number(&mut out, date.day() as i64, 2),
                Token::Day(3) => out.push_str(culture.abbreviated_day_name(date.weekday())),
                Token::Day(_) => out.push_str(culture.day_name(date.weekday())),
                Token::Month(1) => push_number(&mut out, date.month() as i64, 1),
                Token::Month(2) => push_number(&mut out, date.month() as i64, 2),
                Token::Month(3) => out.push_str(culture.abbreviated_month_name(date.month())),
                Token::Month(_) => out.push_str(culture.month_name(date.month())),
                Token::Year(1) => push_number(&mut out, (date.year() % 100) as i64, 1),
                Token::Year(2) => push_number(&mut out, (date.year() % 100) as i64, 2),
                Token::Year(n) => push_number(&mut out, date.year() as i64, *n),
                // Dates carry no time of day
                Token::Hour(n) | Token::Minute(n) | Token::Second(n) => {
                    push_number(&mut out, 0, (*n).min(2))
                }
                Token::DateSeparator => out.push_str(culture.date_separator()),
                Token::TimeSeparator => out.push(':'),
                Token::Literal(text) => out.push_str(text),
            }
        }
        out
    }

    /// Read `input`, which must match the whole pattern
    pub fn parse(&self, input: &str, culture: &Culture, styles: DateStyles) -> Option<ParsedFields> {
        let mut cursor = Cursor { rest: input };
        let mut fields = ParsedFields::default();

        if styles.allow_leading_white {
            cursor.skip_white();
        }
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 && styles.allow_inner_white {
                cursor.skip_white();
            }
            match token {
                Token::Day(n @ 1..=2) => assign(&mut fields.day, cursor.digits(*n, 2)?)?,
                Token::Day(3) => assign(
                    &mut fields.weekday,
                    weekday_at(cursor.name(culture.abbreviated_day_names())?)?,
                )?,
                Token::Day(_) => assign(
                    &mut fields.weekday,
                    weekday_at(cursor.name(culture.day_names())?)?,
                )?,
                Token::Month(n @ 1..=2) => assign(&mut fields.month, cursor.digits(*n, 2)?)?,
                Token::Month(3) => assign(
                    &mut fields.month,
                    cursor.name(culture.abbreviated_month_names())? as u32 + 1,
                )?,
                Token::Month(_) => assign(
                    &mut fields.month,
                    cursor.name(culture.month_names())? as u32 + 1,
                )?,
                Token::Year(n @ 1..=2) => {
                    let year = expand_two_digit_year(cursor.digits(*n, 2)?);
                    assign(&mut fields.year, year)?
                }
                Token::Year(n) => {
                    let year = i32::try_from(cursor.digits(*n, (*n).max(4))?).ok()?;
                    assign(&mut fields.year, year)?
                }
                Token::Hour(n) => fields.hour = bounded(cursor.digits((*n).min(2), 2)?, 23)?,
                Token::Minute(n) => fields.minute = bounded(cursor.digits((*n).min(2), 2)?, 59)?,
                Token::Second(n) => fields.second = bounded(cursor.digits((*n).min(2), 2)?, 59)?,
                Token::DateSeparator => cursor.literal(culture.date_separator())?,
                Token::TimeSeparator => cursor.literal(":")?,
                Token::Literal(text) => cursor.literal(text)?,
            }
        }
        if styles.allow_trailing_white {
            cursor.skip_white();
        }

        cursor.rest.is_empty().then_some(fields)
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            'd' | 'M' | 'y' | 'H' | 'm' | 's' => {
                let mut count = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    count += 1;
                }
                flush_literal(&mut tokens, &mut literal);
                tokens.push(match c {
                    'd' => Token::Day(count),
                    'M' => Token::Month(count),
                    'y' => Token::Year(count),
                    'H' => Token::Hour(count),
                    'm' => Token::Minute(count),
                    _ => Token::Second(count),
                });
            }
            '\'' | '"' => {
                while let Some(q) = chars.next() {
                    if q == c {
                        break;
                    }
                    if q == '\\' {
                        if let Some(escaped) = chars.next() {
                            literal.push(escaped);
                        }
                        continue;
                    }
                    literal.push(q);
                }
            }
            '\\' => {
                if let Some(escaped) = chars.next() {
                    literal.push(escaped);
                }
            }
            // Only marks the next specifier as custom
            '%' => {}
            '/' => {
                flush_literal(&mut tokens, &mut literal);
                tokens.push(Token::DateSeparator);
            }
            ':' => {
                flush_literal(&mut tokens, &mut literal);
                tokens.push(Token::TimeSeparator);
            }
            _ => literal.push(c),
        }
    }
    flush_literal(&mut tokens, &mut literal);
    tokens
}

fn flush_literal(tokens: &mut Vec<Token>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

fn push_number(out: &mut String, value: i64, width: usize) {
    out.push_str(&format!("{:0width$}", value, width = width));
}

fn expand_two_digit_year(year: u32) -> i32 {
    let year = year as i32;
    let century_cut = TWO_DIGIT_YEAR_MAX % 100;
    if year <= century_cut {
        TWO_DIGIT_YEAR_MAX - century_cut + year
    } else {
        TWO_DIGIT_YEAR_MAX - century_cut - 100 + year
    }
}

fn weekday_at(index: usize) -> Option<Weekday> {
    const SUNDAY_FIRST: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];
    SUNDAY_FIRST.get(index).copied()
}

fn assign<T: PartialEq + Copy>(slot: &mut Option<T>, value: T) -> Option<()> {
    match *slot {
        Some(existing) if existing != value => None,
        _ => {
            *slot = Some(value);
            Some(())
        }
    }
}

fn bounded(value: u32, max: u32) -> Option<u32> {
    (value <= max).then_some(value)
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn skip_white(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn digits(&mut self, min: usize, max: usize) -> Option<u32> {
        let count = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if count < min {
            return None;
        }
        let (digits, rest) = self.rest.split_at(count);
        self.rest = rest;
        digits.parse().ok()
    }

    fn literal(&mut self, text: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(text)?;
        Some(())
    }

    /// Longest name matching the input, ignoring case
    fn name(&mut self, names: &[String]) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (index, name) in names.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let end = self
                .rest
                .char_indices()
                .nth(name.chars().count())
                .map(|(at, _)| at)
                .unwrap_or(self.rest.len());
            let longer = best.map_or(true, |(_, len)| end > len);
            if longer && eq_ignore_case(&self.rest[..end], name) {
                best = Some((index, end));
            }
        }
        let (index, len) = best?;
        self.rest = &self.rest[len..];
        Some(index)
    }
}
