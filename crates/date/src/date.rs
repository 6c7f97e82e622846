//! Calendar-only date
//!
//! [`Date`] is a year, month and day in the proleptic Gregorian calendar,
//! with no time of day and no zone. Years are limited to 1..=9999.
//!
//! Text conversion goes through the [`DateFormat`] profiles: `Display`
//! and `FromStr` use [`DEFAULT`](crate::date_format::DEFAULT) (`24/12-2015`), and
//! serde uses [`ISO`](crate::date_format::ISO) (`2015-12-24`).

use crate::culture::{self, Culture};
use crate::date_format::{self, DateFormat};
use crate::zone;
use calends_core::{Enumeration, Error, Result};
use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    Utc, Weekday,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// Smallest representable year
pub const MIN_YEAR: i32 = 1;
/// Largest representable year
pub const MAX_YEAR: i32 = 9999;

const fn const_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid date constant"),
    }
}

/// A calendar date without time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(NaiveDate);

impl Default for Date {
    fn default() -> Self {
        Date::MIN
    }
}

impl Date {
    /// 0001-01-01
    pub const MIN: Date = Date(const_date(MIN_YEAR, 1, 1));
    /// 9999-12-31
    pub const MAX: Date = Date(const_date(MAX_YEAR, 12, 31));

    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a date from its parts
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the parts do not describe a date in
    /// years 1..=9999.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Date> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|date| in_range(date.year()))
            .map(Date)
            .ok_or_else(|| {
                Error::argument("Year, Month, and Day parameters describe an un-representable Date.")
            })
    }

    /// Wrap a chrono date
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the year is outside 1..=9999.
    pub fn from_naive(date: NaiveDate) -> Result<Date> {
        if in_range(date.year()) {
            Ok(Date(date))
        } else {
            Err(Error::argument(format!(
                "Year must be between {} and {}. (Parameter 'year')",
                MIN_YEAR, MAX_YEAR
            )))
        }
    }

    /// The wall-clock date of a zoned timestamp, without converting zones
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the year is outside 1..=9999.
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Result<Date> {
        Date::from_naive(value.date_naive())
    }

    fn clamped(date: NaiveDate) -> Date {
        Date(date).clamp(Date::MIN, Date::MAX)
    }

    /// Today in Denmark (Europe/Copenhagen)
    pub fn danish_today() -> Date {
        Date::clamped(zone::copenhagen_now().date_naive())
    }

    /// Today in UTC
    pub fn utc_today() -> Date {
        Date::clamped(Utc::now().date_naive())
    }

    /// Today in the machine's local zone
    pub fn local_today() -> Date {
        Date::clamped(Local::now().date_naive())
    }

    /// Today in the given zone
    pub fn today_in<Tz: TimeZone>(zone: &Tz) -> Date {
        Date::clamped(Utc::now().with_timezone(zone).date_naive())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Year, 1..=9999
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month, 1..=12
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1-based
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week
    pub fn day_of_week(&self) -> Weekday {
        self.0.weekday()
    }

    /// Day of year, 1-based
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Check if this is the last day of its month
    pub fn is_end_of_month(&self) -> bool {
        self.0.succ_opt().map_or(true, |next| next.month() != self.month())
    }

    /// The chrono date
    pub fn to_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Midnight at the start of this date
    pub fn to_naive_datetime(&self) -> NaiveDateTime {
        self.0.and_time(NaiveTime::MIN)
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    /// Parse text in the given profile
    ///
    /// The text must match the profile's pattern exactly: no surrounding or
    /// inner whitespace, and the exact digit counts of each field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the profile is not parseable,
    /// or [`Error::Format`] if the text does not match.
    pub fn parse(s: &str, format: &DateFormat) -> Result<Date> {
        ensure_parseable(format)?;
        parse_with(s, format).ok_or_else(|| {
            Error::format(format!("String '{}' was not recognized as a valid Date.", s))
        })
    }

    /// Parse text in the given profile, returning `None` on a mismatch
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the profile is not parseable,
    /// whatever the input.
    pub fn try_parse(s: Option<&str>, format: &DateFormat) -> Result<Option<Date>> {
        ensure_parseable(format)?;
        Ok(s.and_then(|s| parse_with(s, format)))
    }

    /// Parse text in the `Default` profile
    pub fn parse_default(s: &str) -> Result<Date> {
        Date::parse(s, &date_format::DEFAULT)
    }

    /// Parse text in the `Default` profile, returning `None` on a mismatch
    pub fn try_parse_default(s: Option<&str>) -> Option<Date> {
        s.and_then(|s| parse_with(s, &date_format::DEFAULT))
    }

    // =========================================================================
    // Formatting
    // =========================================================================

    /// Render in the given profile
    ///
    /// Ambient profiles use the culture active for the calling thread.
    pub fn to_string_with(&self, format: &DateFormat) -> String {
        let culture = format.culture();
        format.compile(&culture).format(self.0, &culture)
    }

    /// `24/12-2015`
    pub fn to_default_string(&self) -> String {
        self.to_string_with(&date_format::DEFAULT)
    }

    /// The ambient culture's short date
    pub fn to_short_date_string(&self) -> String {
        self.to_string_with(&date_format::SHORT)
    }

    /// The ambient culture's long date
    pub fn to_long_date_string(&self) -> String {
        self.to_string_with(&date_format::LONG)
    }

    /// `2015-12-24`
    pub fn to_iso_date_string(&self) -> String {
        self.to_string_with(&date_format::ISO)
    }

    /// `20151224`
    pub fn to_year_month_day_string(&self) -> String {
        self.to_string_with(&date_format::YEAR_MONTH_DAY)
    }

    /// Render with a format string in a culture
    ///
    /// `None` and `"G"` render the `Default` profile. Any other format must
    /// be the pattern of one of the profiles, rendered in `culture` (or the
    /// ambient culture when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] for any other format string.
    pub fn format(&self, format: Option<&str>, culture: Option<&Culture>) -> Result<String> {
        let pattern = match format {
            None | Some("G") => return Ok(self.to_default_string()),
            Some(pattern) => pattern,
        };
        let profile = DateFormat::from_pattern(pattern)
            .ok_or_else(|| Error::format(format!("Unknown format: {}", pattern)))?;
        let ambient;
        let culture = match culture {
            Some(culture) => culture,
            None => {
                ambient = culture::current();
                &ambient
            }
        };
        Ok(profile.compile(culture).format(self.0, culture))
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Shift by a number of days
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the result falls outside 1..=9999.
    pub fn add_days(&self, days: i32) -> Result<Date> {
        shifted(self.0.checked_add_signed(Duration::days(i64::from(days))))
    }

    /// Shift by a number of months, clamping to the end of the month
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the result falls outside 1..=9999.
    pub fn add_months(&self, months: i32) -> Result<Date> {
        let magnitude = Months::new(months.unsigned_abs());
        shifted(if months >= 0 {
            self.0.checked_add_months(magnitude)
        } else {
            self.0.checked_sub_months(magnitude)
        })
    }

    /// Shift by a number of years; February 29 becomes February 28 in a
    /// common year
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the result falls outside 1..=9999.
    pub fn add_years(&self, years: i32) -> Result<Date> {
        match years.checked_mul(12) {
            Some(months) => self.add_months(months),
            None => shifted(None),
        }
    }

    /// Days from `other` to `self`
    pub fn subtract(&self, other: &Date) -> i32 {
        // At most 3.65 million days apart
        self.0.signed_duration_since(other.0).num_days() as i32
    }

    // =========================================================================
    // Calendar
    // =========================================================================

    /// Whole years from `d1` to `d2`
    ///
    /// Counts completed anniversaries: reaching the same month and day
    /// counts, so 1970-06-03 to 1971-06-03 is one year. Negative when `d1`
    /// is after `d2`.
    pub fn hole_year_difference(d1: Date, d2: Date) -> i32 {
        let (from, to, sign) = if d1 > d2 { (d2, d1, -1) } else { (d1, d2, 1) };
        let mut years = to.year() - from.year();
        if (to.month(), to.day()) < (from.month(), from.day()) {
            years -= 1;
        }
        sign * years
    }

    /// Easter Sunday of `year`
    ///
    /// Gregorian computus after 1582, Julian before.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the year is outside 1..=9999.
    pub fn easter_sunday(year: i32) -> Result<Date> {
        if !in_range(year) {
            return Err(year_out_of_range());
        }
        let golden = year % 19 + 1;
        let (base, epact) = if year > 1582 {
            let century = year / 100 + 1;
            let dropped_leap_days = 3 * century / 4 - 12;
            let moon_correction = (century - 16 - (century - 18) / 25) / 3;
            let base = 5 * year / 4 - dropped_leap_days - 10;
            let mut epact = (11 * golden + 19 + moon_correction - dropped_leap_days) % 30 + 1;
            if (epact == 25 && golden > 11) || epact == 24 {
                epact += 1;
            }
            (base, epact)
        } else {
            (5 * year / 4, (11 * golden - 4) % 30 + 1)
        };

        let mut day = 44 - epact;
        if day < 21 {
            day += 30;
        }
        day += 7 - (base + day) % 7;

        if day > 31 {
            Date::new(year, 4, (day - 31) as u32)
        } else {
            Date::new(year, 3, day as u32)
        }
    }

    /// The later of two dates
    pub fn max(d1: Date, d2: Date) -> Date {
        if d1 > d2 {
            d1
        } else {
            d2
        }
    }

    /// The latest of three dates
    pub fn max3(d1: Date, d2: Date, d3: Date) -> Date {
        Date::max(Date::max(d1, d2), d3)
    }

    /// The earlier of two dates
    pub fn min(d1: Date, d2: Date) -> Date {
        if d1 > d2 {
            d2
        } else {
            d1
        }
    }

    /// The earliest of three dates
    pub fn min3(d1: Date, d2: Date, d3: Date) -> Date {
        Date::min(Date::min(d1, d2), d3)
    }

    /// Check if `year` is a leap year
    pub fn is_leap_year(year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// 1 for a leap year, 0 otherwise
    pub fn leap_year(year: i32) -> i32 {
        i32::from(Date::is_leap_year(year))
    }

    /// 365 or 366
    pub fn days_in_year(year: i32) -> i32 {
        365 + Date::leap_year(year)
    }

    /// Number of days in a month
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if `month` is not 1..=12.
    pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
        const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        match month {
            2 if Date::is_leap_year(year) => Ok(29),
            1..=12 => Ok(DAYS[month as usize - 1]),
            _ => Err(Error::argument(
                "Month must be between one and twelve. (Parameter 'month')",
            )),
        }
    }
}

fn in_range(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

fn year_out_of_range() -> Error {
    Error::argument(format!(
        "Year must be between {} and {}. (Parameter 'year')",
        MIN_YEAR, MAX_YEAR
    ))
}

fn shifted(date: Option<NaiveDate>) -> Result<Date> {
    date.filter(|date| in_range(date.year()))
        .map(Date)
        .ok_or_else(|| {
            Error::argument("The added or subtracted value results in an un-representable Date.")
        })
}

fn ensure_parseable(format: &DateFormat) -> Result<()> {
    if format.is_parseable() {
        Ok(())
    } else {
        Err(Error::invalid_operation(format!(
            "DateFormat.{} is not a parseable format.",
            format.name()
        )))
    }
}

fn parse_with(s: &str, format: &DateFormat) -> Option<Date> {
    let culture = format.culture();
    let fields = format.compile(&culture).parse(s, &culture, format.style())?;
    if !fields.is_midnight() {
        return None;
    }
    Date::from_naive(fields.date()?).ok()
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_default_string())
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_default(s)
    }
}

impl Sub for Date {
    type Output = i32;

    fn sub(self, rhs: Date) -> i32 {
        self.subtract(&rhs)
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: NaiveDate) -> Result<Self> {
        Date::from_naive(value)
    }
}

impl TryFrom<NaiveDateTime> for Date {
    type Error = Error;

    fn try_from(value: NaiveDateTime) -> Result<Self> {
        Date::from_naive(value.date())
    }
}

impl From<Date> for NaiveDate {
    fn from(value: Date) -> Self {
        value.0
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_date_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, &date_format::ISO).map_err(serde::de::Error::custom)
    }
}
