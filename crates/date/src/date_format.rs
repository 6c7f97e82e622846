//! Named date format profiles
//!
//! [`DateFormat`] is itself an [`Enumeration`] with exactly seven instances.
//! Each pairs a pattern with the culture it is rendered in:
//!
//! | Value | Name | Pattern | Culture |
//! |-------|------|---------|---------|
//! | 0 | Default | `d'/'M'-'yyyy` | invariant |
//! | 1 | Short | `d` (culture short date) | ambient |
//! | 2 | Long | `D` (culture long date) | ambient |
//! | 3 | DayMonthYear | `ddMMyyyy` | invariant |
//! | 4 | YearMonthDay | `yyyyMMdd` | invariant |
//! | 5 | ReverseIso | `dd'-'MM'-'yyyy` | invariant |
//! | 6 | Iso | `yyyy'-'MM'-'dd` | invariant |
//!
//! Only the invariant profiles are parseable: the ambient ones change with
//! the thread's culture, so their output cannot be read back reliably.

use crate::culture::{self, Culture};
use crate::pattern::{DateStyles, Pattern};
use calends_core::{EnumBase, Enumeration};
use std::sync::Arc;

/// Where a profile takes its culture from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CultureStrategy {
    /// Always the invariant culture
    Invariant,
    /// The culture active for the calling thread at the time of the call
    Ambient,
}

impl CultureStrategy {
    /// The culture to use right now
    pub fn resolve(self) -> Arc<Culture> {
        match self {
            CultureStrategy::Invariant => culture::invariant(),
            CultureStrategy::Ambient => culture::current(),
        }
    }
}

/// A named date format profile
#[derive(Debug)]
pub struct DateFormat {
    base: EnumBase,
    pattern: &'static str,
    culture: CultureStrategy,
    style: DateStyles,
}

impl DateFormat {
    const fn new(
        value: i32,
        name: &'static str,
        text: &'static str,
        pattern: &'static str,
        culture: CultureStrategy,
    ) -> Self {
        DateFormat {
            base: EnumBase::declare(value, name, text),
            pattern,
            culture,
            style: DateStyles::NONE,
        }
    }

    /// The pattern string
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Where this profile takes its culture from
    pub fn culture_strategy(&self) -> CultureStrategy {
        self.culture
    }

    /// The culture this profile uses right now
    pub fn culture(&self) -> Arc<Culture> {
        self.culture.resolve()
    }

    /// Whitespace tolerance when parsing
    pub fn style(&self) -> DateStyles {
        self.style
    }

    /// Check if text in this format can be parsed back
    pub fn is_parseable(&self) -> bool {
        self.culture == CultureStrategy::Invariant
    }

    /// Compile the pattern against `culture`
    pub fn compile(&self, culture: &Culture) -> Pattern {
        Pattern::compile(self.pattern, culture)
    }

    /// The profile whose pattern is exactly `pattern`
    pub fn from_pattern(pattern: &str) -> Option<&'static DateFormat> {
        DateFormat::all()
            .iter()
            .copied()
            .find(|format| format.pattern == pattern)
    }
}

/// Short human readable format (27/1-2003)
pub static DEFAULT: DateFormat = DateFormat::new(
    0,
    "Default",
    "Short human readable format (27/1-2003)",
    "d'/'M'-'yyyy",
    CultureStrategy::Invariant,
);

/// The ambient culture's short date (27-01-2003 in da-DK)
pub static SHORT: DateFormat = DateFormat::new(
    1,
    "Short",
    "Short human readable format (27-01-2003)",
    "d",
    CultureStrategy::Ambient,
);

/// The ambient culture's long date (27. januar 2003 in da-DK)
pub static LONG: DateFormat = DateFormat::new(
    2,
    "Long",
    "Long human readable format (27. januar 2003)",
    "D",
    CultureStrategy::Ambient,
);

/// Fixed length of 8 (27012003)
pub static DAY_MONTH_YEAR: DateFormat = DateFormat::new(
    3,
    "DayMonthYear",
    "Machine readable format with fixed length of 8 (27012003)",
    "ddMMyyyy",
    CultureStrategy::Invariant,
);

/// Fixed length of 8 (20030127)
pub static YEAR_MONTH_DAY: DateFormat = DateFormat::new(
    4,
    "YearMonthDay",
    "Machine readable format with fixed length of 8 (20030127)",
    "yyyyMMdd",
    CultureStrategy::Invariant,
);

/// Year-last, fixed length of 10 (27-01-2003)
pub static REVERSE_ISO: DateFormat = DateFormat::new(
    5,
    "ReverseIso",
    "Year-last non-sortable format with fixed length of 10.",
    "dd'-'MM'-'yyyy",
    CultureStrategy::Invariant,
);

/// ISO 8601, fixed length of 10 (2003-01-27)
pub static ISO: DateFormat = DateFormat::new(
    6,
    "Iso",
    "Year-first sortable ISO 8601 format with fixed length of 10.",
    "yyyy'-'MM'-'dd",
    CultureStrategy::Invariant,
);

calends_core::enumeration!(
    DateFormat,
    base,
    [DEFAULT, SHORT, LONG, DAY_MONTH_YEAR, YEAR_MONTH_DAY, REVERSE_ISO, ISO]
);
