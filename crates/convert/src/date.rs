//! Converter for [`Date`]

use crate::converter::StringConverter;
use calends_core::{Error, Result};
use calends_date::date_format::{DEFAULT, ISO};
use calends_date::Date;

/// Converts a [`Date`] to and from text
///
/// Reads the `Default` profile (`3/6-1970`), falling back to `Iso`
/// (`1970-06-03`); writes the `Default` profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateConverter {
    null_to_empty: bool,
}

impl DateConverter {
    /// A converter that rejects missing values
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a missing value to `""` instead of failing
    pub fn null_to_empty_string(mut self, enabled: bool) -> Self {
        self.null_to_empty = enabled;
        self
    }
}

impl StringConverter for DateConverter {
    type Value = Date;
    type Output = Date;

    fn parse(&self, s: &str) -> Result<Date> {
        match Date::try_parse(Some(s), &DEFAULT)? {
            Some(date) => Ok(date),
            None => Date::try_parse(Some(s), &ISO)?.ok_or_else(|| {
                Error::format(format!("String '{}' was not recognized as a valid Date.", s))
            }),
        }
    }

    fn stringify(&self, value: &Date) -> String {
        value.to_default_string()
    }

    fn name(&self) -> String {
        "DateConverter".to_string()
    }

    fn supports_null_to_empty_string(&self) -> bool {
        self.null_to_empty
    }
}
