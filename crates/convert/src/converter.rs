//! The string-conversion bridge
//!
//! A [`StringConverter`] turns text into a value and a value into text,
//! and rejects everything else with a message naming the converter and
//! the types involved. Inputs arrive type-erased (`&dyn AnyValue`), so a
//! converter can sit behind any layer that only knows "some value".
//!
//! | Operation | Input | Result |
//! |-----------|-------|--------|
//! | `convert_from` | a string | the parsed value, or `Format` |
//! | `convert_from` | `None` or a non-string | `NotSupported` |
//! | `convert_to_string` | a value of the converter's type | its text |
//! | `convert_to_string` | `None` | `""` if null-to-empty is supported, else `NotSupported` |
//! | `convert_to` | any non-string destination | `NotSupported` |

use calends_core::{short_type_name, AnyValue, Error, Result, TypeDescriptor};
use std::any::Any;
use tracing::debug;

/// Check if a type is one of the string types the bridge accepts
pub fn is_string_type(ty: TypeDescriptor) -> bool {
    ty.is::<String>() || ty.is::<&'static str>() || ty.is::<str>()
}

/// The text behind a type-erased string value
pub fn as_str(value: &dyn AnyValue) -> Option<&str> {
    let any = value.as_any();
    any.downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| any.downcast_ref::<&'static str>().copied())
}

/// Conversion between a value type and its text
pub trait StringConverter: Send + Sync {
    /// The type rendered by [`StringConverter::stringify`]
    type Value: Any;

    /// The type produced by [`StringConverter::parse`]
    type Output;

    /// Read a value from text
    ///
    /// Any error is reported to callers of `convert_from` as a
    /// [`Error::Format`] naming the converter.
    fn parse(&self, s: &str) -> Result<Self::Output>;

    /// Render a value as text
    fn stringify(&self, value: &Self::Value) -> String;

    /// Name used in error messages
    fn name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Whether a missing value converts to `""` instead of failing
    fn supports_null_to_empty_string(&self) -> bool {
        false
    }

    /// Always true
    fn can_convert_from_string(&self) -> bool {
        true
    }

    /// Always true
    fn can_convert_to_string(&self) -> bool {
        true
    }

    /// True only for string source types
    fn can_convert_from(&self, source: TypeDescriptor) -> bool {
        is_string_type(source)
    }

    /// True only for string destination types
    fn can_convert_to(&self, destination: TypeDescriptor) -> bool {
        is_string_type(destination)
    }

    /// Convert a type-erased value, which must be a string
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] for a missing or non-string value,
    /// and [`Error::Format`] if the text cannot be parsed.
    fn convert_from(&self, value: Option<&dyn AnyValue>) -> Result<Self::Output> {
        let value = value.ok_or_else(|| {
            Error::not_supported(format!("{} cannot convert from (null).", self.name()))
        })?;
        match as_str(value) {
            Some(text) => self.convert_from_str(text),
            None => Err(Error::not_supported(format!(
                "{} cannot convert from {}.",
                self.name(),
                short_type_name(value.type_name())
            ))),
        }
    }

    /// Convert text
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the text cannot be parsed.
    fn convert_from_str(&self, s: &str) -> Result<Self::Output> {
        self.parse(s).map_err(|e| {
            debug!(converter = %self.name(), input = s, error = %e, "string conversion failed");
            Error::format(parse_error_message(&self.name(), s))
        })
    }

    /// Render a type-erased value as text
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] if the value is not of the
    /// converter's type, or is missing and null-to-empty is not supported.
    fn convert_to_string(&self, value: Option<&dyn AnyValue>) -> Result<String> {
        self.convert_to(value, TypeDescriptor::of::<String>())
    }

    /// Render a type-erased value as the destination type
    ///
    /// Only string destinations are supported.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSupported`] for a non-string destination, a
    /// value of the wrong type, or a missing value the converter does not
    /// map to `""`.
    fn convert_to(&self, value: Option<&dyn AnyValue>, destination: TypeDescriptor) -> Result<String> {
        let to_string = is_string_type(destination);
        let value = match value {
            Some(value) => value,
            None if to_string && self.supports_null_to_empty_string() => return Ok(String::new()),
            None => return Err(unable_to_convert(&self.name(), "(null)", destination)),
        };
        if to_string {
            if let Some(typed) = value.as_any().downcast_ref::<Self::Value>() {
                return Ok(self.stringify(typed));
            }
        }
        Err(unable_to_convert(
            &self.name(),
            &short_type_name(value.type_name()),
            destination,
        ))
    }
}

/// Message for text a converter cannot parse
pub fn parse_error_message(converter: &str, s: &str) -> String {
    if s.is_empty() {
        format!("{} cannot convert from String.Empty.", converter)
    } else {
        format!("{} cannot convert from '{}'.", converter, s)
    }
}

fn unable_to_convert(converter: &str, source: &str, destination: TypeDescriptor) -> Error {
    Error::not_supported(format!(
        "{} is unable to convert {} to {}.",
        converter,
        source,
        destination.short_name()
    ))
}
