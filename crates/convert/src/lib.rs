//! String-conversion bridge for Calends
//!
//! Converters between text and Calends values, for layers that bind
//! strings to typed values (configuration, form and query binding):
//! - StringConverter: the conversion contract and its error messages
//! - EnumerationConverter: any smart enumeration, by name or by value
//! - DateConverter: `Date` in the `Default` profile, reading `Iso` too

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod converter;
pub mod date;
pub mod enumeration;

pub use converter::{as_str, is_string_type, parse_error_message, StringConverter};
pub use date::DateConverter;
pub use enumeration::EnumerationConverter;
