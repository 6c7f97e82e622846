//! Calendar-only dates for Calends
//!
//! This crate provides:
//! - Culture: locale data and the per-thread ambient culture
//! - Pattern: the date pattern engine used to render and parse text
//! - DateFormat: the seven named format profiles (a smart enumeration)
//! - Date: a year, month and day with calendar arithmetic
//! - Zone: the Europe/Copenhagen wall clock behind `Date::danish_today`
//! - Config: `calends.toml` loading

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod culture;
pub mod date;
pub mod date_format;
pub mod pattern;
pub mod zone;

pub use config::CalendsConfig;
pub use culture::{Culture, CultureScope, CultureSpec};
pub use date::{Date, MAX_YEAR, MIN_YEAR};
pub use date_format::{CultureStrategy, DateFormat};
pub use pattern::{DateStyles, ParsedFields, Pattern};
