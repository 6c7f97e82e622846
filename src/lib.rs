//! Calends - smart enumerations and calendar-only dates
//!
//! Calends provides three building blocks:
//!
//! - **Smart enumerations**: closed sets of named, valued instances with
//!   type-safe equality, ordering, lookup by value or name, and symbolic
//!   formatting. Declare them with [`enumeration!`].
//! - **Dates**: [`Date`], a year, month and day without time of day, with
//!   calendar arithmetic, Easter computus and whole-year differences.
//! - **Named formats**: the seven [`DateFormat`] profiles that render and
//!   parse dates, some fixed and some following the thread's culture.
//!
//! # Quick Start
//!
//! ```
//! use calends::{date_format, Date, Enumeration};
//!
//! let christmas_eve = Date::new(2015, 12, 24)?;
//! assert_eq!(christmas_eve.to_string(), "24/12-2015");
//! assert_eq!(christmas_eve.to_string_with(&date_format::ISO), "2015-12-24");
//!
//! let parsed = Date::parse("3/6-1970", &date_format::DEFAULT)?;
//! assert_eq!(parsed, Date::new(1970, 6, 3)?);
//!
//! let iso = calends::DateFormat::from_name("iso")?;
//! assert_eq!(iso.value(), 6);
//! # Ok::<(), calends::Error>(())
//! ```
//!
//! # Crates
//!
//! | Crate | Contents |
//! |-------|----------|
//! | `calends-core` | errors, type descriptors, the enumeration registry |
//! | `calends-date` | cultures, patterns, `DateFormat`, `Date`, config |
//! | `calends-convert` | string converters for enumerations and dates |

pub use calends_convert::{DateConverter, EnumerationConverter, StringConverter};
pub use calends_core::*;
pub use calends_date::{
    config, culture, date_format, pattern, zone, CalendsConfig, Culture, CultureScope,
    CultureSpec, CultureStrategy, Date, DateFormat, DateStyles,
};
