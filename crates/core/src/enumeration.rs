//! Smart enumerations
//!
//! A smart enumeration is a closed set of named, valued, comparable
//! instances that replaces a bare integer code. Each instance carries an
//! [`EnumBase`] with three parts:
//!
//! | Part | Purpose |
//! |------|---------|
//! | `value` | Integer code, used for equality, ordering and hashing |
//! | `name` | Symbolic name, matched case-insensitively by lookups |
//! | `text` | Human readable description (defaults to the name) |
//!
//! Instances are `static` items of the concrete type. The [`enumeration!`]
//! macro registers them, in declaration order, with the type's
//! compute-once instance cache (see [`crate::registry`]).
//!
//! ## Usage
//!
//! ```
//! use calends_core::{enumeration, EnumBase, Enumeration};
//!
//! #[derive(Debug)]
//! pub struct Color {
//!     base: EnumBase,
//! }
//!
//! pub static RED: Color = Color { base: EnumBase::named(1, "Red") };
//! pub static GREEN: Color = Color { base: EnumBase::named(2, "Green") };
//!
//! enumeration!(Color, base, [RED, GREEN]);
//!
//! assert_eq!(Color::all().len(), 2);
//! assert_eq!(Color::from_name("green").unwrap().value(), 2);
//! ```

use crate::error::{Error, Result};
use crate::registry::{self, Instances};
use crate::type_info::AnyValue;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Value, name and text shared by every enumeration instance
#[derive(Debug, Clone)]
pub struct EnumBase {
    value: i32,
    name: Cow<'static, str>,
    text: Cow<'static, str>,
}

impl EnumBase {
    /// Declare an instance with a distinct text
    ///
    /// Intended for `static` items, where an empty name is rejected at
    /// compile time. Use [`EnumBase::new`] for names known only at runtime.
    pub const fn declare(value: i32, name: &'static str, text: &'static str) -> Self {
        if name.is_empty() {
            panic!("The name cannot be null or empty.");
        }
        EnumBase {
            value,
            name: Cow::Borrowed(name),
            text: Cow::Borrowed(text),
        }
    }

    /// Declare an instance whose text is its name
    pub const fn named(value: i32, name: &'static str) -> Self {
        Self::declare(value, name, name)
    }

    /// Create an instance from runtime input
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if `name` is empty.
    pub fn new(
        value: i32,
        name: impl Into<Cow<'static, str>>,
        text: Option<Cow<'static, str>>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::argument("The name cannot be null or empty."));
        }
        let text = text.unwrap_or_else(|| name.clone());
        Ok(EnumBase { value, name, text })
    }

    /// Integer code
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Symbolic name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A closed set of named, valued instances
///
/// The trait is object safe; the associated functions that need the
/// concrete type are bounded by `Self: Sized`. Implement it with the
/// [`enumeration!`] macro, which also provides value-based `PartialEq`,
/// `Eq`, `Hash`, `PartialOrd`, `Ord` and a `Display` that prints the name.
pub trait Enumeration: AnyValue + fmt::Debug + Send + Sync + 'static {
    /// The value, name and text of this instance
    fn base(&self) -> &EnumBase;

    /// Every instance declared on the type, in declaration order
    ///
    /// Called at most once per type; use [`Enumeration::all`] to read the
    /// cached list.
    fn declare() -> Vec<&'static Self>
    where
        Self: Sized;

    /// The compute-once cache holding the declared instances
    fn instances() -> &'static Instances<Self>
    where
        Self: Sized;

    /// Integer code
    fn value(&self) -> i32 {
        self.base().value()
    }

    /// Symbolic name
    fn name(&self) -> &str {
        self.base().name()
    }

    /// Human readable text
    fn text(&self) -> &str {
        self.base().text()
    }

    /// Render with a symbolic format specifier
    ///
    /// | Specifier | Output |
    /// |-----------|--------|
    /// | `V` | value as invariant digits |
    /// | `T` | text |
    /// | `N`, `G` or none | name |
    ///
    /// Specifiers are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] for any other specifier.
    fn format(&self, format: Option<&str>) -> Result<String> {
        format_base(self.base(), format)
    }

    /// All instances of the type (cached)
    fn all() -> &'static [&'static Self]
    where
        Self: Sized,
    {
        registry::get_all::<Self>()
    }

    /// First instance with the given value, if any
    fn from_value_or_default(value: i32) -> Option<&'static Self>
    where
        Self: Sized,
    {
        registry::from_value_or_default::<Self>(value)
    }

    /// First instance with the given value
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if no instance has the value.
    fn from_value(value: i32) -> Result<&'static Self>
    where
        Self: Sized,
    {
        registry::from_value::<Self>(value)
    }

    /// First instance whose name matches, ignoring case
    fn from_name_or_default(name: &str) -> Option<&'static Self>
    where
        Self: Sized,
    {
        registry::from_name_or_default::<Self>(name)
    }

    /// First instance whose name matches, ignoring case
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if no instance has the name.
    fn from_name(name: &str) -> Result<&'static Self>
    where
        Self: Sized,
    {
        registry::from_name::<Self>(name)
    }
}

fn format_base(base: &EnumBase, format: Option<&str>) -> Result<String> {
    let format = format.unwrap_or("G");
    match format.to_ascii_uppercase().as_str() {
        "V" => Ok(base.value().to_string()),
        "T" => Ok(base.text().to_string()),
        "N" | "G" => Ok(base.name().to_string()),
        _ => Err(Error::format(format!("Unsupported format '{}'", format))),
    }
}

/// Check that two instances belong to the same concrete type
pub fn same_type(a: &dyn Enumeration, b: &dyn Enumeration) -> bool {
    a.as_any().type_id() == b.as_any().type_id()
}

/// Type-sensitive equality
///
/// Instances of two different enumeration types are never equal, even when
/// they share a value. A missing right-hand side is never equal.
pub fn equals(a: &dyn Enumeration, b: Option<&dyn Enumeration>) -> bool {
    match b {
        Some(b) => same_type(a, b) && a.value() == b.value(),
        None => false,
    }
}

/// Type-checked ordering by value
///
/// A missing right-hand side orders before any present instance, so
/// `compare(x, None)` is `Greater`.
///
/// # Errors
///
/// Returns [`Error::Argument`] if the instances belong to different types.
pub fn compare(a: &dyn Enumeration, b: Option<&dyn Enumeration>) -> Result<Ordering> {
    let b = match b {
        Some(b) => b,
        None => return Ok(Ordering::Greater),
    };
    if !same_type(a, b) {
        return Err(Error::argument(format!(
            "A value of type '{}' cannot be compared to this {}.{} value, because the types are not the same.",
            b.type_name(),
            a.type_name(),
            a.name()
        )));
    }
    Ok(a.value().cmp(&b.value()))
}

/// Ordering of an instance against an optional instance of the same type
///
/// A missing right-hand side orders before any present instance.
pub fn compare_same<E: Enumeration>(a: &E, b: Option<&E>) -> Ordering {
    match b {
        Some(b) => a.value().cmp(&b.value()),
        None => Ordering::Greater,
    }
}

impl PartialEq for dyn Enumeration {
    fn eq(&self, other: &Self) -> bool {
        equals(self, Some(other))
    }
}

impl fmt::Display for dyn Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Implement [`Enumeration`] and the value-based std traits for a type
///
/// Arguments: the type, the field holding its [`EnumBase`], and its
/// `static` instances in declaration order.
#[macro_export]
macro_rules! enumeration {
    ($ty:ty, $base:ident, [$($instance:path),* $(,)?]) => {
        impl $crate::Enumeration for $ty {
            fn base(&self) -> &$crate::EnumBase {
                &self.$base
            }

            fn declare() -> ::std::vec::Vec<&'static Self> {
                ::std::vec![$(&$instance),*]
            }

            fn instances() -> &'static $crate::Instances<Self> {
                static INSTANCES: $crate::Instances<$ty> = $crate::Instances::new();
                &INSTANCES
            }
        }

        impl ::std::cmp::PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.$base.value() == other.$base.value()
            }
        }

        impl ::std::cmp::Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&self.$base.value(), state);
            }
        }

        impl ::std::cmp::PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $ty {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.$base.value().cmp(&other.$base.value())
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.$base.name())
            }
        }
    };
}
