//! Core types and traits for Calends
//!
//! This crate defines the foundations shared by the date and conversion crates:
//! - Error: the error taxonomy (argument, format, invalid operation, not supported)
//! - AnyValue / TypeDescriptor: runtime type identity for trait objects
//! - Enumeration: smart enumerations with value, name and text
//! - Registry: compute-once instance lists and the type-erased accessor cache

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod enumeration;
pub mod error;
pub mod registry;
pub mod type_info;

// Re-export commonly used types and traits
pub use enumeration::{compare, compare_same, equals, same_type, EnumBase, Enumeration};
pub use error::{Error, Result};
pub use registry::{
    from_name, from_name_of, from_name_or_default, from_name_or_default_of, from_value,
    from_value_of, from_value_or_default, from_value_or_default_of, get_all, get_all_of,
    EnumerationType, Instances,
};
pub use type_info::{short_type_name, AnyValue, TypeDescriptor};
