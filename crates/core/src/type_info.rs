//! Runtime type identity
//!
//! Equality and ordering of enumerations, the type-erased registry and the
//! string-conversion bridge all need to know the concrete type behind a
//! trait object. [`AnyValue`] exposes that for every `'static` type, and
//! [`TypeDescriptor`] names a type without a value in hand.

use std::any::{Any, TypeId};
use std::fmt;

/// Object-safe access to the concrete type of a value
///
/// Blanket-implemented for every `'static` type, so any value can be passed
/// where `&dyn AnyValue` is expected.
pub trait AnyValue: Any + 'static {
    /// Upcast to `&dyn Any` for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Fully qualified name of the concrete type
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AnyValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Identity and name of a type
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
}

impl TypeDescriptor {
    /// Describe `T`
    pub fn of<T: Any + ?Sized>() -> Self {
        TypeDescriptor {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Describe the concrete type behind `value`
    pub fn of_val(value: &dyn AnyValue) -> Self {
        TypeDescriptor {
            id: value.as_any().type_id(),
            name: value.type_name(),
        }
    }

    /// The `TypeId` of the described type
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without module paths
    pub fn short_name(&self) -> String {
        short_type_name(self.name)
    }

    /// Check if this describes `T`
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl std::hash::Hash for TypeDescriptor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.name).finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Strip module paths from a type name, keeping generic arguments
///
/// `alloc::vec::Vec<my_crate::Flag>` becomes `Vec<Flag>`.
pub fn short_type_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment = String::new();
    for c in name.chars() {
        match c {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '&' | '(' | ')' | '[' | ']' | ';' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(&segment);
    out
}
