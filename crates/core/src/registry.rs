//! Per-type instance registry
//!
//! Two caches back the enumeration lookups:
//!
//! - **Instance lists**: every concrete type owns an [`Instances`] cell.
//!   The first call to [`get_all`] runs the type's `declare` function and
//!   publishes the result; racing first callers block until that single
//!   result is published, and later callers read it without locking.
//! - **Bound accessors**: the type-erased entry points ([`get_all_of`] and
//!   friends) resolve an [`EnumerationType`] to a cached accessor. The map
//!   sits behind a reader/writer lock: lookups share the read lock, and a
//!   miss takes the write lock and re-checks before inserting, so each type
//!   is registered at most once.
//!
//! Uses parking_lot::RwLock instead of std::sync::RwLock to avoid cascading
//! panics from lock poisoning.

use crate::enumeration::Enumeration;
use crate::error::{Error, Result};
use crate::type_info::TypeDescriptor;
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::any::TypeId;
use std::fmt;
use tracing::{debug, trace};

// =============================================================================
// Instance Lists
// =============================================================================

/// Compute-once cache of a type's declared instances
///
/// Created by the [`enumeration!`](crate::enumeration!) macro as a `static`
/// owned by the concrete type.
pub struct Instances<E: 'static> {
    cell: OnceCell<Vec<&'static E>>,
}

impl<E: 'static> Instances<E> {
    /// Create an empty cache
    pub const fn new() -> Self {
        Instances {
            cell: OnceCell::new(),
        }
    }

    /// Check whether the instances have been discovered yet
    pub fn is_populated(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<E: Enumeration> Instances<E> {
    fn get_or_declare(&'static self) -> &'static [&'static E] {
        self.cell
            .get_or_init(|| {
                let declared = E::declare();
                debug!(
                    enumeration = std::any::type_name::<E>(),
                    count = declared.len(),
                    "discovered enumeration instances"
                );
                declared
            })
            .as_slice()
    }
}

impl<E: 'static> Default for Instances<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Every instance declared on `E`, in declaration order
///
/// Memoized per type: repeated calls return the same slice of the same
/// `'static` instances, whatever thread they come from.
pub fn get_all<E: Enumeration>() -> &'static [&'static E] {
    E::instances().get_or_declare()
}

/// First instance of `E` with the given value, if any
pub fn from_value_or_default<E: Enumeration>(value: i32) -> Option<&'static E> {
    get_all::<E>().iter().copied().find(|item| item.value() == value)
}

/// First instance of `E` with the given value
///
/// # Errors
///
/// Returns [`Error::Argument`] if no instance has the value.
pub fn from_value<E: Enumeration>(value: i32) -> Result<&'static E> {
    from_value_or_default::<E>(value)
        .ok_or_else(|| invalid_value(value, std::any::type_name::<E>()))
}

/// First instance of `E` whose name matches, ignoring case
pub fn from_name_or_default<E: Enumeration>(name: &str) -> Option<&'static E> {
    get_all::<E>()
        .iter()
        .copied()
        .find(|item| eq_ignore_case(item.name(), name))
}

/// First instance of `E` whose name matches, ignoring case
///
/// # Errors
///
/// Returns [`Error::Format`] if no instance has the name.
pub fn from_name<E: Enumeration>(name: &str) -> Result<&'static E> {
    from_name_or_default::<E>(name).ok_or_else(|| invalid_name(name, std::any::type_name::<E>()))
}

// =============================================================================
// Type-erased Access
// =============================================================================

/// Accessor bound to one concrete enumeration type
type Accessor = fn() -> Vec<&'static dyn Enumeration>;

/// Handle naming a concrete enumeration type at runtime
#[derive(Clone, Copy)]
pub struct EnumerationType {
    descriptor: TypeDescriptor,
    accessor: Accessor,
}

impl EnumerationType {
    /// Handle for `E`
    pub fn of<E: Enumeration>() -> Self {
        EnumerationType {
            descriptor: TypeDescriptor::of::<E>(),
            accessor: erased_get_all::<E>,
        }
    }

    /// The `TypeId` of the enumeration type
    pub fn id(&self) -> TypeId {
        self.descriptor.id()
    }

    /// Fully qualified name of the enumeration type
    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Descriptor of the enumeration type
    pub fn descriptor(&self) -> TypeDescriptor {
        self.descriptor
    }
}

impl PartialEq for EnumerationType {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor == other.descriptor
    }
}

impl Eq for EnumerationType {}

impl fmt::Debug for EnumerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumerationType")
            .field(&self.descriptor.name())
            .finish()
    }
}

fn erased_get_all<E: Enumeration>() -> Vec<&'static dyn Enumeration> {
    get_all::<E>()
        .iter()
        .map(|item| *item as &'static dyn Enumeration)
        .collect()
}

/// Global cache of bound accessors (type -> get-all)
///
/// Every `EnumerationType` carries an accessor, but only the one bound
/// here is ever called: the first registration for a type wins.
static ACCESSORS: Lazy<RwLock<FxHashMap<TypeId, Accessor>>> =
    Lazy::new(|| RwLock::new(FxHashMap::default()));

fn read_accessor(id: TypeId) -> Option<Accessor> {
    ACCESSORS.read().get(&id).copied()
}

fn write_accessor(ty: &EnumerationType) -> Accessor {
    let mut accessors = ACCESSORS.write();
    // Another writer may have registered the type while we waited
    *accessors.entry(ty.id()).or_insert_with(|| {
        trace!(enumeration = ty.name(), "caching enumeration accessor");
        ty.accessor
    })
}

fn resolve(ty: Option<EnumerationType>) -> Result<(EnumerationType, Accessor)> {
    let ty = ty.ok_or_else(|| {
        Error::argument("Value cannot be null. (Parameter 'enumeration_type')")
    })?;
    let accessor = match read_accessor(ty.id()) {
        Some(accessor) => accessor,
        None => write_accessor(&ty),
    };
    Ok((ty, accessor))
}

/// Check whether the accessor for a type has been cached
pub fn is_accessor_cached(ty: &EnumerationType) -> bool {
    read_accessor(ty.id()).is_some()
}

/// Every instance of the given type, type-erased
///
/// # Errors
///
/// Returns [`Error::Argument`] if `ty` is `None`.
pub fn get_all_of(ty: Option<EnumerationType>) -> Result<Vec<&'static dyn Enumeration>> {
    let (_, accessor) = resolve(ty)?;
    Ok(accessor())
}

/// First instance of the given type with the given value, if any
///
/// # Errors
///
/// Returns [`Error::Argument`] if `ty` is `None`.
pub fn from_value_or_default_of(
    ty: Option<EnumerationType>,
    value: i32,
) -> Result<Option<&'static dyn Enumeration>> {
    let (_, accessor) = resolve(ty)?;
    Ok(accessor().into_iter().find(|item| item.value() == value))
}

/// First instance of the given type with the given value
///
/// # Errors
///
/// Returns [`Error::Argument`] if `ty` is `None` or no instance has the value.
pub fn from_value_of(ty: Option<EnumerationType>, value: i32) -> Result<&'static dyn Enumeration> {
    let (ty, accessor) = resolve(ty)?;
    accessor()
        .into_iter()
        .find(|item| item.value() == value)
        .ok_or_else(|| invalid_value(value, ty.name()))
}

/// First instance of the given type whose name matches, ignoring case
///
/// # Errors
///
/// Returns [`Error::Argument`] if `ty` is `None`.
pub fn from_name_or_default_of(
    ty: Option<EnumerationType>,
    name: &str,
) -> Result<Option<&'static dyn Enumeration>> {
    let (_, accessor) = resolve(ty)?;
    Ok(accessor()
        .into_iter()
        .find(|item| eq_ignore_case(item.name(), name)))
}

/// First instance of the given type whose name matches, ignoring case
///
/// # Errors
///
/// Returns [`Error::Argument`] if `ty` is `None`, or [`Error::Format`] if
/// no instance has the name.
pub fn from_name_of(ty: Option<EnumerationType>, name: &str) -> Result<&'static dyn Enumeration> {
    let (ty, accessor) = resolve(ty)?;
    accessor()
        .into_iter()
        .find(|item| eq_ignore_case(item.name(), name))
        .ok_or_else(|| invalid_name(name, ty.name()))
}

// =============================================================================
// Helpers
// =============================================================================

fn invalid_value(value: i32, type_name: &str) -> Error {
    Error::argument(format!(
        "'{}' is not a valid value for '{}'.",
        value, type_name
    ))
}

fn invalid_name(name: &str, type_name: &str) -> Error {
    Error::format(format!("'{}' is not a valid name for '{}'.", name, type_name))
}

/// Ordinal comparison ignoring case, independent of any culture
///
/// Characters are folded one to one: a character whose uppercase form is
/// more than one character (such as `ß`) only matches itself.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.len() == b.len() && a.eq_ignore_ascii_case(b) {
        return true;
    }
    a.chars().map(fold_case).eq(b.chars().map(fold_case))
}

fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
