//! Type introspection over the compile-time registry.
//!
//! [`describe_type`] turns a [`TypeIdentity`] into a [`TypeDescriptor`]: a snapshot of the attributes and
//! operations registered for that type. [`list_attributes`] and [`list_operations`] enumerate the names.
//!
//! ## Notes
//! - Attributes are reported in field declaration order. Operations are reported in declaration order within an
//!   `impl` block; several `impl` blocks of one type are ordered by source file, then line.
//! - Only `pub` fields and `pub` methods are registered.
//! - [`Introspector`] caches one descriptor per type. Descriptors are `Arc`-shared and never mutated.
//!
//! ## See also
//! - [`registry`] for the raw entries the macros emit.

mod descriptor;
pub mod registry;

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

pub use descriptor::{Access, AttributeInfo, MemberDescriptor, OperationInfo, ParamInfo, Receiver, TypeDescriptor};

use crate::errors::IntrospectError;

/// Static shape information for a type, implemented by `#[derive(Introspect)]`.
///
/// ## Notes
/// - Operations are not part of this trait; they come from `#[introspect_methods]` blocks, which may be
///   spread over several `impl`s.
pub trait Introspect: 'static {
    /// Reported type name.
    const TYPE_NAME: &'static str;
    /// Declared attributes in declaration order.
    const ATTRIBUTES: &'static [AttributeInfo];
}

/// A compile-time-known reference to a type, used as the lookup key.
///
/// ## Examples
/// ```rust
/// use keytour_core::TypeIdentity;
///
/// assert_eq!(TypeIdentity::named("Dog").to_string(), "Dog");
/// assert_eq!(TypeIdentity::of::<u8>().to_string(), "u8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeIdentity {
    /// A Rust type, identified by `TypeId`. `rust_name` is only used for messages.
    Id { id: TypeId, rust_name: &'static str },
    /// A registered name, bare (`Dog`) or module-qualified (`my_crate::pets::Dog`).
    Name(String),
}

impl TypeIdentity {
    pub fn of<T: ?Sized + 'static>() -> Self {
        TypeIdentity::Id {
            id: TypeId::of::<T>(),
            rust_name: std::any::type_name::<T>(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeIdentity::Name(name.into())
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeIdentity::Id { rust_name, .. } => f.write_str(rust_name),
            TypeIdentity::Name(name) => f.write_str(name),
        }
    }
}

/// Describes registered types and caches the results.
///
/// ## Notes
/// - At most one descriptor is computed per type: the write path re-checks the cache under the lock.
/// - Reads of a cached descriptor only take the read lock for the map lookup; the descriptor itself is shared
///   without locking.
#[derive(Debug, Default)]
pub struct Introspector {
    cache: RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>,
}

impl Introspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide introspector used by the free functions of this module.
    pub fn global() -> &'static Introspector {
        static GLOBAL: OnceLock<Introspector> = OnceLock::new();
        GLOBAL.get_or_init(Introspector::new)
    }

    /// Describe the type behind `identity`.
    ///
    /// ## Errors
    /// - [`IntrospectError::UnknownType`] if no registered type matches. Nothing is cached in that case.
    #[tracing::instrument(level = "debug", skip_all, fields(identity = %identity))]
    pub fn describe_type(&self, identity: &TypeIdentity) -> Result<Arc<TypeDescriptor>, IntrospectError> {
        let entry = registry::resolve(identity)?;
        let type_id = (entry.type_id)();

        // Entries are inserted whole, so a poisoned lock still guards a consistent map.
        if let Some(found) = self.cache.read().unwrap_or_else(PoisonError::into_inner).get(&type_id) {
            tracing::debug!(name = entry.name, "descriptor cache hit");
            return Ok(Arc::clone(found));
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let descriptor = cache.entry(type_id).or_insert_with(|| {
            tracing::debug!(name = entry.name, module = entry.module_path, "computing descriptor");
            Arc::new(build_descriptor(entry))
        });
        Ok(Arc::clone(descriptor))
    }

    /// Describe `T` by its `TypeId`.
    pub fn describe<T: Introspect>(&self) -> Result<Arc<TypeDescriptor>, IntrospectError> {
        self.describe_type(&TypeIdentity::of::<T>())
    }

    /// Number of cached descriptors.
    pub fn cached(&self) -> usize {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

fn build_descriptor(entry: &registry::TypeEntry) -> TypeDescriptor {
    let members = entry
        .attributes
        .iter()
        .copied()
        .map(MemberDescriptor::Attribute)
        .chain(
            registry::operations_for((entry.type_id)())
                .into_iter()
                .copied()
                .map(MemberDescriptor::Operation),
        )
        .collect();
    TypeDescriptor::new(entry.name, entry.module_path, members)
}

/// Describe a type through [`Introspector::global`].
pub fn describe_type(identity: &TypeIdentity) -> Result<Arc<TypeDescriptor>, IntrospectError> {
    Introspector::global().describe_type(identity)
}

/// Attribute names of `descriptor`, in enumeration order. Restartable by calling again.
pub fn list_attributes(descriptor: &TypeDescriptor) -> impl Iterator<Item = &'static str> + Clone + '_ {
    descriptor.attribute_names()
}

/// Operation names of `descriptor`, in enumeration order. Restartable by calling again.
pub fn list_operations(descriptor: &TypeDescriptor) -> impl Iterator<Item = &'static str> + Clone + '_ {
    descriptor.operation_names()
}
