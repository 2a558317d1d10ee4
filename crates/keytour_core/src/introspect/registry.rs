//! Link-time registry of introspectable types.
//!
//! `#[derive(Introspect)]` submits one [`TypeEntry`] per type and `#[introspect_methods]` submits one
//! [`OperationSet`] per `impl` block. Both are collected with `inventory`, so the registry is assembled
//! without any runtime reflection and without a hand-maintained list.
//!
//! ## Notes
//! - `inventory` does not define an iteration order. Types are sorted once, on first use, so callers always
//!   observe the same order.

use std::any::TypeId;
use std::sync::OnceLock;

use super::descriptor::{AttributeInfo, OperationInfo};
use super::{Introspect, TypeIdentity};
use crate::errors::IntrospectError;

/// Registry record for one type, emitted by `#[derive(Introspect)]`.
#[derive(Debug)]
pub struct TypeEntry {
    pub name: &'static str,
    pub module_path: &'static str,
    pub type_id: fn() -> TypeId,
    pub attributes: &'static [AttributeInfo],
}

impl TypeEntry {
    /// Build the entry for `T`. `module_path` is the `module_path!()` of the declaring module.
    pub const fn of<T: Introspect>(module_path: &'static str) -> Self {
        Self {
            name: T::TYPE_NAME,
            module_path,
            type_id: TypeId::of::<T>,
            attributes: T::ATTRIBUTES,
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }

    /// Whether `path` spells `module_path::name`, without building the qualified name.
    pub fn has_qualified_name(&self, path: &str) -> bool {
        path.strip_suffix(self.name)
            .and_then(|prefix| prefix.strip_suffix("::"))
            .is_some_and(|module| module == self.module_path)
    }
}

/// Operations declared by one `impl` block, emitted by `#[introspect_methods]`.
#[derive(Debug)]
pub struct OperationSet {
    pub type_id: fn() -> TypeId,
    /// Source location of the `impl` block; orders blocks of the same type.
    pub file: &'static str,
    pub line: u32,
    pub operations: &'static [OperationInfo],
}

impl OperationSet {
    pub const fn of<T: 'static>(file: &'static str, line: u32, operations: &'static [OperationInfo]) -> Self {
        Self {
            type_id: TypeId::of::<T>,
            file,
            line,
            operations,
        }
    }
}

inventory::collect!(TypeEntry);
inventory::collect!(OperationSet);

/// All registered types, ordered by `(name, module_path)`.
///
/// The registry is fixed at link time, so the sorted list is built once and shared.
pub fn types() -> &'static [&'static TypeEntry] {
    static SORTED: OnceLock<Vec<&'static TypeEntry>> = OnceLock::new();
    SORTED.get_or_init(|| {
        let mut entries: Vec<&'static TypeEntry> = inventory::iter::<TypeEntry>.into_iter().collect();
        entries.sort_by(|a, b| (a.name, a.module_path).cmp(&(b.name, b.module_path)));
        entries
    })
}

/// Registered type names, ordered and de-duplicated.
pub fn type_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = types().iter().map(|e| e.name).collect();
    names.dedup();
    names
}

/// Resolve an identity to its registry entry.
///
/// ## Notes
/// - Names match case-sensitively, either the bare type name or `module::Name`.
/// - A bare name shared by types in several modules resolves to the first by module path.
///
/// ## Errors
/// - [`IntrospectError::UnknownType`] when nothing matches.
pub fn resolve(identity: &TypeIdentity) -> Result<&'static TypeEntry, IntrospectError> {
    let entries = types();
    let found = match identity {
        TypeIdentity::Id { id, .. } => entries.iter().find(|e| (e.type_id)() == *id),
        TypeIdentity::Name(name) if name.contains("::") => entries.iter().find(|e| e.has_qualified_name(name)),
        TypeIdentity::Name(name) => {
            let mut matches = entries.iter().filter(|e| e.name == name.as_str());
            let first = matches.next();
            if first.is_some() && matches.next().is_some() {
                tracing::warn!(name = %name, "type name is registered in several modules; using the first");
            }
            first
        }
    };
    found
        .copied()
        .ok_or_else(|| IntrospectError::unknown_type(identity.to_string(), type_names()))
}

/// Operations declared for the type with `type_id`, in enumeration order.
pub fn operations_for(type_id: TypeId) -> Vec<&'static OperationInfo> {
    let mut sets: Vec<&'static OperationSet> = inventory::iter::<OperationSet>
        .into_iter()
        .filter(|set| (set.type_id)() == type_id)
        .collect();
    sets.sort_by(|a, b| (a.file, a.line).cmp(&(b.file, b.line)));
    sets.into_iter().flat_map(|set| set.operations.iter()).collect()
}
