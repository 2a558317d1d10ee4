//! Immutable descriptor snapshots of a type's declared shape.
//!
//! All descriptor data is `&'static`: it points into tables emitted by the registry macros, so cloning a
//! descriptor never allocates strings and a descriptor can outlive any value of the described type.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Read/write capability of a declared attribute.
///
/// ## Examples
/// ```rust
/// use keytour_core::Access;
///
/// assert!(Access::READ_WRITE.read && Access::READ_WRITE.write);
/// assert!(!Access::READ_ONLY.write);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Access {
    pub read: bool,
    pub write: bool,
}

impl Access {
    pub const READ_ONLY: Access = Access { read: true, write: false };
    pub const READ_WRITE: Access = Access { read: true, write: true };
}

/// A named data member exposed by a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AttributeInfo {
    /// Reported name (after any `rename` / `rename_all`).
    pub name: &'static str,
    /// Declared Rust type, as written in the source.
    pub type_name: &'static str,
    pub access: Access,
}

impl AttributeInfo {
    pub const fn new(name: &'static str, type_name: &'static str, access: Access) -> Self {
        Self { name, type_name, access }
    }
}

/// How an operation receives the instance it operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Receiver {
    /// Associated function, no `self` (C# `static`).
    None,
    /// `&self`
    Ref,
    /// `&mut self`
    RefMut,
    /// `self`
    Owned,
}

/// A single declared parameter of an operation (the receiver is not a parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParamInfo {
    pub name: &'static str,
    pub type_name: &'static str,
}

impl ParamInfo {
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self { name, type_name }
    }
}

/// A named callable member of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OperationInfo {
    pub name: &'static str,
    pub receiver: Receiver,
    pub params: &'static [ParamInfo],
    /// Declared return type; `None` for unit-returning operations.
    pub returns: Option<&'static str>,
}

impl OperationInfo {
    pub const fn new(
        name: &'static str,
        receiver: Receiver,
        params: &'static [ParamInfo],
        returns: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            receiver,
            params,
            returns,
        }
    }

    /// Number of declared parameters, not counting the receiver.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether this is an associated function rather than a method.
    pub fn is_static(&self) -> bool {
        self.receiver == Receiver::None
    }
}

/// One declared member: either an attribute or an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum MemberDescriptor {
    Attribute(AttributeInfo),
    Operation(OperationInfo),
}

impl MemberDescriptor {
    pub fn name(&self) -> &'static str {
        match self {
            MemberDescriptor::Attribute(a) => a.name,
            MemberDescriptor::Operation(o) => o.name,
        }
    }
}

/// Snapshot of a registered type's declared members.
///
/// ## Notes
/// - Members are ordered attributes first (declaration order), then operations (declaration order per `impl`
///   block, blocks ordered by source location).
/// - The snapshot is never updated; describe the type again to observe a different build.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TypeDescriptor {
    name: &'static str,
    module_path: &'static str,
    members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: &'static str, module_path: &'static str, members: Vec<MemberDescriptor>) -> Self {
        Self {
            name,
            module_path,
            members,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// `module::Name`
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }

    pub fn members(&self) -> &[MemberDescriptor] {
        &self.members
    }

    /// Declared attributes in enumeration order.
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeInfo> + Clone + '_ {
        self.members.iter().filter_map(|m| match m {
            MemberDescriptor::Attribute(a) => Some(a),
            MemberDescriptor::Operation(_) => None,
        })
    }

    /// Declared operations in enumeration order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationInfo> + Clone + '_ {
        self.members.iter().filter_map(|m| match m {
            MemberDescriptor::Operation(o) => Some(o),
            MemberDescriptor::Attribute(_) => None,
        })
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &'static str> + Clone + '_ {
        self.attributes().map(|a| a.name)
    }

    pub fn operation_names(&self) -> impl Iterator<Item = &'static str> + Clone + '_ {
        self.operations().map(|o| o.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeInfo> {
        self.attributes().find(|a| a.name == name)
    }

    pub fn operation(&self, name: &str) -> Option<&OperationInfo> {
        self.operations().find(|o| o.name == name)
    }
}
