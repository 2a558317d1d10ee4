//! Error taxonomy for type introspection.
//!
//! Resolution of a type identity is the only step that can fail; everything after it is a pure read of
//! static tables.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while resolving a type identity.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum IntrospectError {
    /// The identity does not resolve to any registered type.
    ///
    /// `registered` holds the comma-separated names that *are* registered, for diagnostics.
    #[error("unknown type `{identity}`")]
    #[diagnostic(
        code(keytour::unknown_type),
        help("registered types: {registered}")
    )]
    UnknownType { identity: String, registered: String },
}

impl IntrospectError {
    /// Build an `UnknownType` error for `identity`, listing `registered` names in the help text.
    pub fn unknown_type<'a>(identity: impl Into<String>, registered: impl IntoIterator<Item = &'a str>) -> Self {
        let registered: Vec<&str> = registered.into_iter().collect();
        let registered = if registered.is_empty() {
            "(none)".to_string()
        } else {
            registered.join(", ")
        };
        IntrospectError::UnknownType {
            identity: identity.into(),
            registered,
        }
    }

    /// The identity that failed to resolve.
    pub fn identity(&self) -> &str {
        match self {
            IntrospectError::UnknownType { identity, .. } => identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_message_names_identity() {
        let err = IntrospectError::unknown_type("Nope", ["A", "B"]);
        assert_eq!(err.to_string(), "unknown type `Nope`");
        assert_eq!(err.identity(), "Nope");
        let IntrospectError::UnknownType { registered, .. } = err;
        assert_eq!(registered, "A, B");
    }

    #[test]
    fn unknown_type_with_empty_registry() {
        let err = IntrospectError::unknown_type("Nope", std::iter::empty());
        let IntrospectError::UnknownType { registered, .. } = err;
        assert_eq!(registered, "(none)");
    }
}
