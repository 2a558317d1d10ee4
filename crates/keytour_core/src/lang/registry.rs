//! Shareable metadata for `keytour_core::lang` registries.
//!
//! These types are `Copy` so registries can live in `const` tables.

/// Describe the lifecycle status of a vocabulary item in the source language.
///
/// ## Examples
/// ```rust
/// use keytour_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    /// Still accepted but discouraged (e.g. `ArrayList` in favour of `List<T>`).
    Legacy,
}

/// C# language version a keyword or library type first appeared in, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use keytour_core::lang::registry::Since;
///
/// assert_eq!(Since(5, 0).to_string(), "C# 5.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u8, pub u8);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C# {}.{}", self.0, self.1)
    }
}
