//! Define the keyword vocabulary covered by the tour.
//!
//! This module is the single source of truth for tour topics: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records the C# spelling, aliases, category, a one-line description and the
//! Rust construct the demonstration maps it to.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, except where explicit aliases are defined.
//! - A few entries are library types or concepts rather than reserved words (`IDisposable`, `StringBuilder`,
//!   `generics`). The catalogue teaches them alongside the keywords, so they live in the same table.
//!
//! ## Examples
//! ```rust
//! use keytour_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("typeof"), Some(KeywordId::Typeof));
//! assert_eq!(keywords::from_str("reflection"), Some(KeywordId::Typeof)); // alias
//! assert_eq!(keywords::category(KeywordId::Params), KeywordCategory::Parameter);
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every keyword the tour covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    // Modifiers
    Static,
    Abstract,
    Virtual,
    Override,
    Sealed,
    Const,
    Readonly,
    Async,

    // Parameters
    Ref,
    Out,
    Params,

    // Declarations
    Delegate,
    Interface,

    // Statements
    Using,
    Try,
    Catch,

    // Expressions / operators
    Await,
    This,
    Is,
    As,
    Typeof,

    // Builtin types
    String,
    Object,

    // Library types
    IDisposable,
    StringBuilder,
    Array,
    ArrayList,

    // Concepts
    Generics,
    Overloading,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Modifier,
    Parameter,
    Declaration,
    Statement,
    Expression,
    Type,
    Library,
    Concept,
}

impl KeywordCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::Modifier => "modifier",
            KeywordCategory::Parameter => "parameter",
            KeywordCategory::Declaration => "declaration",
            KeywordCategory::Statement => "statement",
            KeywordCategory::Expression => "expression",
            KeywordCategory::Type => "type",
            KeywordCategory::Library => "library",
            KeywordCategory::Concept => "concept",
        }
    }
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the C# spelling; `aliases` are extra spellings accepted on the command line.
/// - `rust_equivalent` names the construct the demonstration uses in its place.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub description: &'static str,
    pub rust_equivalent: &'static str,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords.
///
/// ## Notes
/// - Grouped by category for readability; the ordering carries no meaning.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Modifiers
    info(
        KeywordId::Static,
        "static",
        KeywordCategory::Modifier,
        "Member that belongs to the type itself rather than to an instance.",
        "associated functions and `static` items",
    ),
    info(
        KeywordId::Abstract,
        "abstract",
        KeywordCategory::Modifier,
        "Type that cannot be instantiated, or member a derived type must implement.",
        "trait with required methods",
    ),
    info(
        KeywordId::Virtual,
        "virtual",
        KeywordCategory::Modifier,
        "Member with a base implementation that derived types may replace.",
        "default trait method",
    ),
    info(
        KeywordId::Override,
        "override",
        KeywordCategory::Modifier,
        "Replacement of an inherited virtual or abstract member.",
        "trait impl providing the method",
    ),
    info(
        KeywordId::Sealed,
        "sealed",
        KeywordCategory::Modifier,
        "Type that cannot be used as a base type.",
        "sealed trait pattern (private supertrait)",
    ),
    info(
        KeywordId::Const,
        "const",
        KeywordCategory::Modifier,
        "Value fixed at compile time.",
        "`const` item",
    ),
    info(
        KeywordId::Readonly,
        "readonly",
        KeywordCategory::Modifier,
        "Field assigned once, at construction, and never again.",
        "private field with a getter",
    ),
    info_since(
        KeywordId::Async,
        "async",
        KeywordCategory::Modifier,
        "Method that may suspend while awaiting other work.",
        "`async fn`",
        Since(5, 0),
    ),
    // Parameters
    info(
        KeywordId::Ref,
        "ref",
        KeywordCategory::Parameter,
        "Argument passed by reference; must be initialised by the caller.",
        "`&mut T` parameter",
    ),
    info(
        KeywordId::Out,
        "out",
        KeywordCategory::Parameter,
        "Argument the callee must assign before returning.",
        "tuple return value",
    ),
    info(
        KeywordId::Params,
        "params",
        KeywordCategory::Parameter,
        "Trailing parameter that accepts any number of arguments.",
        "slice parameter `&[T]`",
    ),
    // Declarations
    info(
        KeywordId::Delegate,
        "delegate",
        KeywordCategory::Declaration,
        "Type-safe reference to a method with a given signature.",
        "`fn` pointer type alias",
    ),
    info(
        KeywordId::Interface,
        "interface",
        KeywordCategory::Declaration,
        "Contract of members a type promises to implement.",
        "trait",
    ),
    // Statements
    info(
        KeywordId::Using,
        "using",
        KeywordCategory::Statement,
        "Scope after which a disposable resource is released.",
        "block scope with `Drop`",
    ),
    info(
        KeywordId::Try,
        "try",
        KeywordCategory::Statement,
        "Block whose exceptions are handled by the following catch clauses.",
        "`Result` and `?`",
    ),
    info(
        KeywordId::Catch,
        "catch",
        KeywordCategory::Statement,
        "Handler for an exception raised in a try block.",
        "`match` on `Err`",
    ),
    // Expressions / operators
    info_since(
        KeywordId::Await,
        "await",
        KeywordCategory::Expression,
        "Suspend until an asynchronous operation completes.",
        "`.await`",
        Since(5, 0),
    ),
    info(
        KeywordId::This,
        "this",
        KeywordCategory::Expression,
        "The current instance.",
        "`self`",
    ),
    info(
        KeywordId::Is,
        "is",
        KeywordCategory::Expression,
        "Check whether an object has a given runtime type.",
        "`Any::is`",
    ),
    info(
        KeywordId::As,
        "as",
        KeywordCategory::Expression,
        "Checked cast that yields null on failure.",
        "`Any::downcast_ref` returning `Option`",
    ),
    info_with_aliases(
        KeywordId::Typeof,
        "typeof",
        &["reflection"],
        KeywordCategory::Expression,
        "Obtain the runtime type of a declared type, the entry point to reflection.",
        "static introspection registry",
    ),
    // Builtin types
    info(
        KeywordId::String,
        "string",
        KeywordCategory::Type,
        "Immutable sequence of characters.",
        "`&str`",
    ),
    info_with_aliases(
        KeywordId::Object,
        "object",
        &["boxing", "unboxing"],
        KeywordCategory::Type,
        "Root type; converting a value to it boxes the value.",
        "`Box<dyn Any>`",
    ),
    // Library types
    info_with_aliases(
        KeywordId::IDisposable,
        "IDisposable",
        &["disposable"],
        KeywordCategory::Library,
        "Interface for releasing resources deterministically.",
        "`Drop`",
    ),
    info(
        KeywordId::StringBuilder,
        "StringBuilder",
        KeywordCategory::Library,
        "Mutable, growable sequence of characters.",
        "`String`",
    ),
    info(
        KeywordId::Array,
        "Array",
        KeywordCategory::Library,
        "Fixed-size collection of elements of one type.",
        "`[T; N]`",
    ),
    KeywordInfo {
        stability: Stability::Legacy,
        ..info(
            KeywordId::ArrayList,
            "ArrayList",
            KeywordCategory::Library,
            "Growable collection of elements of any type.",
            "`Vec` of an enum",
        )
    },
    // Concepts
    info_full(
        KeywordId::Generics,
        "generics",
        &["generic"],
        KeywordCategory::Concept,
        "Types and methods parameterised over other types.",
        "generic struct `Foo<T>`",
        Since(2, 0),
    ),
    info_with_aliases(
        KeywordId::Overloading,
        "overloading",
        &["overload"],
        KeywordCategory::Concept,
        "Several methods sharing a name, chosen by parameter types at compile time.",
        "one generic method over a trait",
    ),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical C# spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Aliases.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a KEYWORDS entry")
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
    rust_equivalent: &'static str,
) -> KeywordInfo {
    info_full(id, canonical, &[], category, description, rust_equivalent, Since(1, 0))
}

const fn info_since(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
    rust_equivalent: &'static str,
    since: Since,
) -> KeywordInfo {
    info_full(id, canonical, &[], category, description, rust_equivalent, since)
}

const fn info_with_aliases(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    description: &'static str,
    rust_equivalent: &'static str,
) -> KeywordInfo {
    info_full(id, canonical, aliases, category, description, rust_equivalent, Since(1, 0))
}

const fn info_full(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    description: &'static str,
    rust_equivalent: &'static str,
    since: Since,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        description,
        rust_equivalent,
        since,
        stability: Stability::Stable,
    }
}
