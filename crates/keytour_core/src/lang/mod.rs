//! Keyword vocabulary registries.
//!
//! Callers work with stable IDs (e.g. [`keywords::KeywordId`]) and look up spellings and metadata in const
//! tables instead of matching on strings.
//!
//! ## Notes
//! - Registries are **pure**: no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use keytour_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("sealed"), Some(KeywordId::Sealed));
//! assert_eq!(keywords::as_str(KeywordId::Sealed), "sealed");
//! ```
//!
//! ## See also
//! - `cargo run -p keytour_core --bin generate_keyword_reference` to render the catalogue as Markdown.

pub mod keywords;
pub mod registry;
