//! keytour: a guided tour of C# keywords, expressed in Rust
//!
//! Each keyword (or small group of keywords) has a demonstration that builds the closest native Rust
//! construct and prints what it does. The reflection demonstration is backed by `keytour_core`'s static
//! introspection registry instead of runtime type metadata.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `demos` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod demos;
pub mod version;

pub use config::TourConfig;
pub use demos::{DEMOS, Demo, DemoError, DemoResult, TourSummary, run_tour};
