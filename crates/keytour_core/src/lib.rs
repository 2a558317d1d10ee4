//! Provide the canonical keyword vocabulary and the static type introspection registry for keytour.
//!
//! This crate is intentionally small. It contains two pure pieces that the catalogue binary builds on:
//! - [`lang`]: registry-first vocabulary of the C# keywords the tour covers, and
//! - [`introspect`]: a type introspector over a registry generated at compile time by the
//!   [`Introspect`] derive and the [`introspect_methods`] attribute.
//!
//! ## Notes
//!
//! - No IO. The only shared state is the descriptor cache behind [`introspect::Introspector::global`].
//! - Introspection never inspects live values: descriptors are snapshots of declared shape.
//!
//! ## Examples
//! ```rust
//! use keytour_core::{Introspect, introspect_methods};
//! use keytour_core::introspect::{self, TypeIdentity};
//!
//! #[derive(Introspect)]
//! pub struct Counter {
//!     pub count: u32,
//! }
//!
//! #[introspect_methods]
//! impl Counter {
//!     pub fn bump(&mut self) {
//!         self.count += 1;
//!     }
//! }
//!
//! fn main() {
//!     let descriptor = introspect::describe_type(&TypeIdentity::of::<Counter>()).unwrap();
//!     assert_eq!(descriptor.attribute_names().collect::<Vec<_>>(), vec!["count"]);
//!     assert_eq!(descriptor.operation_names().collect::<Vec<_>>(), vec!["bump"]);
//! }
//! ```

pub mod errors;
pub mod introspect;
pub mod lang;

pub use errors::IntrospectError;
pub use introspect::{
    Access, AttributeInfo, Introspect, Introspector, MemberDescriptor, OperationInfo, ParamInfo, Receiver,
    TypeDescriptor, TypeIdentity,
};
pub use keytour_derive::{Introspect, introspect_methods};

// Generated registry code refers to `::keytour_core::inventory`.
#[doc(hidden)]
pub use inventory;
