//! # wem-core — Foundational Types for Element Manifests
//!
//! This crate is the leaf of the element-manifest workspace. It defines the
//! primitives the schema engine is built from; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **One error type.** Every failure is a [`ValidationError`] carrying a
//!    [`FieldPath`] and a [`ValidationErrorKind`]. Callers never have to
//!    match on more than one error type.
//!
//! 2. **Closed type registry.** [`TypeTag`] has exactly five variants. The
//!    per-tag shape check and zero value live in one exhaustive `match`, so
//!    adding a tag forces every consumer to handle it at compile time.
//!
//! 3. **Patterns are values.** Naming conventions are [`NamePattern`]
//!    variants, not ad-hoc regex strings scattered through the schemas.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `wem-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod path;
pub mod pattern;
pub mod types;

// Re-export primary types for ergonomic imports.
pub use error::{ValidationError, ValidationErrorKind, ValidationResult};
pub use path::{FieldPath, PathSegment};
pub use pattern::{matches, NamePattern};
pub use types::{describe_shape, ShapeRule, TypeTag, TYPE_TABLE, TYPE_TAG_COUNT};
