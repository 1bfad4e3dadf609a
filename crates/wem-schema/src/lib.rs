//! # wem-schema — Element Manifest Validation
//!
//! Validates the raw description of a UI element's public surface and
//! normalizes it into a typed [`Manifest`].
//!
//! ```text
//! raw Value ──▶ engine ──▶ sections::ELEMENT (composer)
//!                               ├── name / description      (patterns)
//!                               ├── attributes, properties  (conditional: type → defaultValue)
//!                               └── events, slots, cssProperties, cssParts
//!                         ──▶ normalized Value ──▶ Manifest
//! ```
//!
//! ## Modules
//!
//! - [`conditional`]: the discriminated-union resolver that picks the
//!   shape and default of `defaultValue` from its sibling `type`.
//! - [`composer`]: record and list schemas built from field specs.
//! - [`sections`]: the concrete manifest schemas, usable one by one.
//! - [`engine`]: [`ManifestValidator`] and the [`validate`] entry points.
//! - [`manifest`]: the typed result.
//! - [`options`]: [`ValidationOptions`].
//!
//! ## Crate Policy
//!
//! - Depends only on `wem-core` internally.
//! - Validation is pure: no I/O, no global state beyond `static` schemas.
//! - Fail-fast: exactly one error per failed validation, the first in
//!   traversal order.
//! - Logging goes through `tracing`; installing a subscriber is the
//!   caller's business.

pub mod composer;
pub mod conditional;
pub mod engine;
pub mod manifest;
pub mod options;
pub mod sections;

pub use composer::{FieldRule, FieldSpec, ListSchema, RecordSchema};
pub use conditional::{ConditionalResolver, DependentRule, Discriminant, DEFAULT_VALUE};
pub use engine::{validate, validate_value, ManifestValidator};
pub use manifest::{
    Attribute, AttributeBinding, ChangeEvent, CssProperty, DefaultValue, Manifest,
    NamedDescribable, Property,
};
pub use options::{UnknownFieldPolicy, ValidationOptions};
pub use sections::{
    ATTRIBUTE, ATTRIBUTES, CSS_PROPERTIES, CSS_PROPERTY, ELEMENT, NAMED_DESCRIBABLE,
    NAMED_DESCRIBABLES, PROPERTIES, PROPERTY,
};

pub use wem_core::{FieldPath, TypeTag, ValidationError, ValidationErrorKind, ValidationResult};
