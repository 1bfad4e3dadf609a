//! # Validation Engine
//!
//! The single entry point. Runs the [`ELEMENT`] schema over a raw record and
//! either returns the normalized record / typed [`Manifest`] or the first
//! failure found.
//!
//! ## Traversal Order
//!
//! `name`, `description`, `attributes`, `properties`, `events`, `slots`,
//! `cssProperties`, `cssParts`; within a list, elements in input order;
//! within a record, fields in declared order. The first failure in this
//! depth-first, left-to-right walk aborts validation. No partial result is
//! ever returned.

use serde_json::Value;

use wem_core::{FieldPath, ValidationResult};

use crate::manifest::Manifest;
use crate::options::ValidationOptions;
use crate::sections::ELEMENT;

/// Validates element manifests under a fixed set of [`ValidationOptions`].
///
/// Holds no state besides its options; one validator may be reused for any
/// number of records, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct ManifestValidator {
    options: ValidationOptions,
}

impl ManifestValidator {
    /// A validator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator with the given options.
    pub fn with_options(options: ValidationOptions) -> Self {
        Self { options }
    }

    /// The options this validator applies.
    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate `raw` and return the normalized record without decoding it.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`](wem_core::ValidationError) in traversal
    /// order.
    pub fn validate_value(&self, raw: &Value) -> ValidationResult<Value> {
        let name = raw.get("name").and_then(Value::as_str).unwrap_or("<unnamed>");
        tracing::debug!(
            element = name,
            policy = ?self.options.unknown_fields,
            "validating element manifest"
        );

        match ELEMENT.apply(raw, &FieldPath::root(), &self.options) {
            Ok(normalized) => {
                tracing::debug!(
                    element = name,
                    attributes = section_len(&normalized, "attributes"),
                    properties = section_len(&normalized, "properties"),
                    events = section_len(&normalized, "events"),
                    slots = section_len(&normalized, "slots"),
                    css_properties = section_len(&normalized, "cssProperties"),
                    css_parts = section_len(&normalized, "cssParts"),
                    "element manifest valid"
                );
                Ok(normalized)
            }
            Err(err) => {
                tracing::debug!(
                    element = name,
                    path = %err.path(),
                    error = %err.kind(),
                    "element manifest rejected"
                );
                Err(err)
            }
        }
    }

    /// Validate `raw` and decode it into a [`Manifest`].
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`](wem_core::ValidationError) in traversal
    /// order.
    pub fn validate(&self, raw: &Value) -> ValidationResult<Manifest> {
        let normalized = self.validate_value(raw)?;
        Manifest::from_normalized(normalized)
    }
}

fn section_len(record: &Value, section: &str) -> usize {
    record.get(section).and_then(Value::as_array).map_or(0, Vec::len)
}

/// Validate `raw` with default options.
///
/// # Errors
///
/// See [`ManifestValidator::validate`].
pub fn validate(raw: &Value) -> ValidationResult<Manifest> {
    ManifestValidator::new().validate(raw)
}

/// Normalize `raw` with default options.
///
/// # Errors
///
/// See [`ManifestValidator::validate_value`].
pub fn validate_value(raw: &Value) -> ValidationResult<Value> {
    ManifestValidator::new().validate_value(raw)
}
