//! # Error Hierarchy
//!
//! Structured error type for manifest validation, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! There is exactly one error type, [`ValidationError`]. It pairs the
//! [`FieldPath`] of the offending value with a [`ValidationErrorKind`]
//! describing what was wrong. Each kind carries the invalid input and the
//! expectation so that a manifest author can fix the source without
//! guesswork.

use serde_json::Value;
use thiserror::Error;

use crate::path::FieldPath;
use crate::types::describe_shape;

/// Result alias used throughout the workspace.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A manifest failed validation.
///
/// Validation is fail-fast: this is always the first failure found in the
/// fixed traversal order, never an aggregate.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{path}: {kind}")]
pub struct ValidationError {
    path: FieldPath,
    kind: ValidationErrorKind,
}

/// What was wrong with the value at a [`ValidationError`]'s path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationErrorKind {
    /// A required field was absent.
    #[error("required field \"{field}\" is missing")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },

    /// A string did not follow its naming convention.
    #[error("\"{value}\" is not a valid {field}: does not match pattern \"{pattern}\"")]
    InvalidFormat {
        /// Name of the field being checked.
        field: String,
        /// Source of the pattern the value had to match.
        pattern: String,
        /// The rejected value.
        value: String,
    },

    /// A discriminant was absent or not one of the known tags.
    #[error("unknown type {tag} (expected one of {expected})")]
    UnknownType {
        /// The rejected tag, rendered as JSON, or `<missing>`.
        tag: String,
        /// The accepted tags, comma separated.
        expected: String,
    },

    /// A value had the wrong runtime shape.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        /// The shape the value had to have.
        expected: String,
        /// The shape and rendering of the value found.
        actual: String,
    },

    /// A record carried a key its schema does not declare.
    #[error("field \"{field}\" is not allowed")]
    UnknownField {
        /// The undeclared key.
        field: String,
    },

    /// The normalized record could not be decoded into the typed model.
    #[error("normalized record does not fit the manifest model: {reason}")]
    Model {
        /// Decoder message.
        reason: String,
    },
}

impl ValidationError {
    /// Create an error from its parts.
    pub fn new(path: FieldPath, kind: ValidationErrorKind) -> Self {
        Self { path, kind }
    }

    /// The required field at `path` is absent.
    pub fn missing_field(path: &FieldPath) -> Self {
        let field = path.last_field().unwrap_or_default().to_string();
        Self::new(path.clone(), ValidationErrorKind::MissingField { field })
    }

    /// The string at `path` does not match `pattern`.
    pub fn invalid_format(path: &FieldPath, pattern: &str, value: &str) -> Self {
        let field = path.last_field().unwrap_or("value").to_string();
        Self::new(
            path.clone(),
            ValidationErrorKind::InvalidFormat {
                field,
                pattern: pattern.to_string(),
                value: value.to_string(),
            },
        )
    }

    /// The discriminant at `path` is absent (`None`) or not one of `accepted`.
    pub fn unknown_type<'a>(
        path: &FieldPath,
        tag: Option<&Value>,
        accepted: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let tag = match tag {
            Some(value) => value.to_string(),
            None => "<missing>".to_string(),
        };
        let expected = accepted.into_iter().collect::<Vec<_>>().join(", ");
        Self::new(path.clone(), ValidationErrorKind::UnknownType { tag, expected })
    }

    /// The value at `path` does not have the `expected` shape.
    pub fn type_mismatch(path: &FieldPath, expected: &str, actual: &Value) -> Self {
        Self::new(
            path.clone(),
            ValidationErrorKind::TypeMismatch {
                expected: expected.to_string(),
                actual: format!("{} {}", describe_shape(actual), actual),
            },
        )
    }

    /// The key at `path` is not declared by its record schema.
    pub fn unknown_field(path: &FieldPath) -> Self {
        let field = path.last_field().unwrap_or_default().to_string();
        Self::new(path.clone(), ValidationErrorKind::UnknownField { field })
    }

    /// The normalized record failed to decode into the typed model.
    pub fn model(reason: impl Into<String>) -> Self {
        Self::new(
            FieldPath::root(),
            ValidationErrorKind::Model {
                reason: reason.into(),
            },
        )
    }

    /// Location of the offending value.
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// What was wrong with it.
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Human-readable message without the path prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
