//! # Schema Composition
//!
//! Builds record and list schemas out of leaf field specifications.
//!
//! ```text
//! ListSchema ──▶ RecordSchema ──▶ [FieldSpec]
//!                                   ├── required(name, FieldRule)
//!                                   ├── optional(name, FieldRule, default)
//!                                   └── dependent(ConditionalResolver)
//! ```
//!
//! Every descriptor is `const`-constructible, so whole schemas are plain
//! `static` items: built once, never mutated, shared freely across
//! threads.
//!
//! ## Evaluation Order
//!
//! A record applies its fields in declared order; a list applies its
//! record schema to each element in input order. The first failure aborts
//! the enclosing record or list and is returned unchanged, carrying the
//! full path down to the offending value. Undeclared keys are checked
//! after every declared field has passed.

use serde_json::{Map, Value};

use wem_core::{FieldPath, NamePattern, ValidationError, ValidationResult};

use crate::conditional::{ConditionalResolver, DependentRule, Discriminant};
use crate::options::{UnknownFieldPolicy, ValidationOptions};

/// Leaf rule for a present field value.
#[derive(Debug)]
pub enum FieldRule {
    /// Any string.
    String,
    /// A string following a naming convention.
    Pattern(NamePattern),
    /// `true` or `false`.
    Boolean,
    /// One of the tags known to a resolver, used for the resolver's
    /// discriminant field.
    Tag(&'static dyn DependentRule),
    /// The literal `false`, or a value accepted by the inner rule.
    /// `true` is never accepted.
    FalseOr(&'static FieldRule),
    /// A list whose elements follow a record schema.
    ListOf(&'static ListSchema),
}

impl FieldRule {
    /// Description of what the rule accepts, used in mismatch messages.
    pub fn expected(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Pattern(pattern) => format!("{pattern} string"),
            Self::Boolean => "boolean".to_string(),
            Self::Tag(resolver) => format!("{} tag", resolver.discriminant()),
            Self::FalseOr(inner) => format!("false or {}", inner.expected()),
            Self::ListOf(_) => "array".to_string(),
        }
    }

    fn shape_matches(&self, value: &Value) -> bool {
        match self {
            Self::String | Self::Pattern(_) | Self::Tag(_) => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::FalseOr(inner) => value == &Value::Bool(false) || inner.shape_matches(value),
            Self::ListOf(_) => value.is_array(),
        }
    }

    /// Check a present value and return its normalized form.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for a value of the wrong shape, `InvalidFormat` for a
    /// string breaking its convention, `UnknownType` for a bad tag, or the
    /// first failure inside a list.
    pub fn apply(
        &self,
        value: &Value,
        path: &FieldPath,
        options: &ValidationOptions,
    ) -> ValidationResult<Value> {
        match self {
            Self::String => match value {
                Value::String(_) => Ok(value.clone()),
                other => Err(ValidationError::type_mismatch(path, "string", other)),
            },
            Self::Pattern(pattern) => match value {
                Value::String(s) if pattern.is_match(s) => Ok(value.clone()),
                Value::String(s) => Err(ValidationError::invalid_format(path, pattern.as_str(), s)),
                other => Err(ValidationError::type_mismatch(path, "string", other)),
            },
            Self::Boolean => match value {
                Value::Bool(_) => Ok(value.clone()),
                other => Err(ValidationError::type_mismatch(path, "boolean", other)),
            },
            Self::Tag(resolver) => {
                resolver.check_tag(value, path)?;
                Ok(value.clone())
            }
            Self::FalseOr(inner) => match value {
                Value::Bool(false) => Ok(Value::Bool(false)),
                v if !matches!(v, Value::Bool(true)) && inner.shape_matches(v) => {
                    inner.apply(v, path, options)
                }
                other => Err(ValidationError::type_mismatch(path, &self.expected(), other)),
            },
            Self::ListOf(list) => list.apply(value, path, options),
        }
    }
}

#[derive(Debug)]
enum Presence {
    Required(FieldRule),
    Optional(FieldRule, fn() -> Value),
    Dependent(&'static dyn DependentRule),
}

/// One named field of a record schema.
#[derive(Debug)]
pub struct FieldSpec {
    name: &'static str,
    presence: Presence,
}

impl FieldSpec {
    /// A field that must be present and satisfy `rule`.
    pub const fn required(name: &'static str, rule: FieldRule) -> Self {
        Self {
            name,
            presence: Presence::Required(rule),
        }
    }

    /// A field that satisfies `rule` when present and takes `default()`
    /// when absent.
    pub const fn optional(name: &'static str, rule: FieldRule, default: fn() -> Value) -> Self {
        Self {
            name,
            presence: Presence::Optional(rule, default),
        }
    }

    /// A field whose rule and default are selected by a sibling
    /// discriminant. Named after the resolver's dependent field.
    pub const fn dependent<D: Discriminant>(resolver: &'static ConditionalResolver<D>) -> Self {
        Self {
            name: resolver.dependent(),
            presence: Presence::Dependent(resolver),
        }
    }

    /// The field's key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if absence of the field is an error.
    pub fn is_required(&self) -> bool {
        matches!(self.presence, Presence::Required(_))
    }

    /// Validate this field of `record`, whose own path is `record_path`.
    fn apply(
        &self,
        record: &Map<String, Value>,
        record_path: &FieldPath,
        options: &ValidationOptions,
    ) -> ValidationResult<Value> {
        let path = record_path.field(self.name);
        match (&self.presence, record.get(self.name)) {
            (Presence::Dependent(resolver), _) => resolver.resolve(record, record_path),
            (Presence::Required(rule), Some(value))
            | (Presence::Optional(rule, _), Some(value)) => rule.apply(value, &path, options),
            (Presence::Required(_), None) => Err(ValidationError::missing_field(&path)),
            (Presence::Optional(_, default), None) => Ok(default()),
        }
    }
}

/// Schema for one record: an ordered list of field specs.
#[derive(Debug)]
pub struct RecordSchema {
    name: &'static str,
    fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Build a schema from its fields, applied in the given order.
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    /// Schema name, for logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Field specs in evaluation order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Returns true if `key` is one of this schema's fields.
    pub fn declares(&self, key: &str) -> bool {
        self.fields.iter().any(|spec| spec.name == key)
    }

    /// Validate and normalize one record located at `path`.
    ///
    /// The output holds exactly the declared fields, in declared order.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `value` is not an object, otherwise the first
    /// field-level failure, then `UnknownField` for undeclared keys under
    /// [`UnknownFieldPolicy::Reject`].
    pub fn apply(
        &self,
        value: &Value,
        path: &FieldPath,
        options: &ValidationOptions,
    ) -> ValidationResult<Value> {
        let record = value
            .as_object()
            .ok_or_else(|| ValidationError::type_mismatch(path, "object", value))?;

        let mut normalized = Map::with_capacity(self.fields.len());
        for spec in self.fields {
            let field_value = spec.apply(record, path, options)?;
            normalized.insert(spec.name.to_string(), field_value);
        }

        for key in record.keys().filter(|key| !self.declares(key)) {
            match options.unknown_fields {
                UnknownFieldPolicy::Reject => {
                    return Err(ValidationError::unknown_field(&path.field(key)));
                }
                UnknownFieldPolicy::Strip => {
                    tracing::trace!(
                        schema = self.name,
                        path = %path,
                        key = %key,
                        "stripping undeclared field"
                    );
                }
            }
        }

        Ok(Value::Object(normalized))
    }

    /// Validate a standalone record with default options.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn validate(&self, value: &Value) -> ValidationResult<Value> {
        self.apply(value, &FieldPath::root(), &ValidationOptions::default())
    }
}

/// Schema for a list whose elements share one record schema.
#[derive(Debug)]
pub struct ListSchema {
    element: &'static RecordSchema,
}

impl ListSchema {
    /// A list of `element` records.
    pub const fn new(element: &'static RecordSchema) -> Self {
        Self { element }
    }

    /// The element schema.
    pub fn element(&self) -> &'static RecordSchema {
        self.element
    }

    /// Validate and normalize a list located at `path`, keeping element
    /// order.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` if `value` is not an array, otherwise the first
    /// element-level failure with the element's index in its path.
    pub fn apply(
        &self,
        value: &Value,
        path: &FieldPath,
        options: &ValidationOptions,
    ) -> ValidationResult<Value> {
        let items = value
            .as_array()
            .ok_or_else(|| ValidationError::type_mismatch(path, "array", value))?;

        let mut normalized = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            tracing::trace!(schema = self.element.name, path = %path, index, "validating element");
            normalized.push(self.element.apply(item, &path.index(index), options)?);
        }
        Ok(Value::Array(normalized))
    }

    /// Validate a standalone list with default options.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn validate(&self, value: &Value) -> ValidationResult<Value> {
        self.apply(value, &FieldPath::root(), &ValidationOptions::default())
    }
}
