//! # Conditional Resolution
//!
//! A discriminated-union validator: the value of one field of a record
//! (the *discriminant*) selects the [`ShapeRule`] applied to a sibling
//! field (the *dependent*). In a manifest the discriminant is `type` and
//! the dependent is `defaultValue`, but the resolver is parameterized over
//! both field names and over the tag→rule table, so any other
//! discriminated pair reuses it unchanged.
//!
//! ## Algorithm
//!
//! 1. Look the discriminant up in the table. Absent or unknown → fail
//!    `UnknownType` at the discriminant's path. The dependent field is not
//!    looked at.
//! 2. Dependent absent → the selected rule's zero value.
//! 3. Dependent present → keep it if the rule accepts it, otherwise fail
//!    `TypeMismatch` at the dependent's path.

use std::fmt;

use serde_json::{Map, Value};

use wem_core::{FieldPath, ShapeRule, TypeTag, ValidationError, ValidationResult, TYPE_TABLE};

/// A closed set of tags usable as a discriminant.
pub trait Discriminant: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// The tag as it is spelled in a raw record.
    fn as_str(self) -> &'static str;
}

impl Discriminant for TypeTag {
    fn as_str(self) -> &'static str {
        TypeTag::as_str(&self)
    }
}

/// A discriminated field pair as seen by a record schema: the discriminant
/// is checked against a closed tag set and the dependent value is resolved
/// from it. Object safe, so schemas can hold resolvers over any tag type.
pub trait DependentRule: fmt::Debug + Send + Sync {
    /// Name of the field whose value selects the rule.
    fn discriminant(&self) -> &'static str;

    /// Name of the field the selected rule applies to.
    fn dependent(&self) -> &'static str;

    /// Check a present discriminant value on its own.
    ///
    /// # Errors
    ///
    /// `UnknownType` at `path` when `value` is not one of the known tags.
    fn check_tag(&self, value: &Value, path: &FieldPath) -> ValidationResult<()>;

    /// Validate or default the dependent field of `record`, whose own path
    /// is `path`.
    ///
    /// # Errors
    ///
    /// `UnknownType` for a bad discriminant, `TypeMismatch` for a dependent
    /// value of the wrong shape.
    fn resolve(&self, record: &Map<String, Value>, path: &FieldPath) -> ValidationResult<Value>;
}

/// Selects and applies a [`ShapeRule`] to a dependent field based on a
/// discriminant field of the same record.
#[derive(Debug)]
pub struct ConditionalResolver<D: 'static> {
    discriminant: &'static str,
    dependent: &'static str,
    table: &'static [(D, ShapeRule)],
}

/// `defaultValue` typed by its sibling `type`.
pub static DEFAULT_VALUE: ConditionalResolver<TypeTag> =
    ConditionalResolver::new("type", "defaultValue", &TYPE_TABLE);

impl<D: Discriminant> ConditionalResolver<D> {
    /// Build a resolver over `table`.
    pub const fn new(
        discriminant: &'static str,
        dependent: &'static str,
        table: &'static [(D, ShapeRule)],
    ) -> Self {
        Self {
            discriminant,
            dependent,
            table,
        }
    }

    /// Name of the field whose value selects the rule.
    pub const fn discriminant(&self) -> &'static str {
        self.discriminant
    }

    /// Name of the field the selected rule applies to.
    pub const fn dependent(&self) -> &'static str {
        self.dependent
    }

    fn lookup(&self, raw: Option<&Value>) -> Option<&'static (D, ShapeRule)> {
        let table = self.table;
        let tag = raw.and_then(Value::as_str)?;
        table.iter().find(|(candidate, _)| candidate.as_str() == tag)
    }

    fn unknown(&self, path: &FieldPath, raw: Option<&Value>) -> ValidationError {
        ValidationError::unknown_type(path, raw, self.table.iter().map(|(tag, _)| tag.as_str()))
    }

    /// Pick the table entry named by the record's discriminant.
    ///
    /// # Errors
    ///
    /// `UnknownType` at `<path>.<discriminant>` when the discriminant is
    /// absent, not a string, or not in the table.
    pub fn select(
        &self,
        record: &Map<String, Value>,
        path: &FieldPath,
    ) -> ValidationResult<(D, &'static ShapeRule)> {
        let raw = record.get(self.discriminant);
        match self.lookup(raw) {
            Some((tag, rule)) => Ok((*tag, rule)),
            None => Err(self.unknown(&path.field(self.discriminant), raw)),
        }
    }

    /// Validate the dependent field of `record`, or produce its default.
    ///
    /// `path` is the path of the record itself.
    ///
    /// # Errors
    ///
    /// `UnknownType` from [`select`](Self::select), or `TypeMismatch` at
    /// `<path>.<dependent>` when the dependent value has the wrong shape.
    pub fn resolve(
        &self,
        record: &Map<String, Value>,
        path: &FieldPath,
    ) -> ValidationResult<Value> {
        let (tag, rule) = self.select(record, path)?;

        match record.get(self.dependent) {
            None => Ok(rule.zero_value()),
            Some(value) if rule.accepts(value) => Ok(value.clone()),
            Some(value) => Err(ValidationError::type_mismatch(
                &path.field(self.dependent),
                tag.as_str(),
                value,
            )),
        }
    }
}

impl<D: Discriminant> DependentRule for ConditionalResolver<D> {
    fn discriminant(&self) -> &'static str {
        self.discriminant
    }

    fn dependent(&self) -> &'static str {
        self.dependent
    }

    fn check_tag(&self, value: &Value, path: &FieldPath) -> ValidationResult<()> {
        match self.lookup(Some(value)) {
            Some(_) => Ok(()),
            None => Err(self.unknown(path, Some(value))),
        }
    }

    fn resolve(&self, record: &Map<String, Value>, path: &FieldPath) -> ValidationResult<Value> {
        ConditionalResolver::resolve(self, record, path)
    }
}
