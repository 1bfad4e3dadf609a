//! # Type Registry — Single Source of Truth
//!
//! Defines the [`TypeTag`] enum with the five value types a manifest may
//! declare for an attribute or property, and the [`ShapeRule`] each tag
//! maps to: a runtime-shape predicate and the zero value substituted when
//! a default is omitted.
//!
//! | tag | shape | zero value |
//! |---|---|---|
//! | `String` | JSON string | `""` |
//! | `Boolean` | JSON boolean | `false` |
//! | `Number` | JSON number | `0` |
//! | `Array` | JSON array | `[]` |
//! | `Object` | JSON object | `{}` |
//!
//! The tag-to-rule mapping is a static table indexed by an exhaustive
//! `match`. Adding a tag without a rule does not compile.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::path::FieldPath;

/// Number of type tags.
pub const TYPE_TAG_COUNT: usize = 5;

/// Declared value type of an attribute or property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    /// Text.
    String,
    /// `true` or `false`.
    Boolean,
    /// Any JSON number.
    Number,
    /// Ordered sequence.
    Array,
    /// Key-value map.
    Object,
}

/// Shape predicate and zero value for one [`TypeTag`].
#[derive(Debug, Clone, Copy)]
pub struct ShapeRule {
    expected: &'static str,
    check: fn(&Value) -> bool,
    zero: fn() -> Value,
}

impl ShapeRule {
    /// Build a rule from its parts.
    pub const fn new(
        expected: &'static str,
        check: fn(&Value) -> bool,
        zero: fn() -> Value,
    ) -> Self {
        Self {
            expected,
            check,
            zero,
        }
    }

    /// Name of the expected shape, used in mismatch messages.
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Returns true if `value` has this rule's shape.
    pub fn accepts(&self, value: &Value) -> bool {
        (self.check)(value)
    }

    /// A fresh copy of the zero value.
    pub fn zero_value(&self) -> Value {
        (self.zero)()
    }
}

fn zero_string() -> Value {
    Value::String(String::new())
}

fn zero_boolean() -> Value {
    Value::Bool(false)
}

fn zero_number() -> Value {
    Value::from(0)
}

fn zero_array() -> Value {
    Value::Array(Vec::new())
}

fn zero_object() -> Value {
    Value::Object(Map::new())
}

/// Every tag with its rule, in declaration order.
pub static TYPE_TABLE: [(TypeTag, ShapeRule); TYPE_TAG_COUNT] = [
    (TypeTag::String, ShapeRule::new("String", Value::is_string, zero_string)),
    (TypeTag::Boolean, ShapeRule::new("Boolean", Value::is_boolean, zero_boolean)),
    (TypeTag::Number, ShapeRule::new("Number", Value::is_number, zero_number)),
    (TypeTag::Array, ShapeRule::new("Array", Value::is_array, zero_array)),
    (TypeTag::Object, ShapeRule::new("Object", Value::is_object, zero_object)),
];

impl TypeTag {
    /// Returns all tags in declaration order.
    pub fn all() -> &'static [TypeTag] {
        &[
            Self::String,
            Self::Boolean,
            Self::Number,
            Self::Array,
            Self::Object,
        ]
    }

    const fn index(self) -> usize {
        match self {
            Self::String => 0,
            Self::Boolean => 1,
            Self::Number => 2,
            Self::Array => 3,
            Self::Object => 4,
        }
    }

    /// The tag as written in a manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::Array => "Array",
            Self::Object => "Object",
        }
    }

    /// Shape predicate and zero value for this tag.
    pub fn rule(self) -> &'static ShapeRule {
        &TYPE_TABLE[self.index()].1
    }

    /// Look up a tag by its manifest spelling. Case-sensitive.
    pub fn lookup(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|tag| tag.as_str() == s)
    }

    /// Read a tag out of a raw value. Only strings can be tags.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(Self::lookup)
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| {
            ValidationError::unknown_type(
                &FieldPath::root(),
                Some(&Value::String(s.to_string())),
                Self::all().iter().map(Self::as_str),
            )
        })
    }
}

/// Lowercase name of a value's runtime shape, for error messages.
pub fn describe_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn samples() -> Vec<Value> {
        vec![
            json!("text"),
            json!(true),
            json!(4),
            json!(2.5),
            json!([1, 2]),
            json!({"a": 1}),
            Value::Null,
        ]
    }

    #[test]
    fn table_is_indexed_by_tag() {
        for tag in TypeTag::all() {
            assert_eq!(TYPE_TABLE[tag.index()].0, *tag);
            assert_eq!(tag.rule().expected(), tag.as_str());
        }
        assert_eq!(TypeTag::all().len(), TYPE_TAG_COUNT);
    }

    #[test]
    fn lookup_accepts_exactly_the_five_tags() {
        for tag in ["String", "Boolean", "Number", "Array", "Object"] {
            let parsed = TypeTag::lookup(tag).unwrap_or_else(|| panic!("{tag} rejected"));
            assert_eq!(parsed.as_str(), tag);
        }
        for bad in ["Hotdog", "string", "", "Moose", "Turtle", "Function"] {
            assert!(TypeTag::lookup(bad).is_none(), "{bad} accepted");
        }
    }

    #[test]
    fn from_str_error_is_unknown_type() {
        let err = "Hotdog".parse::<TypeTag>().unwrap_err();
        assert!(matches!(
            err.kind(),
            crate::ValidationErrorKind::UnknownType { .. }
        ));
    }

    #[test]
    fn from_value_requires_string() {
        assert_eq!(TypeTag::from_value(&json!("Number")), Some(TypeTag::Number));
        assert_eq!(TypeTag::from_value(&json!(true)), None);
        assert_eq!(TypeTag::from_value(&Value::Null), None);
    }

    #[test]
    fn zero_values() {
        assert_eq!(TypeTag::String.rule().zero_value(), json!(""));
        assert_eq!(TypeTag::Boolean.rule().zero_value(), json!(false));
        assert_eq!(TypeTag::Number.rule().zero_value(), json!(0));
        assert_eq!(TypeTag::Array.rule().zero_value(), json!([]));
        assert_eq!(TypeTag::Object.rule().zero_value(), json!({}));
    }

    #[test]
    fn zero_value_satisfies_own_rule() {
        for tag in TypeTag::all() {
            let rule = tag.rule();
            assert!(rule.accepts(&rule.zero_value()), "{tag} zero value rejected");
        }
    }

    #[test]
    fn each_sample_matches_exactly_one_tag_or_none() {
        for value in samples() {
            let accepted: Vec<_> = TypeTag::all()
                .iter()
                .filter(|tag| tag.rule().accepts(&value))
                .collect();
            if value.is_null() {
                assert!(accepted.is_empty());
            } else {
                assert_eq!(accepted.len(), 1, "{value} matched {accepted:?}");
            }
        }
    }

    #[test]
    fn serde_format_matches_as_str() {
        for tag in TypeTag::all() {
            let json = serde_json::to_string(tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
    }

    #[test]
    fn describe_shape_names() {
        assert_eq!(describe_shape(&json!(false)), "boolean");
        assert_eq!(describe_shape(&json!("x")), "string");
        assert_eq!(describe_shape(&json!({})), "object");
    }
}
