//! # Manifest Section Schemas
//!
//! The concrete schemas of an element manifest, one per section, plus the
//! top-level [`ELEMENT`] schema that composes them. Each is a `static`
//! and can be used on its own to validate a single section.
//!
//! | schema | element fields (in evaluation order) |
//! |---|---|
//! | [`ATTRIBUTES`] | `name`\* kebab-case, `type`\*, `description`, `defaultValue` |
//! | [`PROPERTIES`] | `name`\* camelCase, `description`, `type`\*, `defaultValue`, `attribute`, `reflect`, `primary`, `changeEvent` |
//! | [`NAMED_DESCRIBABLES`] | `name`\* non-empty, `description` |
//! | [`CSS_PROPERTIES`] | `name`\* CSS custom property, `description`, `defaultValue` |
//!
//! \* required

use serde_json::Value;

use wem_core::NamePattern;

use crate::composer::{FieldRule, FieldSpec, ListSchema, RecordSchema};
use crate::conditional::DEFAULT_VALUE;

fn empty_string() -> Value {
    Value::String(String::new())
}

fn no() -> Value {
    Value::Bool(false)
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

static KEBAB_CASE_NAME: FieldRule = FieldRule::Pattern(NamePattern::KebabCase);
static NON_EMPTY_NAME: FieldRule = FieldRule::Pattern(NamePattern::NonEmpty);

static ATTRIBUTE_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("name", FieldRule::Pattern(NamePattern::KebabCase)),
    FieldSpec::required("type", FieldRule::Tag(&DEFAULT_VALUE)),
    FieldSpec::optional("description", FieldRule::String, empty_string),
    FieldSpec::dependent(&DEFAULT_VALUE),
];

static PROPERTY_FIELDS: [FieldSpec; 8] = [
    FieldSpec::required("name", FieldRule::Pattern(NamePattern::CamelCase)),
    FieldSpec::optional("description", FieldRule::String, empty_string),
    FieldSpec::required("type", FieldRule::Tag(&DEFAULT_VALUE)),
    FieldSpec::dependent(&DEFAULT_VALUE),
    FieldSpec::optional("attribute", FieldRule::FalseOr(&KEBAB_CASE_NAME), no),
    FieldSpec::optional("reflect", FieldRule::Boolean, no),
    FieldSpec::optional("primary", FieldRule::Boolean, no),
    FieldSpec::optional("changeEvent", FieldRule::FalseOr(&NON_EMPTY_NAME), no),
];

static NAMED_DESCRIBABLE_FIELDS: [FieldSpec; 2] = [
    FieldSpec::required("name", FieldRule::Pattern(NamePattern::NonEmpty)),
    FieldSpec::optional("description", FieldRule::String, empty_string),
];

static CSS_PROPERTY_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("name", FieldRule::Pattern(NamePattern::CssPropertyName)),
    FieldSpec::optional("description", FieldRule::String, empty_string),
    FieldSpec::optional("defaultValue", FieldRule::String, empty_string),
];

/// One attribute.
pub static ATTRIBUTE: RecordSchema = RecordSchema::new("attribute", &ATTRIBUTE_FIELDS);
/// One property.
pub static PROPERTY: RecordSchema = RecordSchema::new("property", &PROPERTY_FIELDS);
/// One event, slot, or CSS part.
pub static NAMED_DESCRIBABLE: RecordSchema =
    RecordSchema::new("namedDescribable", &NAMED_DESCRIBABLE_FIELDS);
/// One CSS custom property.
pub static CSS_PROPERTY: RecordSchema = RecordSchema::new("cssProperty", &CSS_PROPERTY_FIELDS);

/// The `attributes` section.
pub static ATTRIBUTES: ListSchema = ListSchema::new(&ATTRIBUTE);
/// The `properties` section.
pub static PROPERTIES: ListSchema = ListSchema::new(&PROPERTY);
/// The `events`, `slots` and `cssParts` sections.
pub static NAMED_DESCRIBABLES: ListSchema = ListSchema::new(&NAMED_DESCRIBABLE);
/// The `cssProperties` section.
pub static CSS_PROPERTIES: ListSchema = ListSchema::new(&CSS_PROPERTY);

static ELEMENT_FIELDS: [FieldSpec; 8] = [
    FieldSpec::required("name", FieldRule::Pattern(NamePattern::KebabCase)),
    FieldSpec::optional("description", FieldRule::String, empty_string),
    FieldSpec::optional("attributes", FieldRule::ListOf(&ATTRIBUTES), empty_list),
    FieldSpec::optional("properties", FieldRule::ListOf(&PROPERTIES), empty_list),
    FieldSpec::optional("events", FieldRule::ListOf(&NAMED_DESCRIBABLES), empty_list),
    FieldSpec::optional("slots", FieldRule::ListOf(&NAMED_DESCRIBABLES), empty_list),
    FieldSpec::optional("cssProperties", FieldRule::ListOf(&CSS_PROPERTIES), empty_list),
    FieldSpec::optional("cssParts", FieldRule::ListOf(&NAMED_DESCRIBABLES), empty_list),
];

/// A whole element manifest.
pub static ELEMENT: RecordSchema = RecordSchema::new("element", &ELEMENT_FIELDS);
