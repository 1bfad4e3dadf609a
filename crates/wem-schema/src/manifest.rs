//! # Typed Manifest Model
//!
//! The result of a successful validation. A [`Manifest`] can only be built
//! by running the validator, so holding one proves every invariant the
//! schemas enforce: known type tags, default values shaped like their tag,
//! conforming names, and `attribute`/`changeEvent` that are never `true`.
//!
//! ## Serialization
//!
//! Serializing a `Manifest` produces exactly the normalized record: same
//! keys, same key order. Deserializing one runs the full validator, so a
//! `Manifest` read back from JSON is held to the same invariants as one
//! produced by [`validate`](crate::validate).

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use wem_core::{TypeTag, ValidationError, ValidationResult};

/// A `defaultValue`, shaped according to its sibling `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Default of a `Boolean` field.
    Boolean(bool),
    /// Default of a `Number` field, integer or float.
    Number(Number),
    /// Default of a `String` field.
    String(String),
    /// Default of an `Array` field.
    List(Vec<Value>),
    /// Default of an `Object` field.
    Map(Map<String, Value>),
}

impl DefaultValue {
    /// The type tag this value satisfies.
    pub fn tag(&self) -> TypeTag {
        match self {
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Number(_) => TypeTag::Number,
            Self::String(_) => TypeTag::String,
            Self::List(_) => TypeTag::Array,
            Self::Map(_) => TypeTag::Object,
        }
    }

    /// The value as plain JSON.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Boolean(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.clone()),
            Self::Map(map) => Value::Object(map.clone()),
        }
    }
}

/// `false` or a name, as written in a manifest.
#[derive(Deserialize)]
#[serde(untagged)]
enum FalseOrName {
    Flag(bool),
    Name(String),
}

/// Implements the `false`-or-name wire form for a two-variant enum.
macro_rules! false_or_name {
    ($ty:ident, $field:literal) => {
        impl $ty {
            /// The name, or `None` when written as `false`.
            pub fn name(&self) -> Option<&str> {
                match self {
                    Self::None => None,
                    Self::Name(name) => Some(name),
                }
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    Self::None => serializer.serialize_bool(false),
                    Self::Name(name) => serializer.serialize_str(name),
                }
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                match FalseOrName::deserialize(deserializer)? {
                    FalseOrName::Flag(false) => Ok(Self::None),
                    FalseOrName::Flag(true) => Err(de::Error::custom(concat!(
                        $field,
                        " may be false or a name, not true"
                    ))),
                    FalseOrName::Name(name) => Ok(Self::Name(name)),
                }
            }
        }
    };
}

/// The attribute a property is bound to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttributeBinding {
    /// Written as `false`.
    #[default]
    None,
    /// A kebab-case attribute name.
    Name(String),
}

false_or_name!(AttributeBinding, "attribute");

/// The event a property fires when it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChangeEvent {
    /// Written as `false`.
    #[default]
    None,
    /// A non-empty event name.
    Name(String),
}

false_or_name!(ChangeEvent, "changeEvent");

/// A declared HTML attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Kebab-case attribute name.
    pub name: String,
    /// Declared value type, serialized as `type`.
    #[serde(rename = "type")]
    pub value_type: TypeTag,
    /// Free text, `""` when not given.
    pub description: String,
    /// Initial value, shaped according to `value_type`.
    pub default_value: DefaultValue,
}

/// A declared JavaScript property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// CamelCase property name.
    pub name: String,
    /// Free text, `""` when not given.
    pub description: String,
    /// Declared value type, serialized as `type`.
    #[serde(rename = "type")]
    pub value_type: TypeTag,
    /// Initial value, shaped according to `value_type`.
    pub default_value: DefaultValue,
    /// Attribute the property is bound to.
    pub attribute: AttributeBinding,
    /// Whether property changes are written back to the attribute.
    pub reflect: bool,
    /// Whether this is the element's main value.
    pub primary: bool,
    /// Event fired when the property changes.
    pub change_event: ChangeEvent,
}

/// An event, slot, or CSS part: a name and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedDescribable {
    /// Non-empty name.
    pub name: String,
    /// Free text, `""` when not given.
    pub description: String,
}

/// A CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssProperty {
    /// Name of the form `--segment(-segment)*`.
    pub name: String,
    /// Free text, `""` when not given.
    pub description: String,
    /// CSS value used when the property is not set, `""` when not given.
    pub default_value: String,
}

/// A validated, normalized element manifest.
///
/// Construct with [`validate`](crate::validate) or
/// [`ManifestValidator`](crate::ManifestValidator). Fields are read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct Manifest {
    name: String,
    description: String,
    attributes: Vec<Attribute>,
    properties: Vec<Property>,
    events: Vec<NamedDescribable>,
    slots: Vec<NamedDescribable>,
    css_properties: Vec<CssProperty>,
    css_parts: Vec<NamedDescribable>,
}

/// Same shape as [`Manifest`], decoded from an already-normalized record.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct NormalizedRecord {
    name: String,
    description: String,
    attributes: Vec<Attribute>,
    properties: Vec<Property>,
    events: Vec<NamedDescribable>,
    slots: Vec<NamedDescribable>,
    css_properties: Vec<CssProperty>,
    css_parts: Vec<NamedDescribable>,
}

impl Manifest {
    /// Decode the output of the element schema.
    ///
    /// # Errors
    ///
    /// `Model` if the record does not have the normalized shape. The
    /// validator never produces such a record.
    pub(crate) fn from_normalized(record: Value) -> ValidationResult<Self> {
        let r: NormalizedRecord = serde_json::from_value(record)
            .map_err(|e| ValidationError::model(e.to_string()))?;
        Ok(Self {
            name: r.name,
            description: r.description,
            attributes: r.attributes,
            properties: r.properties,
            events: r.events,
            slots: r.slots,
            css_properties: r.css_properties,
            css_parts: r.css_parts,
        })
    }

    /// Tag name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description of the element.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attributes in declared order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Properties in declared order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Events in declared order.
    pub fn events(&self) -> &[NamedDescribable] {
        &self.events
    }

    /// Slots in declared order.
    pub fn slots(&self) -> &[NamedDescribable] {
        &self.slots
    }

    /// CSS custom properties in declared order.
    pub fn css_properties(&self) -> &[CssProperty] {
        &self.css_properties
    }

    /// CSS parts in declared order.
    pub fn css_parts(&self) -> &[NamedDescribable] {
        &self.css_parts
    }

    /// The first attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// The first property called `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// The first property flagged `primary`, if any.
    pub fn primary_property(&self) -> Option<&Property> {
        self.properties.iter().find(|p| p.primary)
    }

    /// Properties whose value is reflected back to their attribute.
    pub fn reflected_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.reflect)
    }

    /// The normalized record this manifest was built from.
    ///
    /// # Errors
    ///
    /// `Model` if the manifest fails to serialize.
    pub fn to_value(&self) -> ValidationResult<Value> {
        serde_json::to_value(self).map_err(|e| ValidationError::model(e.to_string()))
    }
}

impl TryFrom<Value> for Manifest {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        crate::validate(&raw)
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}> ({} attributes, {} properties, {} events, {} slots)",
            self.name,
            self.attributes.len(),
            self.properties.len(),
            self.events.len(),
            self.slots.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Manifest {
        crate::validate(&json!({
            "name": "my-slider",
            "attributes": [
                {"name": "value", "type": "Number", "defaultValue": 5},
                {"name": "disabled", "type": "Boolean"}
            ],
            "properties": [
                {
                    "name": "value", "type": "Number", "attribute": "value",
                    "reflect": true, "primary": true, "changeEvent": "valueChange"
                },
                {"name": "step", "type": "Number"},
                {"name": "disabled", "type": "Boolean", "attribute": "disabled", "reflect": true}
            ],
            "events": [{"name": "valueChange"}]
        }))
        .unwrap()
    }

    #[test]
    fn accessors() {
        let manifest = sample();
        assert_eq!(manifest.name(), "my-slider");
        assert_eq!(manifest.description(), "");
        assert_eq!(manifest.attributes().len(), 2);
        assert_eq!(manifest.properties().len(), 3);
        assert_eq!(manifest.events()[0].name, "valueChange");
        assert!(manifest.slots().is_empty());
        assert!(manifest.css_properties().is_empty());
        assert!(manifest.css_parts().is_empty());
    }

    #[test]
    fn lookups() {
        let manifest = sample();
        let value = manifest.attribute("value").unwrap();
        assert_eq!(value.value_type, TypeTag::Number);
        assert_eq!(value.default_value, DefaultValue::Number(Number::from(5u64)));
        assert!(manifest.attribute("missing").is_none());

        let step = manifest.property("step").unwrap();
        assert_eq!(step.default_value, DefaultValue::Number(Number::from(0u64)));
        assert_eq!(step.attribute, AttributeBinding::None);
        assert_eq!(step.change_event, ChangeEvent::None);

        let primary = manifest.primary_property().unwrap();
        assert_eq!(primary.name, "value");
        assert_eq!(primary.attribute.name(), Some("value"));
        assert_eq!(primary.change_event.name(), Some("valueChange"));

        let reflected: Vec<&str> = manifest
            .reflected_properties()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(reflected, ["value", "disabled"]);
    }

    #[test]
    fn default_value_tags_follow_variants() {
        for tag in TypeTag::all() {
            let zero: DefaultValue = serde_json::from_value(tag.rule().zero_value()).unwrap();
            assert_eq!(zero.tag(), *tag);
            assert_eq!(zero.to_value(), tag.rule().zero_value());
        }
    }

    #[test]
    fn false_or_name_serializes_as_false() {
        assert_eq!(serde_json::to_value(AttributeBinding::None).unwrap(), json!(false));
        assert_eq!(
            serde_json::to_value(ChangeEvent::Name("input".into())).unwrap(),
            json!("input")
        );
        assert!(serde_json::from_value::<ChangeEvent>(json!(true)).is_err());
        assert!(serde_json::from_value::<AttributeBinding>(json!(true)).is_err());
        assert_eq!(
            serde_json::from_value::<AttributeBinding>(json!(false)).unwrap(),
            AttributeBinding::None
        );
    }

    #[test]
    fn serializes_to_normalized_record() {
        let manifest = sample();
        let value = manifest.to_value().unwrap();
        assert_eq!(value, serde_json::to_value(&manifest).unwrap());
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            [
                "name",
                "description",
                "attributes",
                "properties",
                "events",
                "slots",
                "cssProperties",
                "cssParts"
            ]
        );
        assert_eq!(value, crate::validate_value(&value).unwrap());
    }

    #[test]
    fn deserializing_runs_the_validator() {
        let manifest: Manifest = serde_json::from_value(json!({"name": "x-box"})).unwrap();
        assert_eq!(manifest.name(), "x-box");

        let err = serde_json::from_value::<Manifest>(json!({"name": "XBox"})).unwrap_err();
        assert!(err.to_string().contains("\"XBox\" is not a valid name"));
    }

    #[test]
    fn model_error_for_foreign_shape() {
        let err = Manifest::from_normalized(json!({"name": "x"})).unwrap_err();
        assert!(matches!(err.kind(), wem_core::ValidationErrorKind::Model { .. }));
    }

    #[test]
    fn display_summarizes() {
        assert_eq!(
            sample().to_string(),
            "<my-slider> (2 attributes, 3 properties, 1 events, 0 slots)"
        );
    }
}
