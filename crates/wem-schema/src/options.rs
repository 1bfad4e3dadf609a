//! # Validation Options
//!
//! The few knobs a caller can turn. Options are plain values: they are
//! passed to [`ManifestValidator::with_options`](crate::ManifestValidator::with_options)
//! and threaded down through every schema by reference. They can be
//! embedded in a host tool's own configuration file via serde.

use serde::{Deserialize, Serialize};

/// What to do with record keys a schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownFieldPolicy {
    /// Fail with `UnknownField`.
    #[default]
    Reject,
    /// Drop the key from the normalized output.
    Strip,
}

/// Settings for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationOptions {
    /// Handling of undeclared record keys.
    pub unknown_fields: UnknownFieldPolicy,
}

impl ValidationOptions {
    /// Options that reject undeclared keys. Same as `default()`.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Options that silently drop undeclared keys.
    pub fn lenient() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Strip,
        }
    }

    /// Replace the unknown-field policy.
    pub fn with_unknown_fields(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_fields = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_rejects_unknown_fields() {
        assert_eq!(
            ValidationOptions::default().unknown_fields,
            UnknownFieldPolicy::Reject
        );
        assert_eq!(ValidationOptions::strict(), ValidationOptions::default());
    }

    #[test]
    fn lenient_strips() {
        assert_eq!(
            ValidationOptions::lenient().unknown_fields,
            UnknownFieldPolicy::Strip
        );
    }

    #[test]
    fn builder_overrides_policy() {
        let options = ValidationOptions::default().with_unknown_fields(UnknownFieldPolicy::Strip);
        assert_eq!(options, ValidationOptions::lenient());
    }

    #[test]
    fn deserializes_from_config_fragment() {
        let options: ValidationOptions =
            serde_json::from_value(json!({"unknownFields": "strip"})).unwrap();
        assert_eq!(options, ValidationOptions::lenient());

        let empty: ValidationOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, ValidationOptions::default());
    }

    #[test]
    fn serializes_policy_in_kebab_case() {
        let json = serde_json::to_value(ValidationOptions::default()).unwrap();
        assert_eq!(json, json!({"unknownFields": "reject"}));
    }
}
