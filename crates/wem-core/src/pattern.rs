//! # Naming-Convention Patterns
//!
//! Pure string predicates for the naming conventions a manifest enforces:
//!
//! | pattern | used for | regex |
//! |---|---|---|
//! | [`NamePattern::KebabCase`] | element, attribute names | `^([a-z][a-z0-9]*)(-[a-z0-9]+)*$` |
//! | [`NamePattern::CamelCase`] | property names | `^[a-z]+(([0-9])\|([A-Z0-9][a-z0-9]+))*([A-Z])?$` |
//! | [`NamePattern::CssPropertyName`] | CSS custom properties | `^--[a-z]+(-[a-z]+)*$` |
//! | [`NamePattern::NonEmpty`] | event, slot, part names | `(?s)^.+$` |
//!
//! Each regex is compiled once, on first use, and shared by every caller.

use once_cell::sync::Lazy;
use regex::Regex;

const KEBAB_CASE: &str = "^([a-z][a-z0-9]*)(-[a-z0-9]+)*$";
const CAMEL_CASE: &str = "^[a-z]+(([0-9])|([A-Z0-9][a-z0-9]+))*([A-Z])?$";
const CSS_PROPERTY_NAME: &str = "^--[a-z]+(-[a-z]+)*$";
const NON_EMPTY: &str = "(?s)^.+$";

// The sources above are fixed literals; `None` would only appear if one of
// them stopped compiling, and then nothing matches.
static KEBAB_CASE_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(KEBAB_CASE).ok());
static CAMEL_CASE_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(CAMEL_CASE).ok());
static CSS_PROPERTY_NAME_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(CSS_PROPERTY_NAME).ok());
static NON_EMPTY_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(NON_EMPTY).ok());

/// A naming convention a string field must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamePattern {
    /// Lowercase words joined by single hyphens: `my-element`.
    KebabCase,
    /// Lowercase first word, later words capitalised: `changeEvent`.
    CamelCase,
    /// Double-hyphen prefix, lowercase letter segments: `--button-color`.
    CssPropertyName,
    /// Any string with at least one character.
    NonEmpty,
}

impl NamePattern {
    /// Returns all patterns.
    pub fn all() -> &'static [NamePattern] {
        &[
            Self::KebabCase,
            Self::CamelCase,
            Self::CssPropertyName,
            Self::NonEmpty,
        ]
    }

    /// Source of the regular expression behind this pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KebabCase => KEBAB_CASE,
            Self::CamelCase => CAMEL_CASE,
            Self::CssPropertyName => CSS_PROPERTY_NAME,
            Self::NonEmpty => NON_EMPTY,
        }
    }

    /// Short human name of the convention.
    pub fn name(&self) -> &'static str {
        match self {
            Self::KebabCase => "kebab-case",
            Self::CamelCase => "camelCase",
            Self::CssPropertyName => "CSS custom property name",
            Self::NonEmpty => "non-empty string",
        }
    }

    fn regex(&self) -> Option<&'static Regex> {
        let cell = match self {
            Self::KebabCase => &KEBAB_CASE_RE,
            Self::CamelCase => &CAMEL_CASE_RE,
            Self::CssPropertyName => &CSS_PROPERTY_NAME_RE,
            Self::NonEmpty => &NON_EMPTY_RE,
        };
        Lazy::force(cell).as_ref()
    }

    /// Returns true if `input` follows this convention.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(input))
    }
}

impl std::fmt::Display for NamePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns true if `input` follows `pattern`.
pub fn matches(pattern: NamePattern, input: &str) -> bool {
    pattern.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_patterns_compile() {
        for pattern in NamePattern::all() {
            assert!(
                Regex::new(pattern.as_str()).is_ok(),
                "pattern {pattern} failed to compile"
            );
            assert!(pattern.regex().is_some());
        }
    }

    #[test]
    fn kebab_case_accepts() {
        for s in ["a", "a-b", "kebab-case", "kebabcase", "ke-bab-case", "h2-title", "x-1"] {
            assert!(matches(NamePattern::KebabCase, s), "{s} should be kebab-case");
        }
    }

    #[test]
    fn kebab_case_rejects() {
        for s in [
            "",
            "camelCase",
            "Some-other-case",
            "snake_case",
            "double--hyphen",
            "trailing-",
            "-leading",
            "1st",
        ] {
            assert!(!matches(NamePattern::KebabCase, s), "{s} should not be kebab-case");
        }
    }

    #[test]
    fn camel_case_accepts() {
        for s in ["camelCase", "camelcase", "camElCase", "value2", "isOpenX"] {
            assert!(matches(NamePattern::CamelCase, s), "{s} should be camelCase");
        }
    }

    #[test]
    fn camel_case_rejects() {
        for s in ["", "kebab-case", "PascalCase", "snake_case", "2fast"] {
            assert!(!matches(NamePattern::CamelCase, s), "{s} should not be camelCase");
        }
    }

    #[test]
    fn css_property_name_accepts() {
        for s in ["--property", "--another-property", "--yet-another-property"] {
            assert!(matches(NamePattern::CssPropertyName, s), "{s} should be accepted");
        }
    }

    #[test]
    fn css_property_name_rejects() {
        for s in [
            "--",
            "---property",
            "--Property",
            "--another property",
            "--another--property",
            "--another-property3",
            "-property",
            "property",
        ] {
            assert!(!matches(NamePattern::CssPropertyName, s), "{s} should be rejected");
        }
    }

    #[test]
    fn non_empty_accepts_anything_but_empty() {
        assert!(matches(NamePattern::NonEmpty, "other name"));
        assert!(matches(NamePattern::NonEmpty, "line\nbreak"));
        assert!(!matches(NamePattern::NonEmpty, ""));
    }

    #[test]
    fn display_uses_convention_name() {
        assert_eq!(NamePattern::KebabCase.to_string(), "kebab-case");
        assert_eq!(NamePattern::CamelCase.to_string(), "camelCase");
    }

    proptest! {
        /// Generated kebab-case identifiers always match.
        #[test]
        fn generated_kebab_names_match(name in "[a-z][a-z0-9]{0,8}(-[a-z0-9]{1,8}){0,4}") {
            prop_assert!(matches(NamePattern::KebabCase, &name));
        }

        /// Anything with an uppercase letter is never kebab-case.
        #[test]
        fn uppercase_is_never_kebab(name in "[a-z]{0,4}[A-Z][a-zA-Z]{0,4}") {
            prop_assert!(!matches(NamePattern::KebabCase, &name));
        }

        /// Generated CSS custom property names always match.
        #[test]
        fn generated_css_names_match(name in "--[a-z]{1,8}(-[a-z]{1,8}){0,4}") {
            prop_assert!(matches(NamePattern::CssPropertyName, &name));
        }

        /// CSS custom property names never contain digits.
        #[test]
        fn css_names_with_digits_rejected(name in "--[a-z]{1,6}[0-9]{1,3}") {
            prop_assert!(!matches(NamePattern::CssPropertyName, &name));
        }
    }
}
