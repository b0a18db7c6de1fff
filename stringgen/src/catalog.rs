//! Model of an Xcode String Catalog (`.xcstrings`) as far as code generation needs it.
//!
//! Only `strings` is structurally required. Everything below an entry's
//! `localizations` is optional so that partially translated catalogs still load;
//! a record without `stringUnit.value` reads as the empty string.

use std::io::BufRead;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{error::Error, traits::Parser};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub source_language: Option<String>,
    /// Keyed by string identifier, in document order.
    pub strings: IndexMap<String, Item>,
}

impl Parser for Catalog {
    /// Parses the xcstrings format from a reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }
}

impl Catalog {
    /// Iterates entries that carry at least one localization, in document order.
    pub fn localized_items(&self) -> impl Iterator<Item = (&str, &Item)> {
        self.strings
            .iter()
            .filter(|(_, item)| item.is_localized())
            .map(|(key, item)| (key.as_str(), item))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// `None` when the key is absent or `null`.
    #[serde(default)]
    pub localizations: Option<IndexMap<String, Localization>>,
}

impl Item {
    pub fn is_localized(&self) -> bool {
        self.localizations
            .as_ref()
            .is_some_and(|localizations| !localizations.is_empty())
    }

    /// `(locale, value)` pairs in document order, with missing values read as `""`.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.localizations
            .iter()
            .flatten()
            .map(|(locale, localization)| (locale.as_str(), localization.value()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Localization {
    #[serde(default)]
    pub string_unit: Option<StringUnit>,
}

impl Localization {
    pub fn value(&self) -> &str {
        self.string_unit
            .as_ref()
            .and_then(|unit| unit.value.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StringUnit {
    #[serde(default)]
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_key_order() {
        let json = r#"{
            "sourceLanguage": "en",
            "version": "1.0",
            "strings": {
                "zeta": { "localizations": { "en": { "stringUnit": { "state": "translated", "value": "Z" } } } },
                "alpha": { "localizations": { "en": { "stringUnit": { "value": "A" } } } },
                "mid": {}
            }
        }"#;
        let catalog = Catalog::from_str(json).unwrap();
        let keys: Vec<&str> = catalog.strings.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(catalog.source_language.as_deref(), Some("en"));
    }

    #[test]
    fn test_localized_items_skips_empty_and_absent() {
        let json = r#"{"strings": {
            "a": { "localizations": {} },
            "b": { "comment": "no localizations at all" },
            "c": { "localizations": { "en": { "stringUnit": { "value": "C" } } } }
        }}"#;
        let catalog = Catalog::from_str(json).unwrap();
        let keys: Vec<&str> = catalog.localized_items().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["c"]);
    }

    #[test]
    fn test_null_localizations_are_skipped() {
        let json = r#"{"strings": {
            "a": { "localizations": null },
            "b": { "localizations": { "en": { "stringUnit": { "value": "B" } } } }
        }}"#;
        let catalog = Catalog::from_str(json).unwrap();
        assert!(!catalog.strings["a"].is_localized());
        assert_eq!(catalog.strings["a"].values().count(), 0);
        let keys: Vec<&str> = catalog.localized_items().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["b"]);
    }

    #[test]
    fn test_missing_leaf_values_default_to_empty() {
        let json = r#"{"strings": { "k": { "localizations": {
            "en": {},
            "fr": { "stringUnit": {} },
            "de": { "variations": { "plural": { "one": { "stringUnit": { "value": "x" } } } } },
            "es": { "stringUnit": { "value": "Hola" } }
        }}}}"#;
        let catalog = Catalog::from_str(json).unwrap();
        let values: Vec<(&str, &str)> = catalog.strings["k"].values().collect();
        assert_eq!(
            values,
            vec![("en", ""), ("fr", ""), ("de", ""), ("es", "Hola")]
        );
    }

    #[test]
    fn test_missing_strings_is_an_error() {
        let err = Catalog::from_str(r#"{"sourceLanguage": "en"}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_wrong_entry_shape_is_an_error() {
        let err = Catalog::from_str(r#"{"strings": {"k": "not an object"}}"#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_from_bytes() {
        let catalog = Catalog::from_bytes(br#"{"strings": {}}"#).unwrap();
        assert!(catalog.strings.is_empty());
    }
}
