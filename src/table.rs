//! Static layered override table
//!
//! Three maps in specificity order plus the builtin defaults:
//! 1. Combined key (language + property) - highest specificity
//! 2. Property only
//! 3. Language only
//! 4. `DefaultAttributes` - always matches
//!
//! The table is baked-in data, initialized once per process via
//! [`OverrideTable::global`] and never mutated afterwards. Resolvers hold
//! a shared reference; no locking is needed after initialization.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::defaults::DefaultAttributes;
use crate::resolver::Attribute;

/// A partial attribute set contributed by one selector key.
///
/// An unset field means this layer has no opinion on that attribute and
/// resolution falls through to the next layer down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideLayer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl OverrideLayer {
    /// This layer's value for a single attribute, if it defines one.
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Provider => self.provider.as_deref(),
            Attribute::Color => self.color.as_deref(),
            Attribute::Parameter => self.parameter.as_deref(),
        }
    }
}

/// The layered override table plus defaults.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    combined: HashMap<(String, String), OverrideLayer>,
    properties: HashMap<String, OverrideLayer>,
    languages: HashMap<String, OverrideLayer>,
    defaults: DefaultAttributes,
}

impl OverrideTable {
    /// Empty table over the given defaults. Layers are added through the
    /// `with_*` builders; callers that want the builtin data use
    /// [`OverrideTable::builtin`] or [`OverrideTable::global`].
    pub fn new(defaults: DefaultAttributes) -> Self {
        Self {
            combined: HashMap::new(),
            properties: HashMap::new(),
            languages: HashMap::new(),
            defaults,
        }
    }

    /// Add a combined-key layer (language + property).
    pub fn with_combined(
        mut self,
        language: &str,
        property: &str,
        layer: OverrideLayer,
    ) -> Self {
        self.combined
            .insert((language.to_string(), property.to_string()), layer);
        self
    }

    /// Add a property-only layer.
    pub fn with_property(mut self, property: &str, layer: OverrideLayer) -> Self {
        self.properties.insert(property.to_string(), layer);
        self
    }

    /// Add a language-only layer.
    pub fn with_language(mut self, language: &str, layer: OverrideLayer) -> Self {
        self.languages.insert(language.to_string(), layer);
        self
    }

    /// The builtin table contents.
    pub fn builtin() -> Self {
        Self::new(DefaultAttributes::default())
            .with_language(
                "en-US",
                OverrideLayer {
                    provider: Some("us-east".to_string()),
                    color: Some("#0057b8".to_string()),
                    parameter: None,
                },
            )
            .with_language(
                "pt-BR",
                OverrideLayer {
                    provider: None,
                    color: Some("#009c3b".to_string()),
                    parameter: Some("carnival".to_string()),
                },
            )
            .with_property(
                "frontpage",
                OverrideLayer {
                    provider: Some("frontpage-cdn".to_string()),
                    color: None,
                    parameter: Some("hero".to_string()),
                },
            )
            .with_property(
                "search",
                OverrideLayer {
                    provider: None,
                    color: Some("#712f8e".to_string()),
                    parameter: None,
                },
            )
            .with_combined(
                "en-US",
                "frontpage",
                OverrideLayer {
                    provider: None,
                    color: Some("#b31b1b".to_string()),
                    parameter: None,
                },
            )
            .with_combined(
                "en-US",
                "search",
                OverrideLayer {
                    provider: Some("search-us".to_string()),
                    color: None,
                    parameter: Some("instant".to_string()),
                },
            )
    }

    /// Process-wide builtin table, initialized on first use.
    ///
    /// `OnceLock` gives the happens-before guarantee: the table is fully
    /// built before any resolver can observe it.
    pub fn global() -> &'static Self {
        static TABLE: OnceLock<OverrideTable> = OnceLock::new();
        TABLE.get_or_init(Self::builtin)
    }

    /// Combined-key layer lookup.
    pub fn combined(&self, language: &str, property: &str) -> Option<&OverrideLayer> {
        self.combined
            .get(&(language.to_string(), property.to_string()))
    }

    /// Property-only layer lookup.
    pub fn property(&self, property: &str) -> Option<&OverrideLayer> {
        self.properties.get(property)
    }

    /// Language-only layer lookup.
    pub fn language(&self, language: &str) -> Option<&OverrideLayer> {
        self.languages.get(language)
    }

    /// The terminal defaults layer.
    pub fn defaults(&self) -> &DefaultAttributes {
        &self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layers_present() {
        let table = OverrideTable::builtin();

        assert!(table.language("en-US").is_some());
        assert!(table.language("pt-BR").is_some());
        assert!(table.property("frontpage").is_some());
        assert!(table.property("search").is_some());
        assert!(table.combined("en-US", "frontpage").is_some());
        assert!(table.combined("en-US", "search").is_some());
    }

    #[test]
    fn test_unknown_keys_miss() {
        let table = OverrideTable::builtin();

        assert!(table.language("fr-FR").is_none());
        assert!(table.property("mail").is_none());
        assert!(table.combined("pt-BR", "frontpage").is_none());
        // Combined lookups do not decompose into single-selector hits.
        assert!(table.combined("en-US", "mail").is_none());
    }

    #[test]
    fn test_layer_partiality() {
        let table = OverrideTable::builtin();

        let layer = table.combined("en-US", "frontpage").unwrap();
        assert_eq!(layer.get(Attribute::Color), Some("#b31b1b"));
        assert_eq!(layer.get(Attribute::Provider), None);
        assert_eq!(layer.get(Attribute::Parameter), None);
    }

    #[test]
    fn test_global_is_one_instance() {
        let a = OverrideTable::global() as *const OverrideTable;
        let b = OverrideTable::global() as *const OverrideTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_global_matches_builtin() {
        let global = OverrideTable::global();
        let builtin = OverrideTable::builtin();

        assert_eq!(global.defaults().provider, builtin.defaults().provider);
        assert_eq!(
            global.language("en-US").unwrap().get(Attribute::Color),
            builtin.language("en-US").unwrap().get(Attribute::Color),
        );
    }
}
