//! Attribute resolution
//!
//! One parameterized lookup implements the precedence chain for all three
//! attributes:
//! 1. Combined-key layer (language + property), when both selectors are set
//! 2. Property-only layer
//! 3. Language-only layer
//! 4. Builtin defaults
//!
//! The most specific layer that defines the attribute is authoritative;
//! layers never merge field-by-field for the same attribute. Each attribute
//! resolves independently, so a combined layer may decide `color` while
//! `provider` comes from the property layer underneath it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::selector::{SelectorError, Selectors};
use crate::table::OverrideTable;

/// One of the three independently resolved outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Provider,
    Color,
    Parameter,
}

impl Attribute {
    /// All attributes, in output order.
    pub const ALL: [Attribute; 3] = [Attribute::Provider, Attribute::Color, Attribute::Parameter];
}

/// A fully-populated query result. Never partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAttributes {
    pub provider: String,
    pub color: String,
    pub parameter: String,
}

/// Stateless view over the override table plus one immutable selector bag.
///
/// Cheap to construct per query context and discard after use; accessors
/// are pure reads and never fail once construction succeeds.
#[derive(Debug, Clone)]
pub struct Resolver<'t> {
    table: &'t OverrideTable,
    selectors: Selectors,
}

impl Resolver<'static> {
    /// Resolver over the process-wide builtin table.
    pub fn new(selectors: Selectors) -> Self {
        Self::with_table(OverrideTable::global(), selectors)
    }

    /// Resolver over the builtin table from a plain key/value bag.
    pub fn from_bag(bag: &Value) -> Result<Self, SelectorError> {
        Ok(Self::new(Selectors::from_bag(bag)?))
    }
}

impl<'t> Resolver<'t> {
    /// Resolver over a caller-owned table.
    pub fn with_table(table: &'t OverrideTable, selectors: Selectors) -> Self {
        Self { table, selectors }
    }

    /// The selector bag this resolver was constructed with.
    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// Resolve a single attribute through the precedence chain.
    pub fn resolve(&self, attribute: Attribute) -> &'t str {
        let language = self.selectors.language.as_deref();
        let property = self.selectors.property.as_deref();

        if let (Some(language), Some(property)) = (language, property) {
            if let Some(value) = self
                .table
                .combined(language, property)
                .and_then(|layer| layer.get(attribute))
            {
                return value;
            }
        }

        if let Some(value) = property
            .and_then(|property| self.table.property(property))
            .and_then(|layer| layer.get(attribute))
        {
            return value;
        }

        if let Some(value) = language
            .and_then(|language| self.table.language(language))
            .and_then(|layer| layer.get(attribute))
        {
            return value;
        }

        self.table.defaults().get(attribute)
    }

    /// Resolved content provider identifier.
    pub fn provider(&self) -> &'t str {
        self.resolve(Attribute::Provider)
    }

    /// Resolved color token.
    pub fn color(&self) -> &'t str {
        self.resolve(Attribute::Color)
    }

    /// Resolved presentation parameter.
    pub fn parameter(&self) -> &'t str {
        self.resolve(Attribute::Parameter)
    }

    /// Resolve all three attributes at once.
    pub fn resolve_all(&self) -> ResolvedAttributes {
        ResolvedAttributes {
            provider: self.provider().to_string(),
            color: self.color().to_string(),
            parameter: self.parameter().to_string(),
        }
    }
}
