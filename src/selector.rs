//! Selector bag parsing and validation
//!
//! Callers supply a plain key/value bag with optional string entries
//! `language` and `property`. Absence is first-class: an unset selector
//! is distinct from an empty string. Unrecognized keys are ignored.
//! A non-string selector value fails fast at construction, never at
//! accessor time.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bag key for the language selector.
pub const KEY_LANGUAGE: &str = "language";

/// Bag key for the property selector.
pub const KEY_PROPERTY: &str = "property";

/// The two optional input dimensions narrowing which override layers apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    /// Locale code, e.g. `en-US`. Treated as an opaque matching key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Named surface, e.g. `frontpage`, `search`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
}

impl Selectors {
    pub fn new(language: Option<String>, property: Option<String>) -> Self {
        Self { language, property }
    }

    /// Parse a plain key/value bag.
    ///
    /// The bag must be a JSON object; `language` and `property` entries,
    /// when present, must be strings. Everything else in the bag is
    /// ignored without error.
    pub fn from_bag(bag: &Value) -> Result<Self, SelectorError> {
        let object = bag
            .as_object()
            .ok_or_else(|| SelectorError::InvalidBag(type_name(bag).to_string()))?;

        Ok(Self {
            language: string_entry(object, KEY_LANGUAGE)?,
            property: string_entry(object, KEY_PROPERTY)?,
        })
    }
}

fn string_entry(
    object: &serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, SelectorError> {
    match object.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(SelectorError::InvalidSelector {
            key,
            found: type_name(other).to_string(),
        }),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Selector bag validation errors
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    #[error("selector bag must be an object, got {0}")]
    InvalidBag(String),

    #[error("selector `{key}` must be a string, got {found}")]
    InvalidSelector { key: &'static str, found: String },
}
