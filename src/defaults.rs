//! Builtin default attributes (the terminal resolution layer)
//!
//! Every attribute has a builtin value, so resolution is total: any
//! selector combination that matches no override layer lands here.

use serde::{Deserialize, Serialize};

use crate::resolver::Attribute;

/// Fully-populated fallback values, one per attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultAttributes {
    /// Content provider identifier (default: "core")
    pub provider: String,

    /// Color token (default: "#ffffff")
    pub color: String,

    /// Presentation parameter (default: "plain")
    pub parameter: String,
}

impl Default for DefaultAttributes {
    fn default() -> Self {
        Self {
            provider: "core".to_string(),
            color: "#ffffff".to_string(),
            parameter: "plain".to_string(),
        }
    }
}

impl DefaultAttributes {
    /// Value for a single attribute. Always defined.
    pub fn get(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Provider => &self.provider,
            Attribute::Color => &self.color,
            Attribute::Parameter => &self.parameter,
        }
    }
}
