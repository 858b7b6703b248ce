//! Manifest types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A browser configuration offered by a provider.
///
/// `supports`, `wants` and `options` default to empty objects. Fields a
/// provider adds beyond these are kept in `extra` and serialized inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub supports: Map<String, Value>,
    #[serde(default)]
    pub wants: Map<String, Value>,
    #[serde(default)]
    pub options: Map<String, Value>,
    /// Key of the registry entry that produced this manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Field names with a typed slot; they never appear in `extra`.
    pub const RESERVED_FIELDS: [&'static str; 5] =
        ["name", "supports", "wants", "options", "provider"];

    /// Create a manifest with empty `supports`, `wants` and `options`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_supports(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.supports.insert(key.into(), value.into());
        self
    }

    pub fn with_wants(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.wants.insert(key.into(), value.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Set a field by name.
    ///
    /// Keys in [`Manifest::RESERVED_FIELDS`] go to their typed field and are
    /// ignored when the value has the wrong shape. Other keys land in `extra`.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        match (key.as_str(), value.into()) {
            ("name", Value::String(name)) => self.name = name,
            ("supports", Value::Object(map)) => self.supports = map,
            ("wants", Value::Object(map)) => self.wants = map,
            ("options", Value::Object(map)) => self.options = map,
            ("provider", Value::String(provider)) => self.provider = Some(provider),
            ("provider", Value::Null) => self.provider = None,
            (name, _) if Self::RESERVED_FIELDS.contains(&name) => {}
            (name, value) => {
                self.extra.insert(name.to_string(), value);
            }
        }
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Parse a manifest from a JSON value, filling in the defaults.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
