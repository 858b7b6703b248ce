//! Configuration schema definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Configuration of a single registry.
///
/// `aliases` maps a short provider name to the source name a resolver knows
/// how to build. Every other field is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: IndexMap<String, String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, alias: impl Into<String>, source: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), source.into());
        self
    }

    /// Set a field by name. `aliases` replaces the alias table when the value
    /// is an object of strings and is ignored otherwise.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        if key == "aliases" {
            if let Ok(aliases) = serde_json::from_value(value) {
                self.aliases = aliases;
            }
        } else {
            self.extra.insert(key, value);
        }
        self
    }

    /// Source name for an alias.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// The whole configuration as a JSON object.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Root configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HubConfig {
    #[serde(default)]
    pub aliases: IndexMap<String, String>,

    /// Providers to add, keyed by alias or source name, with their options.
    #[serde(default)]
    pub providers: IndexMap<String, Map<String, Value>>,

    /// Options merged into every provider's options, winning on conflict.
    #[serde(default)]
    pub defaults: Map<String, Value>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HubConfig {
    /// Registry configuration carried by this file.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            aliases: self.aliases.clone(),
            extra: self.extra.clone(),
        }
    }

    /// Providers to add, in file order. Empty option tables become `None`.
    pub fn provider_specs(&self) -> IndexMap<String, Option<Map<String, Value>>> {
        self.providers
            .iter()
            .map(|(key, options)| {
                let options = (!options.is_empty()).then(|| options.clone());
                (key.clone(), options)
            })
            .collect()
    }

    /// Call-scoped default options, if any are configured.
    pub fn default_options(&self) -> Option<Map<String, Value>> {
        (!self.defaults.is_empty()).then(|| self.defaults.clone())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
