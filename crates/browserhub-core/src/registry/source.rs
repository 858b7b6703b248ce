//! Accepted shapes of the registry's `add` source.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use browserhub_protocols::{ProviderFactory, ProviderOptions, RegistryError};

/// Provider keys with their optional per-entry options, in insertion order.
pub type ProviderSpecs = IndexMap<String, Option<ProviderOptions>>;

/// What to add to a registry.
///
/// Names and mapping keys go through the alias table. A factory is used
/// directly and the resulting provider's `id()` becomes its key.
#[derive(Clone)]
pub enum AddSource {
    Name(String),
    Names(Vec<String>),
    Map(ProviderSpecs),
    Maps(Vec<ProviderSpecs>),
    Factory(Arc<dyn ProviderFactory>),
}

impl AddSource {
    pub fn factory(factory: impl ProviderFactory + 'static) -> Self {
        Self::Factory(Arc::new(factory))
    }

    /// Flatten into one request per provider, preserving order.
    pub(crate) fn into_requests(self) -> Vec<AddRequest> {
        match self {
            Self::Name(name) => vec![AddRequest::named(name, None)],
            Self::Names(names) => names
                .into_iter()
                .map(|name| AddRequest::named(name, None))
                .collect(),
            Self::Map(specs) => specs
                .into_iter()
                .map(|(key, options)| AddRequest::named(key, options))
                .collect(),
            Self::Maps(list) => list
                .into_iter()
                .flatten()
                .map(|(key, options)| AddRequest::named(key, options))
                .collect(),
            Self::Factory(factory) => vec![AddRequest {
                origin: Origin::Factory(factory),
                options: None,
            }],
        }
    }
}

impl fmt::Debug for AddSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Names(names) => f.debug_tuple("Names").field(names).finish(),
            Self::Map(specs) => f.debug_tuple("Map").field(specs).finish(),
            Self::Maps(list) => f.debug_tuple("Maps").field(list).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// One provider to build: where it comes from and its per-entry options.
pub(crate) struct AddRequest {
    pub(crate) origin: Origin,
    pub(crate) options: Option<ProviderOptions>,
}

pub(crate) enum Origin {
    Named(String),
    Factory(Arc<dyn ProviderFactory>),
}

impl AddRequest {
    fn named(key: String, options: Option<ProviderOptions>) -> Self {
        Self {
            origin: Origin::Named(key),
            options,
        }
    }
}

impl From<&str> for AddSource {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for AddSource {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&String> for AddSource {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<Vec<String>> for AddSource {
    fn from(names: Vec<String>) -> Self {
        Self::Names(names)
    }
}

impl From<Vec<&str>> for AddSource {
    fn from(names: Vec<&str>) -> Self {
        Self::Names(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for AddSource {
    fn from(names: [&str; N]) -> Self {
        Self::Names(names.into_iter().map(str::to_string).collect())
    }
}

impl From<ProviderSpecs> for AddSource {
    fn from(specs: ProviderSpecs) -> Self {
        Self::Map(specs)
    }
}

impl From<Vec<ProviderSpecs>> for AddSource {
    fn from(list: Vec<ProviderSpecs>) -> Self {
        Self::Maps(list)
    }
}

impl From<Arc<dyn ProviderFactory>> for AddSource {
    fn from(factory: Arc<dyn ProviderFactory>) -> Self {
        Self::Factory(factory)
    }
}

/// Classify a dynamic value: a string, an array of strings, an object of
/// options (or null), or an array of such objects. Anything else is rejected.
impl TryFrom<Value> for AddSource {
    type Error = RegistryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(name) => Ok(Self::Name(name)),
            Value::Object(object) => specs_from_object(object).map(Self::Map),
            Value::Array(items) if items.iter().all(Value::is_string) => Ok(Self::Names(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(name) => Some(name),
                        _ => None,
                    })
                    .collect(),
            )),
            Value::Array(items) if items.iter().all(Value::is_object) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(object) => specs_from_object(object),
                    _ => Err(RegistryError::invalid_argument()),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Maps),
            _ => Err(RegistryError::invalid_argument()),
        }
    }
}

fn specs_from_object(object: Map<String, Value>) -> Result<ProviderSpecs, RegistryError> {
    object
        .into_iter()
        .map(|(key, options)| match options {
            Value::Null => Ok((key, None)),
            Value::Object(options) => Ok((key, Some(options))),
            _ => Err(RegistryError::InvalidArgument(format!(
                "an object whose values are options objects or null ('{}' is not)",
                key
            ))),
        })
        .collect()
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
