//! In-process provider source catalog.

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use browserhub_protocols::{ProviderFactory, SourceResolver};

/// Maps provider source names to factories.
///
/// This is the resolver a registry consults after alias lookup.
#[derive(Clone, Default)]
pub struct FactoryCatalog {
    factories: IndexMap<String, Arc<dyn ProviderFactory>>,
}

impl FactoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, returning the one it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: Arc<dyn ProviderFactory>,
    ) -> Option<Arc<dyn ProviderFactory>> {
        self.factories.insert(name.into(), factory)
    }

    pub fn with(mut self, name: impl Into<String>, factory: Arc<dyn ProviderFactory>) -> Self {
        self.register(name, factory);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered source names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl SourceResolver for FactoryCatalog {
    fn resolve(&self, source: &str) -> Option<Arc<dyn ProviderFactory>> {
        self.factories.get(source).cloned()
    }
}

impl fmt::Debug for FactoryCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryCatalog")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}
