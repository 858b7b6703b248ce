//! Provider registry for aggregating browser providers.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use browserhub_config::RegistryConfig;
use browserhub_protocols::{
    BrowserProvider, BrowserSession, Manifest, ProviderError, ProviderFactory, ProviderOptions,
    RegistryError, SourceResolver, Target,
};

use super::catalog::FactoryCatalog;
use super::options::merge_options;
use super::source::{AddSource, Origin};

/// Ordered collection of browser providers keyed by name.
///
/// Entries keep the position of their first insertion. Adding a key again
/// replaces the provider in place.
pub struct ProviderRegistry {
    config: RegistryConfig,
    resolver: Arc<dyn SourceResolver>,
    providers: IndexMap<String, Arc<dyn BrowserProvider>>,
}

impl ProviderRegistry {
    /// Create a registry that resolves sources from an empty catalog.
    ///
    /// Adding by name or alias always fails with
    /// [`RegistryError::UnresolvedSource`]; only factories can be added. Use
    /// [`ProviderRegistry::with_resolver`] to add providers by name.
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_resolver(config, Arc::new(FactoryCatalog::new()))
    }

    /// Create a registry with the resolver used to turn source names into
    /// provider factories.
    pub fn with_resolver(config: RegistryConfig, resolver: Arc<dyn SourceResolver>) -> Self {
        Self {
            config,
            resolver,
            providers: IndexMap::new(),
        }
    }

    /// The configuration this registry was created with.
    pub fn options(&self) -> &RegistryConfig {
        &self.config
    }

    /// Add one or more providers.
    ///
    /// `options` are call-scoped defaults merged into every provider's own
    /// options, winning on conflict. Nothing is stored unless every provider
    /// of the call resolves and builds.
    pub fn add(
        &mut self,
        source: impl Into<AddSource>,
        options: Option<ProviderOptions>,
    ) -> Result<(), RegistryError> {
        let defaults = options.as_ref();
        let mut staged = Vec::new();

        for request in source.into().into_requests() {
            let options = merge_options(request.options.as_ref(), defaults);
            let entry = match request.origin {
                Origin::Named(key) => {
                    let factory = self.resolve(&key)?;
                    let provider = factory.create(options)?;
                    (key, provider)
                }
                Origin::Factory(factory) => {
                    let provider = factory.create(options)?;
                    let key = provider
                        .id()
                        .ok_or(RegistryError::MissingIdentity)?
                        .to_string();
                    (key, provider)
                }
            };
            staged.push(entry);
        }

        for (key, provider) in staged {
            if self.providers.contains_key(&key) {
                debug!(provider = %key, "Replaced provider in place");
            } else {
                debug!(provider = %key, "Added provider");
            }
            self.providers.insert(key, provider);
        }

        Ok(())
    }

    /// Add providers described by a dynamic value.
    ///
    /// Accepts a string, an array of strings, an object of options, or an
    /// array of such objects.
    pub fn add_value(
        &mut self,
        source: Value,
        options: Option<ProviderOptions>,
    ) -> Result<(), RegistryError> {
        let source = AddSource::try_from(source)?;
        self.add(source, options)
    }

    fn resolve(&self, key: &str) -> Result<Arc<dyn ProviderFactory>, RegistryError> {
        let source = self.config.alias(key).unwrap_or(key);
        self.resolver.resolve(source).ok_or_else(|| {
            warn!(provider = key, source, "No factory for provider source");
            RegistryError::UnresolvedSource {
                key: key.to_string(),
                source_name: source.to_string(),
            }
        })
    }

    /// Get a provider by key.
    pub fn get(&self, key: &str) -> Option<Arc<dyn BrowserProvider>> {
        self.providers.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.providers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Iterate over providers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn BrowserProvider>> + '_ {
        self.providers.values()
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.providers.keys().map(String::as_str)
    }

    /// Iterate over providers in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Arc<dyn BrowserProvider>> + '_ {
        self.providers.values()
    }

    /// List the manifests of every provider, tagged with the provider key.
    ///
    /// The tag replaces any `provider` field the provider set itself.
    ///
    /// Providers are queried one after another in insertion order; the first
    /// failure is returned as is.
    pub async fn manifests(&self) -> Result<Vec<Manifest>, ProviderError> {
        let mut result = Vec::new();
        for (key, provider) in &self.providers {
            let manifests = provider.manifests().await?;
            debug!(provider = %key, count = manifests.len(), "Listed manifests");
            result.extend(manifests.into_iter().map(|mut manifest| {
                manifest.extra.shift_remove("provider");
                manifest.provider = Some(key.clone());
                manifest
            }));
        }
        Ok(result)
    }

    /// Open a session through the provider that produced `manifest`.
    pub fn browser(
        &self,
        manifest: &Manifest,
        target: &Target,
    ) -> Result<BrowserSession, RegistryError> {
        let key = manifest
            .provider
            .as_deref()
            .ok_or_else(|| RegistryError::UntaggedManifest(manifest.name.clone()))?;
        let provider = self
            .providers
            .get(key)
            .ok_or_else(|| RegistryError::UnknownProvider(key.to_string()))?;
        Ok(provider.browser(manifest, target)?)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl<'a> IntoIterator for &'a ProviderRegistry {
    type Item = &'a Arc<dyn BrowserProvider>;
    type IntoIter = indexmap::map::Values<'a, String, Arc<dyn BrowserProvider>>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.values()
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("config", &self.config)
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
