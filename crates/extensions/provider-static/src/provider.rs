//! Static provider implementation.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use browserhub_protocols::{
    factory_of, BrowserProvider, BrowserSession, FromOptions, Manifest, ProviderError,
    ProviderFactory, ProviderOptions, Target,
};

use crate::session::StaticSession;

/// Provider serving a fixed list of manifests.
///
/// Options:
/// - `id`: identity used when the provider is added by factory.
/// - `manifests`: array of manifest objects; absent means none.
pub struct StaticProvider {
    id: Option<String>,
    options: ProviderOptions,
    manifests: Vec<Manifest>,
}

impl StaticProvider {
    /// Source name to register the factory under.
    pub const SOURCE: &'static str = "static";

    pub fn new(options: ProviderOptions) -> Result<Self, ProviderError> {
        let id = options.get("id").and_then(Value::as_str).map(str::to_string);
        let manifests = match options.get("manifests") {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|e| ProviderError::InvalidOptions(format!("manifests: {}", e)))?,
        };

        Ok(Self {
            id,
            options,
            manifests,
        })
    }

    pub fn factory() -> Arc<dyn ProviderFactory> {
        factory_of::<Self>()
    }
}

impl FromOptions for StaticProvider {
    fn from_options(options: ProviderOptions) -> Result<Self, ProviderError> {
        Self::new(options)
    }
}

#[async_trait]
impl BrowserProvider for StaticProvider {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn options(&self) -> &ProviderOptions {
        &self.options
    }

    async fn manifests(&self) -> Result<Vec<Manifest>, ProviderError> {
        debug!(count = self.manifests.len(), "Serving static manifests");
        Ok(self.manifests.clone())
    }

    fn browser(&self, manifest: &Manifest, target: &Target) -> Result<BrowserSession, ProviderError> {
        if !self.manifests.iter().any(|m| m.name == manifest.name) {
            return Err(ProviderError::UnknownManifest(manifest.name.clone()));
        }
        Ok(Box::new(StaticSession::new(manifest.clone(), target.clone())))
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
