//! Browser provider trait definition.

use async_trait::async_trait;
use std::any::Any;

use super::Manifest;
use crate::error::ProviderError;

/// Options object handed to a provider at construction.
pub type ProviderOptions = serde_json::Map<String, serde_json::Value>;

/// Provider-defined description of what a session should open.
pub type Target = serde_json::Value;

/// Session produced by a provider. Opaque to the registry.
pub type BrowserSession = Box<dyn Any + Send + Sync>;

/// Core trait for browser providers.
#[async_trait]
pub trait BrowserProvider: Send + Sync {
    /// Returns the provider identity, if it has one.
    ///
    /// Providers added to a registry by factory reference must return `Some`.
    fn id(&self) -> Option<&str> {
        None
    }

    /// Returns the options the provider was constructed with.
    fn options(&self) -> &ProviderOptions;

    /// List the manifests this provider can launch.
    async fn manifests(&self) -> Result<Vec<Manifest>, ProviderError>;

    /// Open a session for `manifest` against `target`.
    fn browser(&self, manifest: &Manifest, target: &Target)
    -> Result<BrowserSession, ProviderError>;
}
