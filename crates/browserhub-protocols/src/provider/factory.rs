//! Provider construction and source resolution.

use std::marker::PhantomData;
use std::sync::Arc;

use super::{BrowserProvider, ProviderOptions};
use crate::error::ProviderError;

/// Builds a provider instance from its options object.
pub trait ProviderFactory: Send + Sync {
    fn create(&self, options: ProviderOptions) -> Result<Arc<dyn BrowserProvider>, ProviderError>;
}

impl<F> ProviderFactory for F
where
    F: Fn(ProviderOptions) -> Result<Arc<dyn BrowserProvider>, ProviderError> + Send + Sync,
{
    fn create(&self, options: ProviderOptions) -> Result<Arc<dyn BrowserProvider>, ProviderError> {
        self(options)
    }
}

/// Wrap a closure as a shared provider factory.
pub fn provider_factory<F>(f: F) -> Arc<dyn ProviderFactory>
where
    F: Fn(ProviderOptions) -> Result<Arc<dyn BrowserProvider>, ProviderError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Providers that are constructed directly from their options.
pub trait FromOptions: BrowserProvider + Sized + 'static {
    fn from_options(options: ProviderOptions) -> Result<Self, ProviderError>;
}

/// Factory for a provider type implementing [`FromOptions`].
pub struct TypedFactory<P>(PhantomData<fn() -> P>);

impl<P> Default for TypedFactory<P> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<P: FromOptions> ProviderFactory for TypedFactory<P> {
    fn create(&self, options: ProviderOptions) -> Result<Arc<dyn BrowserProvider>, ProviderError> {
        Ok(Arc::new(P::from_options(options)?))
    }
}

/// Shared factory for the provider type `P`.
pub fn factory_of<P: FromOptions>() -> Arc<dyn ProviderFactory> {
    Arc::new(TypedFactory::<P>::default())
}

/// Resolves a provider source name (as found in an alias table) to a factory.
pub trait SourceResolver: Send + Sync {
    fn resolve(&self, source: &str) -> Option<Arc<dyn ProviderFactory>>;
}

impl<F> SourceResolver for F
where
    F: Fn(&str) -> Option<Arc<dyn ProviderFactory>> + Send + Sync,
{
    fn resolve(&self, source: &str) -> Option<Arc<dyn ProviderFactory>> {
        self(source)
    }
}
