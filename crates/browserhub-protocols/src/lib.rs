//! # BrowserHub Protocols
//!
//! Provider contract definitions for the BrowserHub registry.
//! Contains only interfaces and value types - no registry logic.
//!
//! ## Core Traits
//!
//! - [`BrowserProvider`] - A plugin that lists manifests and opens sessions
//! - [`ProviderFactory`] - Builds a provider from its options object
//! - [`FromOptions`] - Constructor-style providers usable as a factory
//! - [`SourceResolver`] - Turns a source name into a factory

pub mod error;
pub mod provider;

pub use error::{ProviderError, RegistryError};
pub use provider::{
    factory_of, provider_factory, BrowserProvider, BrowserSession, FromOptions, Manifest,
    ProviderFactory, ProviderOptions, SourceResolver, Target, TypedFactory,
};
