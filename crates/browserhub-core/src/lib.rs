//! # BrowserHub Core
//!
//! Registry that loads browser providers and presents them as one collection.
//!
//! ## Components
//!
//! - [`ProviderRegistry`] - Ordered provider entries, manifest aggregation and
//!   session dispatch
//! - [`AddSource`] - The accepted shapes of an `add` call
//! - [`FactoryCatalog`] - In-process source resolver
//! - [`merge_options`] - Per-entry and call-scoped options merging

pub mod registry;

pub use registry::{merge_options, AddSource, FactoryCatalog, ProviderRegistry, ProviderSpecs};
