//! Provider registry and its supporting pieces.

mod catalog;
mod options;
mod provider;
mod source;

pub use catalog::FactoryCatalog;
pub use options::merge_options;
pub use provider::ProviderRegistry;
pub use source::{AddSource, ProviderSpecs};
