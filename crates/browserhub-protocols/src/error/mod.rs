//! Error types for the BrowserHub protocol layer.

mod provider;
mod registry;

pub use provider::*;
pub use registry::*;
