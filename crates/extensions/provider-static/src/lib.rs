//! Static browser provider for BrowserHub.
//!
//! Serves the manifests declared in its options. Useful for local setups and
//! for exercising a registry without launching anything.

mod provider;
mod session;

pub use provider::StaticProvider;
pub use session::StaticSession;
