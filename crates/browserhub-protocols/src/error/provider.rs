//! Browser provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to list manifests: {0}")]
    ManifestListing(String),

    #[error("Invalid provider options: {0}")]
    InvalidOptions(String),

    #[error("Failed to create session: {0}")]
    SessionCreation(String),

    #[error("Manifest not served by this provider: {0}")]
    UnknownManifest(String),
}
