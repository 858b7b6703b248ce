//! Registry errors.

use thiserror::Error;

use super::ProviderError;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The `add` source is not a name, a list of names, a mapping, a list of
    /// mappings or a provider factory.
    #[error("First argument must be {0}")]
    InvalidArgument(String),

    /// A provider added by factory reference has no identity.
    #[error("Provider must have a string id")]
    MissingIdentity,

    #[error("No provider factory for '{key}' (source '{source_name}')")]
    UnresolvedSource { key: String, source_name: String },

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Manifest '{0}' is not tagged with a provider")]
    UntaggedManifest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl RegistryError {
    /// Error for an `add` argument of an unsupported shape.
    pub fn invalid_argument() -> Self {
        Self::InvalidArgument(
            "a string, an array of strings, an object, an array of objects or a provider factory"
                .to_string(),
        )
    }
}
