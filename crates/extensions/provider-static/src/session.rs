//! Session value returned by the static provider.

use serde::Serialize;

use browserhub_protocols::{Manifest, Target};

/// A session that records what it was asked to open.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticSession {
    pub manifest: Manifest,
    pub target: Target,
}

impl StaticSession {
    pub fn new(manifest: Manifest, target: Target) -> Self {
        Self { manifest, target }
    }

    /// The target's `url` field, if any.
    pub fn url(&self) -> Option<&str> {
        self.target.get("url").and_then(|v| v.as_str())
    }
}
