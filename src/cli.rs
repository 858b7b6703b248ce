//! CLI definitions for BrowserHub.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BrowserHub CLI.
#[derive(Parser)]
#[command(name = "browserhub")]
#[command(about = "Aggregate browser providers behind one registry")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to ~/.browserhub/config.toml)
    #[arg(short, long, global = true, env = "BROWSERHUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List provider keys in registry order
    Providers,

    /// List the manifests of every provider
    Manifests {
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Open a session for one manifest
    Open {
        /// Provider key the manifest belongs to
        #[arg(long)]
        provider: String,

        /// Manifest name
        #[arg(long)]
        name: String,

        /// URL to open
        #[arg(long)]
        url: Option<String>,
    },

    /// Validate the configuration file
    Check,
}
