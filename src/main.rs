//! BrowserHub - aggregate browser providers behind one registry
//!
//! Main entry point for the BrowserHub CLI.

mod cli;
mod cmd_registry;
mod register;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};

fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = register::load_config(cli.config.as_deref())?;
    init_tracing(&config.logging.level);

    let catalog = register::builtin_catalog();

    match cli.command {
        Commands::Check => {
            let known: Vec<&str> = catalog.names().collect();
            cmd_registry::check_config(&config, &known)?;
        }
        Commands::Providers => {
            let registry = register::build_registry(&config, catalog)?;
            cmd_registry::list_providers(&registry);
        }
        Commands::Manifests { format } => {
            let registry = register::build_registry(&config, catalog)?;
            cmd_registry::list_manifests(&registry, &format).await?;
        }
        Commands::Open {
            provider,
            name,
            url,
        } => {
            let registry = register::build_registry(&config, catalog)?;
            cmd_registry::open_session(&registry, &provider, &name, url.as_deref()).await?;
        }
    }

    Ok(())
}
