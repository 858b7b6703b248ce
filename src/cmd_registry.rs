//! Registry subcommand handlers for BrowserHub.

use serde_json::Value;
use tracing::{info, warn};

use browserhub_config::{ConfigValidator, HubConfig};
use browserhub_core::ProviderRegistry;
use browserhub_provider_static::StaticSession;

/// Print provider keys in registry order.
pub(crate) fn list_providers(registry: &ProviderRegistry) {
    if registry.is_empty() {
        println!("No providers configured.");
        return;
    }
    for key in registry.keys() {
        println!("{}", key);
    }
}

/// Print the flattened manifests of every provider.
pub(crate) async fn list_manifests(
    registry: &ProviderRegistry,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let manifests = registry.manifests().await?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&manifests)?;
            println!("{}", json);
        }
        _ => {
            if manifests.is_empty() {
                println!("No manifests found.");
                return Ok(());
            }
            println!("{:<20} {:<20} {}", "PROVIDER", "NAME", "SUPPORTS");
            println!("{}", "-".repeat(60));
            for manifest in &manifests {
                let provider = manifest.provider.as_deref().unwrap_or("-");
                let supports = manifest
                    .supports
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{:<20} {:<20} {}", provider, manifest.name, supports);
            }
        }
    }

    Ok(())
}

/// Open a session for the named manifest of one provider.
pub(crate) async fn open_session(
    registry: &ProviderRegistry,
    provider: &str,
    name: &str,
    url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let manifests = registry.manifests().await?;
    let manifest = manifests
        .iter()
        .find(|m| m.provider.as_deref() == Some(provider) && m.name == name)
        .ok_or_else(|| format!("No manifest '{}' from provider '{}'", name, provider))?;

    let target = match url {
        Some(url) => serde_json::json!({ "url": url }),
        None => Value::Null,
    };

    let session = registry.browser(manifest, &target)?;
    info!(provider, manifest = name, "Session opened");

    match session.downcast_ref::<StaticSession>() {
        Some(session) => println!("{}", serde_json::to_string_pretty(session)?),
        None => println!("Opened {} via {}", name, provider),
    }

    Ok(())
}

/// Validate the configuration and report problems.
pub(crate) fn check_config(
    config: &HubConfig,
    known_sources: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config, known_sources)?;

    for warning in &result.warnings {
        warn!(path = %warning.path, "{}", warning.message);
        println!("warning: {}: {}", warning.path, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.path, error.message);
    }

    if !result.is_valid() {
        return Err(format!("{} configuration error(s)", result.errors.len()).into());
    }

    println!("Configuration OK.");
    Ok(())
}
