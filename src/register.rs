//! Provider catalog and registry construction for BrowserHub.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use browserhub_config::{ConfigError, ConfigLoader, HubConfig};
use browserhub_core::{FactoryCatalog, ProviderRegistry};
use browserhub_protocols::RegistryError;
use browserhub_provider_static::StaticProvider;

/// Catalog of the provider sources built into the binary.
pub(crate) fn builtin_catalog() -> FactoryCatalog {
    FactoryCatalog::new().with(StaticProvider::SOURCE, StaticProvider::factory())
}

/// Load the config file, falling back to the default location, then to an
/// empty configuration.
pub(crate) fn load_config(path: Option<&Path>) -> Result<HubConfig, ConfigError> {
    if let Some(path) = path {
        return ConfigLoader::load(path);
    }

    match ConfigLoader::default_path() {
        Some(path) if path.exists() => ConfigLoader::load(&path),
        _ => Ok(HubConfig::default()),
    }
}

/// Build a registry holding every provider listed in the config.
pub(crate) fn build_registry(
    config: &HubConfig,
    catalog: FactoryCatalog,
) -> Result<ProviderRegistry, RegistryError> {
    let mut registry = ProviderRegistry::with_resolver(config.registry_config(), Arc::new(catalog));
    registry.add(config.provider_specs(), config.default_options())?;
    info!(providers = registry.len(), "Registry ready");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_catalog_has_static() {
        assert!(builtin_catalog().contains(StaticProvider::SOURCE));
    }

    #[test]
    fn test_load_config_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[aliases]").unwrap();
        writeln!(file, "local = \"static\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.aliases["local"], "static");
    }

    #[test]
    fn test_load_config_missing_path() {
        let result = load_config(Some(Path::new("/nonexistent/browserhub.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_build_registry_from_config() {
        let config = ConfigLoader::load_str(
            r#"
            [aliases]
            local = "static"

            [providers.local]
            manifests = [{ name = "chrome" }]
            "#,
        )
        .unwrap();

        let registry = build_registry(&config, builtin_catalog()).unwrap();
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["local"]);
    }

    #[test]
    fn test_build_registry_unknown_source() {
        let config = ConfigLoader::load_str("[providers.grid]\nurl = \"x\"").unwrap();
        let result = build_registry(&config, builtin_catalog());
        assert!(matches!(result, Err(RegistryError::UnresolvedSource { .. })));
    }
}
