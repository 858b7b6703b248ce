//! Registry behaviour with the static provider and a loaded config file.

use std::sync::Arc;

use browserhub_config::{ConfigLoader, RegistryConfig};
use browserhub_core::{FactoryCatalog, ProviderRegistry};
use browserhub_protocols::{Manifest, RegistryError};
use browserhub_provider_static::{StaticProvider, StaticSession};
use serde_json::json;

const CONFIG: &str = r#"
[aliases]
local = "static"
remote = "static"

[providers.local]
manifests = [{ name = "chrome" }, { name = "firefox" }]

[providers.remote]
manifests = [{ name = "safari", supports = { headless = false } }]

[defaults]
headless = true
"#;

fn catalog() -> Arc<FactoryCatalog> {
    Arc::new(FactoryCatalog::new().with(StaticProvider::SOURCE, StaticProvider::factory()))
}

fn registry_from_config() -> ProviderRegistry {
    let config = ConfigLoader::load_str(CONFIG).unwrap();
    let mut registry = ProviderRegistry::with_resolver(config.registry_config(), catalog());
    registry
        .add(config.provider_specs(), config.default_options())
        .unwrap();
    registry
}

#[tokio::test]
async fn test_config_driven_registry() {
    let registry = registry_from_config();
    assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["local", "remote"]);

    let local = registry.get("local").unwrap();
    assert_eq!(local.options()["headless"], json!(true));

    let manifests = registry.manifests().await.unwrap();
    let names: Vec<_> = manifests
        .iter()
        .map(|m| (m.name.as_str(), m.provider.as_deref()))
        .collect();
    assert_eq!(
        names,
        vec![
            ("chrome", Some("local")),
            ("firefox", Some("local")),
            ("safari", Some("remote")),
        ]
    );
    assert_eq!(manifests[2].supports.get("headless"), Some(&json!(false)));
}

#[tokio::test]
async fn test_open_session_through_registry() {
    let registry = registry_from_config();
    let manifests = registry.manifests().await.unwrap();
    let firefox = manifests.iter().find(|m| m.name == "firefox").unwrap();

    let session = registry
        .browser(firefox, &json!({ "url": "https://example.com" }))
        .unwrap();
    let session = session.downcast_ref::<StaticSession>().unwrap();
    assert_eq!(session.manifest.provider.as_deref(), Some("local"));
    assert_eq!(session.url(), Some("https://example.com"));
}

#[tokio::test]
async fn test_wrong_provider_tag_reaches_owner_error() {
    let registry = registry_from_config();
    let manifest = Manifest::new("chrome").with_provider("remote");
    let err = registry.browser(&manifest, &json!({})).err().unwrap();
    assert!(matches!(err, RegistryError::Provider(_)));
}

#[tokio::test]
async fn test_static_provider_by_factory() {
    let mut registry = ProviderRegistry::new(RegistryConfig::default());
    registry
        .add(
            StaticProvider::factory(),
            Some(
                json!({ "id": "inline", "manifests": [{ "name": "edge" }] })
                    .as_object()
                    .cloned()
                    .unwrap(),
            ),
        )
        .unwrap();

    let manifests = registry.manifests().await.unwrap();
    assert_eq!(manifests, vec![Manifest::new("edge").with_provider("inline")]);
}

#[test]
fn test_static_provider_without_id_by_factory() {
    let mut registry = ProviderRegistry::default();
    let err = registry.add(StaticProvider::factory(), None).unwrap_err();
    assert!(matches!(err, RegistryError::MissingIdentity));
    assert!(registry.is_empty());
}

#[test]
fn test_invalid_static_options_leave_registry_unchanged() {
    let config = RegistryConfig::new().with_alias("local", StaticProvider::SOURCE);
    let mut registry = ProviderRegistry::with_resolver(config, catalog());
    registry.add("local", None).unwrap();

    let err = registry
        .add_value(json!({ "local": { "manifests": 3 } }), None)
        .unwrap_err();
    assert!(matches!(err, RegistryError::Provider(_)));
    assert!(registry.get("local").unwrap().options().is_empty());
}
