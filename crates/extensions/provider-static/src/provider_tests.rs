use super::*;
use serde_json::json;

fn options(value: Value) -> ProviderOptions {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[test]
fn test_new_without_options() {
    let provider = StaticProvider::new(ProviderOptions::new()).unwrap();
    assert!(provider.id().is_none());
    assert!(provider.manifests.is_empty());
}

#[test]
fn test_id_from_options() {
    let provider = StaticProvider::new(options(json!({ "id": "local" }))).unwrap();
    assert_eq!(provider.id(), Some("local"));
}

#[test]
fn test_non_string_id_is_no_identity() {
    let provider = StaticProvider::new(options(json!({ "id": 7 }))).unwrap();
    assert!(provider.id().is_none());
}

#[test]
fn test_invalid_manifests_rejected() {
    let result = StaticProvider::new(options(json!({ "manifests": "chrome" })));
    assert!(matches!(result, Err(ProviderError::InvalidOptions(_))));
}

#[tokio::test]
async fn test_manifests_are_normalized() {
    let provider = StaticProvider::new(options(json!({
        "manifests": [{ "name": "chrome", "version": "121" }, { "name": "firefox" }]
    })))
    .unwrap();

    let manifests = provider.manifests().await.unwrap();
    assert_eq!(manifests.len(), 2);
    assert_eq!(manifests[0].extra.get("version"), Some(&json!("121")));
    assert_eq!(manifests[1], Manifest::new("firefox"));
}

#[test]
fn test_browser_returns_session() {
    let provider =
        StaticProvider::new(options(json!({ "manifests": [{ "name": "chrome" }] }))).unwrap();
    let target = json!({ "url": "https://example.com" });

    let session = provider.browser(&Manifest::new("chrome"), &target).unwrap();
    let session = session.downcast_ref::<StaticSession>().unwrap();
    assert_eq!(session.manifest.name, "chrome");
    assert_eq!(session.url(), Some("https://example.com"));
}

#[test]
fn test_browser_unknown_manifest() {
    let provider = StaticProvider::new(ProviderOptions::new()).unwrap();
    let result = provider.browser(&Manifest::new("safari"), &Value::Null);
    assert!(matches!(result, Err(ProviderError::UnknownManifest(ref name)) if name == "safari"));
}

#[test]
fn test_factory_builds_provider() {
    let provider = StaticProvider::factory()
        .create(options(json!({ "id": "local" })))
        .unwrap();
    assert_eq!(provider.id(), Some("local"));
    assert_eq!(provider.options()["id"], json!("local"));
}
