use super::*;
use serde_json::json;

fn request_keys(source: AddSource) -> Vec<String> {
    source
        .into_requests()
        .into_iter()
        .map(|request| match request.origin {
            Origin::Named(key) => key,
            Origin::Factory(_) => "<factory>".to_string(),
        })
        .collect()
}

#[test]
fn test_from_str() {
    assert!(matches!(AddSource::from("test1"), AddSource::Name(name) if name == "test1"));
}

#[test]
fn test_from_names() {
    let source = AddSource::from(["test1", "test2"]);
    assert_eq!(request_keys(source), vec!["test1", "test2"]);
}

#[test]
fn test_classify_string() {
    let source = AddSource::try_from(json!("test1")).unwrap();
    assert!(matches!(source, AddSource::Name(name) if name == "test1"));
}

#[test]
fn test_classify_string_array() {
    let source = AddSource::try_from(json!(["test1", "test2"])).unwrap();
    assert!(matches!(source, AddSource::Names(ref names) if names.len() == 2));
}

#[test]
fn test_classify_object_keeps_order() {
    let source = AddSource::try_from(json!({ "test2": null, "test1": { "a": 1 } })).unwrap();
    let AddSource::Map(specs) = source else {
        panic!("expected a map source");
    };
    let keys: Vec<_> = specs.keys().cloned().collect();
    assert_eq!(keys, vec!["test2", "test1"]);
    assert!(specs["test2"].is_none());
    assert_eq!(specs["test1"].as_ref().unwrap()["a"], json!(1));
}

#[test]
fn test_classify_object_array() {
    let source =
        AddSource::try_from(json!([{ "test1": null }, { "test2": { "b": 3 } }])).unwrap();
    assert!(matches!(source, AddSource::Maps(ref list) if list.len() == 2));
    assert_eq!(request_keys(source), vec!["test1", "test2"]);
}

#[test]
fn test_classify_empty_array() {
    let source = AddSource::try_from(json!([])).unwrap();
    assert!(source.into_requests().is_empty());
}

#[test]
fn test_classify_number_rejected() {
    let err = AddSource::try_from(json!(123)).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument(_)));
    assert!(err.to_string().starts_with("First argument must be"));
}

#[test]
fn test_classify_bool_and_null_rejected() {
    assert!(AddSource::try_from(json!(true)).is_err());
    assert!(AddSource::try_from(serde_json::Value::Null).is_err());
}

#[test]
fn test_classify_mixed_array_rejected() {
    let err = AddSource::try_from(json!(["test1", { "test2": null }])).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidArgument(_)));
}

#[test]
fn test_classify_non_object_options_rejected() {
    let err = AddSource::try_from(json!({ "test1": 5 })).unwrap_err();
    assert!(err.to_string().contains("test1"));
}

#[test]
fn test_map_requests_carry_options() {
    let mut specs = ProviderSpecs::new();
    let mut options = ProviderOptions::new();
    options.insert("a".to_string(), json!(1));
    specs.insert("test1".to_string(), Some(options));
    specs.insert("test2".to_string(), None);

    let requests = AddSource::from(specs).into_requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].options.is_some());
    assert!(requests[1].options.is_none());
}

#[test]
fn test_debug_format() {
    assert_eq!(format!("{:?}", AddSource::from("x")), "Name(\"x\")");
}
