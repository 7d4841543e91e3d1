//! Records as tree containers

use arbor::{Config, Container, Engine, RecordValue, RecordView, Value};

use crate::helpers::*;

#[test]
fn test_view_names() {
    let device = device();
    let view = RecordView::new(&device, &Config::default());

    assert_eq!(view.names().collect::<Vec<_>>(), vec!["id", "site", "uplink"]);
    assert!(!view.contains("meta"));
    assert!(!view.contains("secret"));
}

#[test]
fn test_tag_name_is_configurable() {
    let config = Config {
        tag_name: "json".to_string(),
        ..Config::default()
    };
    let engine = Engine::new(config);
    let tree = device_value();

    // annotations under another tag are ignored
    assert_eq!(
        engine.get(&tree, &["secret"]).as_deref(),
        Some(&Value::from("hunter2"))
    );
    assert_eq!(
        engine.get(&tree, &["uplink", "speed"]).as_deref(),
        Some(&Value::Int(10000))
    );
    assert!(engine.get(&tree, &["uplink", "mbps"]).is_none());
}

#[test]
fn test_container_view_of_record() {
    let tree = device_value();
    let config = Config::default();
    let container = Container::of(&tree, &config).unwrap();

    assert_eq!(container.kind(), "record");
    assert_eq!(container.len(), 3);
    assert_eq!(container.segments(), vec!["id", "site", "uplink"]);
    assert!(container.get("uplink").unwrap().as_record().is_some());
}

#[test]
fn test_record_serializes_exposed_fields() {
    let json = serde_json::to_value(device_value()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "sw0",
            "site": "ams1",
            "uplink": {"name": "eth0", "mbps": 10000}
        })
    );
}

#[test]
fn test_engine_serializes_under_its_tag() {
    let engine = Engine::new(Config {
        tag_name: "json".to_string(),
        ..Config::default()
    });
    let tree = Value::Map(arbor::Map::new().with("device", device_value()));

    let json = serde_json::to_value(engine.serializable(&tree)).unwrap();
    let device = &json["device"];
    assert_eq!(device["secret"], serde_json::json!("hunter2"));
    assert_eq!(device["uplink"]["speed"], serde_json::json!(10000));
    assert!(device["uplink"].get("mbps").is_none());

    let default = serde_json::to_value(Engine::default().serializable(&tree)).unwrap();
    assert_eq!(default["device"], serde_json::to_value(device_value()).unwrap());
}

#[test]
fn test_record_equality_is_by_fields() {
    let a = RecordValue::new(device());
    let mut changed = device();
    changed.serial = "SN-2".into();

    assert_eq!(a, RecordValue::new(device()));
    assert_ne!(a, RecordValue::new(changed));
}
