//! Path access integration tests
//!
//! Reads through maps, lists and records, auto-vivification on write, and
//! the strict write mode.

use arbor::{AccessError, Error, List, Map, PathBuf, Value, path};

use crate::helpers::*;

#[test]
fn test_deep_set_builds_padded_lists() {
    let engine = engine();
    let mut tree = Value::Map(Map::new());
    let path = path!("devices", 1, "switch", 0, "name");

    engine.set(&mut tree, &path, "sw0");

    assert_eq!(engine.get(&tree, &path).as_deref(), Some(&Value::from("sw0")));

    let devices = engine.get(&tree, &["devices"]).unwrap();
    let devices = devices.as_list().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices.get(0), Some(&Value::Map(Map::new())));
}

#[test]
fn test_set_then_get_round_trips() {
    let engine = engine();
    let mut tree = inventory();

    let cases: Vec<(PathBuf, Value)> = vec![
        (path!("id"), Value::from("edge")),
        (path!("devices", 0, "name"), Value::from("core0")),
        (path!("devices", 1, "ports"), Value::Int(96)),
        (path!("location", "rack"), Value::Int(12)),
    ];

    for (path, value) in cases {
        engine.set(&mut tree, &path, value.clone());
        assert_eq!(engine.get(&tree, &path).as_deref(), Some(&value), "{path}");
    }
}

#[test]
fn test_get_misses() {
    let engine = engine();
    let tree = inventory();

    assert!(engine.get(&tree, &["missing"]).is_none());
    assert!(engine.get(&tree, &["devices", "2"]).is_none());
    assert!(engine.get(&tree, &["devices", "first"]).is_none());
    assert!(engine.get(&tree, &["id", "deeper"]).is_none());
    assert_eq!(
        engine.get_or(&tree, &["missing"], 0).into_owned(),
        Value::Int(0)
    );
}

#[test]
fn test_dotted_paths_parse() {
    let engine = engine();
    let tree = inventory();
    let path: PathBuf = "devices.1.uplink".parse().unwrap();

    assert_eq!(
        engine.get(&tree, &path).and_then(|v| v.as_float()),
        Some(10.5)
    );
}

#[test]
fn test_stored_null_is_present() {
    let engine = engine();
    let tree = Value::Map(Map::new().with("gone", Value::Null));

    assert_eq!(engine.get(&tree, &["gone"]).as_deref(), Some(&Value::Null));
    assert!(engine.get(&tree, &["gone", "x"]).is_none());
}

#[test]
fn test_list_root_terminal_appends() {
    let engine = engine();
    let mut tree = Value::List(List::new());

    engine.set(&mut tree, &["0"], "a");
    engine.set(&mut tree, &["3", "name"], "c");
    engine.set(&mut tree, &["0"], "b");

    assert_eq!(
        tree,
        Value::List(
            List::new()
                .with("a")
                .with(Map::new())
                .with(Map::new())
                .with(Map::new().with("name", "c"))
                .with("b")
        )
    );

    // Index 0 holds a leaf, so there is nothing to descend into
    engine.set(&mut tree, &["0", "name"], "d");
    assert_eq!(engine.get(&tree, &["0"]).as_deref(), Some(&Value::from("a")));
}

#[test]
fn test_record_fields_are_addressable() {
    let engine = engine();
    let tree = device_value();

    assert_eq!(engine.get(&tree, &["id"]).as_deref(), Some(&Value::from("sw0")));
    assert_eq!(engine.get(&tree, &["site"]).as_deref(), Some(&Value::from("ams1")));
    assert_eq!(
        engine.get(&tree, &["uplink", "mbps"]).as_deref(),
        Some(&Value::Int(10000))
    );
    assert!(engine.get(&tree, &["meta"]).is_none());
    assert!(engine.get(&tree, &["secret"]).is_none());
    assert!(engine.get(&tree, &["serial"]).is_none());
}

#[test]
fn test_record_fields_are_writable() {
    let engine = engine();
    let mut tree = device_value();

    engine.set(&mut tree, &["id"], "sw9");
    engine.set(&mut tree, &["uplink", "mbps"], 25000);

    let device = tree.as_record().unwrap().downcast_ref::<Device>().unwrap();
    assert_eq!(device.meta.id, "sw9");
    assert_eq!(device.uplink.speed, 25000);
}

#[test]
fn test_record_inside_map() {
    let engine = engine();
    let mut tree = Value::Map(Map::new().with("device", device_value()));

    engine.set(&mut tree, &["device", "site"], "lhr2");
    assert_eq!(
        engine.get(&tree, &["device", "site"]).as_deref(),
        Some(&Value::from("lhr2"))
    );
}

#[test]
fn test_strict_write_errors() {
    let engine = engine();
    let mut tree = device_value();

    let err = engine.try_set(&mut tree, &["nope"], 1).unwrap_err();
    assert!(matches!(err, AccessError::UnknownField { field, .. } if field == "nope"));

    let err = engine
        .try_set(&mut tree, &["uplink", "mbps"], "fast")
        .unwrap_err();
    assert!(err.is_field_error());
    assert_eq!(err.path(), "uplink");

    let err = engine.try_set(&mut tree, &["site", "x"], 1).unwrap_err();
    assert!(err.is_field_error());

    let err: Error = engine
        .try_set(&mut Value::Int(1), &["a"], 1)
        .unwrap_err()
        .into();
    assert_eq!(err.module(), "access");
    assert!(err.is_shape_error());
}

#[test]
fn test_permissive_write_leaves_record_unchanged() {
    let engine = engine();
    let mut tree = device_value();
    let before = tree.clone();

    engine.set(&mut tree, &["uplink", "mbps"], "fast");
    engine.set(&mut tree, &["nope"], 1);

    assert_eq!(tree, before);
}
