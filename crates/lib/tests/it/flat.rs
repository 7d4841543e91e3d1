//! Flat/nested conversion integration tests

use std::collections::BTreeMap;

use arbor::{Config, Engine, FixedClock, List, Map, Value};
use chrono::DateTime;

use crate::helpers::*;

fn typed_tree() -> Value {
    let at = DateTime::parse_from_rfc3339("2024-05-06T07:08:09.250+02:00").unwrap();
    Value::Map(
        Map::new()
            .with("id", "top")
            .with("enabled", true)
            .with("ratio", 0.75)
            .with("seen", at)
            .with(
                "items",
                (0..12)
                    .map(|i| Value::from(Map::new().with("n", i as i64)))
                    .collect::<List>(),
            ),
    )
}

#[test]
fn test_coalesce_scenario() {
    let tree = Value::Map(Map::new().with("id", "top").with("enabled", true));
    let (flat, errors) = engine().coalesce_map_typed(&tree, ".", ":");

    assert!(errors.is_empty());
    let expected: BTreeMap<String, String> = [("str:id", "top"), ("bool:enabled", "true")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(flat, expected);
}

#[test]
fn test_coalesce_then_diffuse_is_identity() {
    let engine = engine();
    let tree = inventory();

    let flat = engine.coalesce_map(&tree, ".");
    assert_eq!(flat.get("devices.1.uplink"), Some(&Value::Float(10.5)));
    assert_eq!(flat.len(), 7);

    assert_eq!(engine.diffuse_map(flat, "."), tree);
}

#[test]
fn test_typed_round_trip() {
    let engine = engine();
    let tree = typed_tree();

    let (flat, errors) = engine.coalesce_map_typed(&tree, ".", ":");
    assert!(errors.is_empty());
    assert_eq!(flat.get("int:items.10.n").map(String::as_str), Some("10"));
    assert_eq!(flat.get("float:ratio").map(String::as_str), Some("0.75"));
    assert_eq!(
        flat.get("time:seen").map(String::as_str),
        Some("2024-05-06T07:08:09.250+02:00")
    );

    let (back, errors) = engine.diffuse_map_typed(flat, ".", ":");
    assert!(errors.is_empty());
    assert_eq!(back, tree);
}

#[test]
fn test_custom_joiner_and_separator() {
    let engine = engine();
    let tree = inventory();

    let (flat, errors) = engine.coalesce_map_typed(&tree, "/", "|");
    assert!(errors.is_empty());
    assert_eq!(flat.get("int|devices/0/ports").map(String::as_str), Some("48"));

    let (back, _) = engine.diffuse_map_typed(flat, "/", "|");
    assert_eq!(back, tree);
}

#[test]
fn test_diffuse_typed_coerces_native_values() {
    let engine = engine();
    let flat = vec![
        ("float:ratio", Value::Int(2)),
        ("str:count", Value::Int(7)),
        ("bool:up", Value::from("on")),
        ("int:bad", Value::Bool(true)),
    ];

    let (tree, errors) = engine.diffuse_map_typed(flat, ".", ":");
    assert_eq!(
        tree,
        Value::Map(
            Map::new()
                .with("ratio", 2.0)
                .with("count", "7")
                .with("up", true)
        )
    );
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].key(), "int:bad");
}

#[test]
fn test_diffuse_typed_never_stops_early() {
    let engine = engine();
    let flat: Vec<(String, String)> = (0..5)
        .map(|i| (format!("int:n{i}"), if i % 2 == 0 { "x".into() } else { i.to_string() }))
        .collect();

    let (tree, errors) = engine.diffuse_map_typed(flat, ".", ":");
    assert_eq!(errors.len(), 3);
    assert_eq!(tree, Value::Map(Map::new().with("n1", 1).with("n3", 3)));

    let err: arbor::Error = errors.into_iter().next().unwrap().into();
    assert_eq!(err.module(), "flat");
    assert!(err.is_conversion_error());
}

#[test]
fn test_diffuse_now_uses_engine_clock() {
    let engine = Engine::with_clock(Config::default(), std::sync::Arc::new(FixedClock::new(0)));
    let (tree, errors) = engine.diffuse_map_typed([("time:at", "now")], ".", ":");

    assert!(errors.is_empty());
    assert_eq!(
        engine.get(&tree, &["at"]).and_then(|v| v.as_time().map(|t| t.timestamp())),
        Some(0)
    );
}

#[test]
fn test_records_coalesce_through_exposed_names() {
    let flat = engine().coalesce_map(&device_value(), ".");
    let keys: Vec<_> = flat.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "site", "uplink.mbps", "uplink.name"]);
}

#[test]
fn test_empty_joiner_keeps_whole_key() {
    let tree = engine().diffuse_map([("a.b", 1)], "");
    assert_eq!(tree, Value::Map(Map::new().with("a.b", 1)));
}
