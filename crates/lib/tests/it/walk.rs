use std::{collections::BTreeMap, convert::Infallible};

use arbor::{Config, Engine, Map, Value, Visit};

use crate::helpers::*;

/// Collects every visited path with its leaf flag
fn visits(engine: &Engine, tree: &Value) -> BTreeMap<String, bool> {
    let mut seen = BTreeMap::new();
    engine
        .walk(tree, |_, path, is_leaf| {
            let previous = seen.insert(path.join("."), is_leaf);
            assert!(previous.is_none(), "visited {path} twice");
            Ok::<_, Infallible>(Visit::Continue)
        })
        .unwrap();
    seen
}

#[test]
fn test_walk_visits_each_node_once() {
    let seen = visits(&engine(), &inventory());

    let leaves: Vec<_> = seen.iter().filter(|(_, leaf)| **leaf).map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        leaves,
        vec![
            "devices.0.name",
            "devices.0.ports",
            "devices.1.name",
            "devices.1.ports",
            "devices.1.uplink",
            "enabled",
            "id",
        ]
    );

    let containers: Vec<_> = seen.iter().filter(|(_, leaf)| !**leaf).map(|(p, _)| p.as_str()).collect();
    assert_eq!(containers, vec!["", "devices", "devices.0", "devices.1"]);
}

#[test]
fn test_walk_list_order() {
    let engine = engine();
    let tree = Value::List((0..20).map(Value::Int).collect());
    let mut order = Vec::new();

    engine
        .walk(&tree, |node, _, is_leaf| {
            if is_leaf {
                order.push(node.as_int().unwrap());
            }
            Ok::<_, Infallible>(Visit::Continue)
        })
        .unwrap();

    assert_eq!(order, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_walk_record_fields_in_declaration_order() {
    let engine = engine();
    let mut paths = Vec::new();

    engine
        .walk(&device_value(), |_, path, is_leaf| {
            paths.push((path.join("."), is_leaf));
            Ok::<_, Infallible>(Visit::Continue)
        })
        .unwrap();

    let paths: Vec<_> = paths.iter().map(|(p, l)| (p.as_str(), *l)).collect();
    assert_eq!(
        paths,
        vec![
            ("", false),
            ("id", true),
            ("site", true),
            ("uplink", false),
            ("uplink.name", true),
            ("uplink.mbps", true),
        ]
    );
}

#[test]
fn test_skip_descendants_on_list() {
    let engine = engine();
    let mut leaves = 0;

    let result = engine.walk(&inventory(), |_, path, is_leaf| {
        if is_leaf {
            leaves += 1;
        }
        if path.last() == Some("devices") {
            return Ok::<_, Infallible>(Visit::SkipDescendants);
        }
        Ok(Visit::Continue)
    });

    assert!(result.is_ok());
    // only id and enabled
    assert_eq!(leaves, 2);
}

#[derive(Debug, PartialEq)]
struct Found(String);

#[test]
fn test_abort_returns_callback_error_unchanged() {
    let engine = engine();
    let mut after = 0;

    let result = engine.walk(&inventory(), |node, path, _| {
        if node == &Value::from("sw1") {
            return Err(Found(path.join("/")));
        }
        after += 1;
        Ok(Visit::Continue)
    });

    assert_eq!(result, Err(Found("devices/1/name".to_string())));
    assert!(after > 0);
}

#[test]
fn test_depth_limit_is_configurable() {
    let mut tree = Value::Map(Map::new());
    let deep: Vec<String> = (0..40).map(|i| format!("k{i}")).collect();
    Engine::default().set(&mut tree, &deep, "bottom");
    let engine = Engine::new(Config {
        max_depth: 10,
        ..Config::default()
    });

    let seen = visits(&engine, &tree);
    assert!(seen.values().all(|leaf| !leaf));
    assert_eq!(seen.keys().map(|p| p.split('.').count()).max(), Some(10));

    let seen = visits(&Engine::default(), &tree);
    assert_eq!(seen.values().filter(|leaf| **leaf).count(), 1);
}
