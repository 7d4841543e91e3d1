use arbor::{List, Map, PathBuf, Value};
use chrono::DateTime;

use crate::helpers::*;

#[test]
fn test_compact_inventory() {
    let engine = engine();
    let mut tree = inventory();
    engine.set(&mut tree, &["note"], "  ");
    engine.set(&mut tree, &["devices", "0", "ports"], 0);

    let compacted = engine.compact(&tree);

    assert!(engine.get(&compacted, &["note"]).is_none());
    assert_eq!(
        engine.get(&compacted, &["devices", "1", "ports"]).as_deref(),
        Some(&Value::Int(24))
    );
    assert_eq!(engine.compact(&compacted), compacted);
}

#[test]
fn test_compact_keeps_timestamps() {
    let at = DateTime::parse_from_rfc3339("1970-01-01T00:00:00Z").unwrap();
    let tree = Value::Map(Map::new().with("at", at));
    assert_eq!(engine().compact(&tree), tree);
}

#[test]
fn test_apply_by_path() {
    let engine = engine();
    let out = engine.apply(&inventory(), |path, leaf| {
        (path.last() == Some("ports")).then(|| Value::Int(leaf.as_int().unwrap_or(0) + 1))
    });

    assert_eq!(
        engine.get(&out, &["devices", "0", "ports"]).as_deref(),
        Some(&Value::Int(49))
    );
    assert_eq!(engine.get(&out, &["id"]).as_deref(), Some(&Value::from("top")));
}

#[test]
fn test_apply_list_root() {
    let tree = Value::List(List::new().with("a").with("b"));
    let mut paths = Vec::new();

    let out = engine().apply(&tree, |path: &PathBuf, leaf| {
        paths.push(path.join("."));
        leaf.as_text().map(str::to_uppercase).map(Value::from)
    });

    assert_eq!(out, Value::List(List::new().with("A").with("B")));
    assert_eq!(paths, vec!["0", "1"]);
}

#[test]
fn test_stringify_and_autotype_inventory() {
    let engine = engine();
    let text = engine.stringify(&inventory());

    let mut leaves = Vec::new();
    engine
        .walk(&text, |node, _, is_leaf| {
            if is_leaf {
                leaves.push(node.clone());
            }
            Ok::<_, std::convert::Infallible>(arbor::Visit::Continue)
        })
        .unwrap();
    assert!(leaves.iter().all(|leaf| leaf.as_text().is_some()));

    assert_eq!(engine.autotype(&text), inventory());
}

#[test]
fn test_autotype_detects_time_but_not_now() {
    let engine = engine();
    let tree = Value::Map(
        Map::new()
            .with("at", "2024-01-02")
            .with("when", "now")
            .with("dot", "."),
    );

    let typed = engine.autotype(&tree);
    assert!(engine.get(&typed, &["at"]).unwrap().as_time().is_some());
    assert_eq!(engine.get(&typed, &["when"]).as_deref(), Some(&Value::from("now")));
    assert_eq!(engine.get(&typed, &["dot"]).as_deref(), Some(&Value::from(".")));
}
