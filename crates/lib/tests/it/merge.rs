use arbor::{List, Map, MergeError, Value};

use crate::helpers::*;

fn single(key: &str, value: impl Into<Value>) -> Value {
    Value::Map(Map::new().with(key, value))
}

#[test]
fn test_merge_accumulates_conflicts() {
    let engine = engine();

    let once = engine.merge(&single("a", 1), &single("a", 2)).unwrap();
    assert_eq!(once, single("a", List::new().with(1).with(2)));

    let twice = engine.merge(&once, &single("a", 3)).unwrap();
    assert_eq!(twice, single("a", List::new().with(1).with(2).with(3)));
}

#[test]
fn test_merge_with_itself_keeps_leaves() {
    let engine = engine();
    let tree = inventory();
    assert_eq!(engine.merge(&tree, &tree).unwrap(), tree);
}

#[test]
fn test_merge_disjoint_trees() {
    let engine = engine();
    let first = Value::Map(Map::new().with("a", Map::new().with("x", 1)));
    let second = Value::Map(Map::new().with("a", Map::new().with("y", 2)).with("b", "new"));

    let merged = engine.merge(&first, &second).unwrap();
    assert_eq!(
        merged,
        Value::Map(
            Map::new()
                .with("a", Map::new().with("x", 1).with("y", 2))
                .with("b", "new")
        )
    );
}

#[test]
fn test_merge_record_into_map() {
    let engine = engine();
    let first = Value::Map(Map::new().with("site", "ams1").with("rack", 4));

    let merged = engine.merge(&first, &device_value()).unwrap();
    let merged = merged.as_map().unwrap();

    // equal leaves collapse, new ones are added
    assert_eq!(merged.get("site"), Some(&Value::from("ams1")));
    assert_eq!(merged.get("id"), Some(&Value::from("sw0")));
    assert_eq!(merged.get("rack"), Some(&Value::Int(4)));
    assert!(merged.get("secret").is_none());
}

#[test]
fn test_merge_rejects_scalar_and_list_roots() {
    let engine = engine();

    for (first, second, side) in [
        (Value::from("text"), single("a", 1), "first"),
        (single("a", 1), Value::List(List::new()), "second"),
    ] {
        let err = engine.merge(&first, &second).unwrap_err();
        assert!(matches!(err, MergeError::RootNotMap { side: s, .. } if s == side));
    }
}
