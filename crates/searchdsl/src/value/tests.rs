use super::*;

#[test]
fn emptiness_covers_nil_and_zero_length_containers() {
    assert!(Value::Null.is_empty());
    assert!(Value::from("").is_empty());
    assert!(Value::List(Vec::new()).is_empty());
    assert!(Value::Map(ValueMap::new()).is_empty());

    // Numeric zero and boolean false are values, not emptiness.
    assert!(!Value::from(0_i64).is_empty());
    assert!(!Value::from(false).is_empty());
    assert!(!Value::from("x").is_empty());
}

#[test]
fn first_returns_none_for_empty_and_non_lists() {
    assert_eq!(Value::list(["a", "b"]).first(), Some(&Value::from("a")));
    assert_eq!(Value::List(Vec::new()).first(), None);
    assert_eq!(Value::from("abc").first(), None);
    assert_eq!(Value::Null.first(), None);
}

#[test]
fn insert_overwrites_in_place_keeping_key_position() {
    let mut map = ValueMap::new();
    map.insert("a", 1_i64);
    map.insert("b", 2_i64);
    map.insert("a", 3_i64);

    let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(map.get("a"), Some(&Value::from(3_i64)));
    assert_eq!(map.len(), 2);
}

#[test]
fn only_key_identifies_single_entry_maps() {
    let mut map = ValueMap::new();
    map.insert("value", "kimchy");
    assert_eq!(map.only_key(), Some("value"));

    map.insert("boost", 2_i64);
    assert_eq!(map.only_key(), None);
}

#[test]
fn omit_drops_named_keys_and_tolerates_nil() {
    let mut map = ValueMap::new();
    map.insert("a", 1_i64);
    map.insert("b", 2_i64);
    map.insert("c", 3_i64);

    let out = omit(Some(&map), &["b"]);
    let keys: Vec<&str> = out.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["a", "c"]);
    assert_eq!(out.get("a"), Some(&Value::from(1_i64)));

    assert!(omit(None, &["a"]).is_empty());
}

#[test]
fn non_finite_floats_lower_to_null() {
    assert_eq!(Value::from(f64::NAN), Value::Null);
    assert_eq!(Value::from(f64::INFINITY), Value::Null);
    assert!(matches!(Value::from(1.5_f64), Value::Number(_)));
}

#[test]
fn json_values_convert_structurally() {
    let value = Value::from(serde_json::json!({
        "origin": "11,12",
        "scale": "2km",
        "levels": [1, 2],
    }));

    let Value::Map(map) = value else {
        panic!("expected map conversion");
    };
    assert_eq!(map.get("origin"), Some(&Value::from("11,12")));
    assert_eq!(
        map.get("levels"),
        Some(&Value::list([1_i64, 2_i64]))
    );
}
