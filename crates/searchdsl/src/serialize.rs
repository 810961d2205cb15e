use crate::{
    error::DslError,
    value::{Value, ValueMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Recursively lower a `Value` tree into plain JSON.
///
/// Null passes through, scalars pass through, lists and maps are rebuilt
/// elementwise with order preserved, and nested nodes dispatch to their own
/// serialization — which funnels back through here, so nesting flattens
/// fully at every depth. Every builder's serialized form is produced by
/// this function.
///
/// Fallible only because node serialization can report an unset required
/// field; a tree either lowers fully or returns that error.
pub fn to_plain(value: &Value) -> Result<JsonValue, DslError> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => JsonValue::Number(n.clone()),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(items) => {
            JsonValue::Array(items.iter().map(to_plain).collect::<Result<_, _>>()?)
        }
        Value::Map(map) => JsonValue::Object(map_to_plain(map)?),
        Value::Node(node) => node.to_json()?,
    })
}

/// Lower a `ValueMap` into a JSON object, preserving insertion order.
pub fn map_to_plain(map: &ValueMap) -> Result<JsonMap<String, JsonValue>, DslError> {
    let mut out = JsonMap::new();
    for (key, value) in map.iter() {
        out.insert(key.to_string(), to_plain(value)?);
    }
    Ok(out)
}

/// `{ <tag>: body }` — the default node wire shape.
#[must_use]
pub(crate) fn single(tag: &str, body: JsonValue) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(tag.to_string(), body);
    JsonValue::Object(out)
}

/// `{ <tag>: { ...opts } }` over a plain option bag.
pub(crate) fn wrap(tag: &str, opts: &ValueMap) -> Result<JsonValue, DslError> {
    Ok(single(tag, JsonValue::Object(map_to_plain(opts)?)))
}
