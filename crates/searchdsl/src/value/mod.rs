#[cfg(test)]
mod tests;

use crate::node::Node;
use serde_json::Number;

///
/// Value
///
/// Closed dynamic value type held inside builder option bags. A value is
/// either a JSON scalar, an ordered list, an insertion-ordered mapping, or
/// a nested builder node. The recursive serializer lowers the whole tree
/// into plain `serde_json::Value` output.
///
/// Option bags never hold an "absent" marker: setters insert concrete
/// values only. `Value::Null` is a real, serializable JSON null.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    /// Ordered sequence; element order is preserved through serialization.
    List(Vec<Self>),
    /// Keyed mapping; insertion order is preserved through serialization.
    Map(ValueMap),
    /// Nested builder node, flattened recursively at serialization time.
    Node(Box<Node>),
}

impl Value {
    /// True iff this is the null value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for null, empty text, empty list, and empty map.
    /// Numeric zero and `false` are not empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Bool(_) | Self::Number(_) | Self::Node(_) => false,
        }
    }

    /// First element of a list, `None` for empty lists and non-lists.
    #[must_use]
    pub fn first(&self) -> Option<&Self> {
        match self {
            Self::List(items) => items.first(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_node(&self) -> Option<&Node> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Build a list value from any iterator of convertible items.
    pub fn list<V: Into<Self>>(items: impl IntoIterator<Item = V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

///
/// ValueMap
///
/// String-keyed mapping that preserves insertion order. Overwriting an
/// existing key keeps the key's original position, matching the order
/// semantics of the serialized wire format.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueMap {
    entries: Vec<(String, Value)>,
}

impl ValueMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or overwrite an entry. Overwrites keep the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Own-key membership test.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The single key of a one-entry map, `None` otherwise.
    #[must_use]
    pub fn only_key(&self) -> Option<&str> {
        match self.entries.as_slice() {
            [(key, _)] => Some(key),
            _ => None,
        }
    }
}

/// New mapping with every entry of `map` except the named keys.
/// A `None` input yields an empty mapping rather than failing.
#[must_use]
pub fn omit(map: Option<&ValueMap>, keys: &[&str]) -> ValueMap {
    let mut out = ValueMap::new();
    if let Some(map) = map {
        for (key, value) in map.iter() {
            if !keys.contains(&key) {
                out.insert(key, value.clone());
            }
        }
    }
    out
}

// ─────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Number(Number::from(value))
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no JSON representation and lower to null.
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Self::Map(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Self::Node(Box::new(value))
    }
}

impl<V: Into<Self>> From<Vec<V>> for Value {
    fn from(value: Vec<V>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => {
                let mut map = ValueMap::new();
                for (k, v) in entries {
                    map.insert(k, Self::from(v));
                }
                Self::Map(map)
            }
        }
    }
}
