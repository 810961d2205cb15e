use crate::{
    error::DslError,
    node::Node,
    serialize,
    value::{Value, ValueMap},
};
use serde_json::Value as JsonValue;

///
/// Highlight
///
/// Result-snippet highlighting settings: global options plus a
/// per-field map, serialized as `{ ...opts, fields: { <name>: opts } }`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
    opts: ValueMap,
    fields: ValueMap,
}

impl Highlight {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pre_tags<T: Into<Value>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
        self.opts.insert("pre_tags", Value::list(tags));
        self
    }

    #[must_use]
    pub fn post_tags<T: Into<Value>>(mut self, tags: impl IntoIterator<Item = T>) -> Self {
        self.opts.insert("post_tags", Value::list(tags));
        self
    }

    /// Snippet encoder, `"default"` or `"html"`.
    #[must_use]
    pub fn encoder(mut self, encoder: impl Into<String>) -> Self {
        self.opts.insert("encoder", encoder.into());
        self
    }

    #[must_use]
    pub fn fragment_size(mut self, size: u64) -> Self {
        self.opts.insert("fragment_size", size);
        self
    }

    #[must_use]
    pub fn number_of_fragments(mut self, count: u64) -> Self {
        self.opts.insert("number_of_fragments", count);
        self
    }

    /// Highlight a field with default settings.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name, ValueMap::new());
        self
    }

    #[must_use]
    pub fn fields<F: Into<String>>(mut self, names: impl IntoIterator<Item = F>) -> Self {
        for name in names {
            self.fields.insert(name, ValueMap::new());
        }
        self
    }

    /// Highlight a field with per-field option overrides.
    #[must_use]
    pub fn field_with(mut self, name: impl Into<String>, opts: ValueMap) -> Self {
        self.fields.insert(name, opts);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let mut out = serialize::map_to_plain(&self.opts)?;
        out.insert(
            "fields".to_string(),
            JsonValue::Object(serialize::map_to_plain(&self.fields)?),
        );
        Ok(JsonValue::Object(out))
    }
}

impl From<Highlight> for Value {
    fn from(highlight: Highlight) -> Self {
        Self::Node(Box::new(Node::Highlight(highlight)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map as JsonMap, json};

    #[test]
    fn fields_and_tags() {
        let highlight = Highlight::new()
            .pre_tags(["<em>"])
            .post_tags(["</em>"])
            .field("title")
            .field("body");

        assert_eq!(
            highlight.to_json().unwrap(),
            json!({
                "pre_tags": ["<em>"],
                "post_tags": ["</em>"],
                "fields": { "title": {}, "body": {} }
            })
        );
    }

    #[test]
    fn per_field_overrides() {
        let mut overrides = ValueMap::new();
        overrides.insert("fragment_size", 150_u64);

        let highlight = Highlight::new().field_with("body", overrides);
        let mut empty = JsonMap::new();
        empty.insert(
            "fields".to_string(),
            json!({ "body": { "fragment_size": 150 } }),
        );
        assert_eq!(highlight.to_json().unwrap(), JsonValue::Object(empty));
    }
}
