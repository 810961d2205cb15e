use crate::{
    error::DslError,
    node::Node,
    serialize,
    value::{Value, ValueMap},
};
use serde_json::Value as JsonValue;

///
/// Script
///
/// Inline or stored script reference with parameters. Serializes to a
/// bare object, not a tagged one; the embedding node supplies the
/// `script` key.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    opts: ValueMap,
}

impl Script {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inline script body.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.opts.insert("source", source.into());
        self
    }

    /// Reference a stored script by id.
    #[must_use]
    pub fn stored(mut self, id: impl Into<String>) -> Self {
        self.opts.insert("id", id.into());
        self
    }

    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.opts.insert("lang", lang.into());
        self
    }

    /// Set one script parameter, merging into any existing `params`.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        match self.opts.get_mut("params") {
            Some(Value::Map(params)) => params.insert(name, value),
            _ => {
                let mut params = ValueMap::new();
                params.insert(name, value);
                self.opts.insert("params", params);
            }
        }
        self
    }

    /// Replace the whole parameter map.
    #[must_use]
    pub fn params(mut self, params: ValueMap) -> Self {
        self.opts.insert("params", params);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        if !self.opts.contains_key("source") && !self.opts.contains_key("id") {
            return Err(DslError::required("Script", "source"));
        }
        Ok(JsonValue::Object(serialize::map_to_plain(&self.opts)?))
    }
}

impl From<Script> for Value {
    fn from(script: Script) -> Self {
        Self::Node(Box::new(Node::Script(script)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inline_script_with_params() {
        let script = Script::new()
            .source("doc['likes'].value * params.factor")
            .lang("painless")
            .param("factor", 2);

        assert_eq!(
            script.to_json().unwrap(),
            json!({
                "source": "doc['likes'].value * params.factor",
                "lang": "painless",
                "params": { "factor": 2 }
            })
        );
    }

    #[test]
    fn params_merge_into_one_map() {
        let script = Script::new().source("x").param("a", 1).param("b", 2).param("a", 3);
        assert_eq!(
            script.to_json().unwrap(),
            json!({ "source": "x", "params": { "a": 3, "b": 2 } })
        );
    }

    #[test]
    fn stored_script_by_id() {
        let script = Script::new().stored("calculate-score");
        assert_eq!(script.to_json().unwrap(), json!({ "id": "calculate-score" }));
    }

    #[test]
    fn source_or_id_is_required() {
        let err = Script::new().lang("painless").to_json().unwrap_err();
        assert_eq!(err.to_string(), "'source' is required for Script");
    }
}
