use crate::{
    error::DslError,
    node::Node,
    script::Script,
    serialize,
    validate::{SortMode, SortOrder},
    value::{Value, ValueMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

///
/// Sort
///
/// One sort clause. A field sort with no options collapses to the bare
/// field name; anything richer serializes as `{ <field>: { ...opts } }`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Sort {
    key: SortKey,
    opts: ValueMap,
}

#[derive(Clone, Debug, PartialEq)]
enum SortKey {
    Field(String),
    Script(Script),
}

impl Sort {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            key: SortKey::Field(field.into()),
            opts: ValueMap::new(),
        }
    }

    /// Sort by a script result instead of a field.
    #[must_use]
    pub fn by_script(script: Script, kind: impl Into<String>) -> Self {
        let mut opts = ValueMap::new();
        opts.insert("type", kind.into());
        Self {
            key: SortKey::Script(script),
            opts,
        }
    }

    #[must_use]
    pub fn order(mut self, order: SortOrder) -> Self {
        self.opts.insert("order", order);
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: SortMode) -> Self {
        self.opts.insert("mode", mode);
        self
    }

    /// Placement of documents missing the field, e.g. `"_last"`.
    #[must_use]
    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.opts.insert("missing", missing);
        self
    }

    #[must_use]
    pub fn unmapped_type(mut self, unmapped_type: impl Into<String>) -> Self {
        self.opts.insert("unmapped_type", unmapped_type.into());
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        match &self.key {
            SortKey::Field(field) => {
                if self.opts.is_empty() {
                    return Ok(JsonValue::String(field.clone()));
                }
                let mut out = JsonMap::new();
                out.insert(
                    field.clone(),
                    JsonValue::Object(serialize::map_to_plain(&self.opts)?),
                );
                Ok(JsonValue::Object(out))
            }
            SortKey::Script(script) => {
                let mut inner = JsonMap::new();
                inner.insert("script".to_string(), script.to_json()?);
                for (key, value) in self.opts.iter() {
                    inner.insert(key.to_string(), serialize::to_plain(value)?);
                }
                Ok(serialize::single("_script", JsonValue::Object(inner)))
            }
        }
    }
}

impl From<Sort> for Value {
    fn from(sort: Sort) -> Self {
        Self::Node(Box::new(Node::Sort(sort)))
    }
}
