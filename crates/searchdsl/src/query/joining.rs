use super::Query;
use crate::{
    error::DslError,
    serialize,
    validate::ScoreMode,
    value::{Value, ValueMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// `{ <tag>: { <fixed keys>, <inner query>, ...opts } }` shared by the
/// joining clauses; the inner query is always required.
fn join_to_json(
    node: &'static str,
    tag: &'static str,
    fixed: &[(&'static str, &Value)],
    query_key: &'static str,
    query: Option<&Query>,
    opts: &ValueMap,
) -> Result<JsonValue, DslError> {
    let Some(query) = query else {
        return Err(DslError::required(node, query_key));
    };
    let mut body = JsonMap::new();
    for (key, value) in fixed {
        body.insert((*key).to_string(), serialize::to_plain(value)?);
    }
    body.insert(query_key.to_string(), query.to_json()?);
    for (key, value) in opts.iter() {
        body.insert(key.to_string(), serialize::to_plain(value)?);
    }
    Ok(serialize::single(tag, JsonValue::Object(body)))
}

///
/// NestedQuery
///
/// Runs an inner query against nested documents under `path`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct NestedQuery {
    path: Value,
    query: Option<Box<Query>>,
    opts: ValueMap,
}

impl NestedQuery {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Value::Text(path.into()),
            query: None,
            opts: ValueMap::new(),
        }
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(Box::new(query.into()));
        self
    }

    /// How matching child hits contribute to the parent score.
    #[must_use]
    pub fn score_mode(mut self, mode: ScoreMode) -> Self {
        self.opts.insert("score_mode", mode);
        self
    }

    #[must_use]
    pub fn ignore_unmapped(mut self, ignore: bool) -> Self {
        self.opts.insert("ignore_unmapped", ignore);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        join_to_json(
            "NestedQuery",
            "nested",
            &[("path", &self.path)],
            "query",
            self.query.as_deref(),
            &self.opts,
        )
    }
}

///
/// HasChildQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct HasChildQuery {
    child_type: Value,
    query: Option<Box<Query>>,
    opts: ValueMap,
}

impl HasChildQuery {
    #[must_use]
    pub fn new(child_type: impl Into<String>) -> Self {
        Self {
            child_type: Value::Text(child_type.into()),
            query: None,
            opts: ValueMap::new(),
        }
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(Box::new(query.into()));
        self
    }

    #[must_use]
    pub fn score_mode(mut self, mode: ScoreMode) -> Self {
        self.opts.insert("score_mode", mode);
        self
    }

    #[must_use]
    pub fn min_children(mut self, min: u64) -> Self {
        self.opts.insert("min_children", min);
        self
    }

    #[must_use]
    pub fn max_children(mut self, max: u64) -> Self {
        self.opts.insert("max_children", max);
        self
    }

    #[must_use]
    pub fn ignore_unmapped(mut self, ignore: bool) -> Self {
        self.opts.insert("ignore_unmapped", ignore);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        join_to_json(
            "HasChildQuery",
            "has_child",
            &[("type", &self.child_type)],
            "query",
            self.query.as_deref(),
            &self.opts,
        )
    }
}

///
/// HasParentQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct HasParentQuery {
    parent_type: Value,
    query: Option<Box<Query>>,
    opts: ValueMap,
}

impl HasParentQuery {
    #[must_use]
    pub fn new(parent_type: impl Into<String>) -> Self {
        Self {
            parent_type: Value::Text(parent_type.into()),
            query: None,
            opts: ValueMap::new(),
        }
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(Box::new(query.into()));
        self
    }

    /// Pass the parent's score through to matching children.
    #[must_use]
    pub fn score(mut self, score: bool) -> Self {
        self.opts.insert("score", score);
        self
    }

    #[must_use]
    pub fn ignore_unmapped(mut self, ignore: bool) -> Self {
        self.opts.insert("ignore_unmapped", ignore);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        join_to_json(
            "HasParentQuery",
            "has_parent",
            &[("parent_type", &self.parent_type)],
            "query",
            self.query.as_deref(),
            &self.opts,
        )
    }
}

///
/// ParentIdQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct ParentIdQuery {
    opts: ValueMap,
}

impl ParentIdQuery {
    #[must_use]
    pub fn new(child_type: impl Into<String>, id: impl Into<Value>) -> Self {
        let mut opts = ValueMap::new();
        opts.insert("type", child_type.into());
        opts.insert("id", id);
        Self { opts }
    }

    #[must_use]
    pub fn ignore_unmapped(mut self, ignore: bool) -> Self {
        self.opts.insert("ignore_unmapped", ignore);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        serialize::wrap("parent_id", &self.opts)
    }
}
