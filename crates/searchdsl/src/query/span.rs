use super::{FieldBody, Query, push_list_entry};
use crate::{
    error::DslError,
    serialize, validate,
    validate::Capability,
    value::{Value, ValueMap},
};
use serde_json::Value as JsonValue;

/// Wrap a query for embedding in a span compound clause, checking span
/// conformance eagerly at the setter.
fn span_clause(query: impl Into<Query>) -> Result<Value, DslError> {
    let clause = Value::from(query.into());
    validate::instance_of(&clause, Capability::SpanQuery)?;
    Ok(clause)
}

///
/// SpanTermQuery
///
/// Span-capable variant of the term query; same collapse rule.
///

#[derive(Clone, Debug, PartialEq)]
pub struct SpanTermQuery {
    body: FieldBody,
}

impl SpanTermQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_field(field),
        }
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("value", value);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("SpanTermQuery", "span_term", Some("value"))
    }
}

///
/// SpanFirstQuery
///
/// Matches spans near the beginning of a field: `{ span_first: { match, end } }`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanFirstQuery {
    opts: ValueMap,
}

impl SpanFirstQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inner span clause; non-span queries are rejected eagerly.
    pub fn matches(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        self.opts.insert("match", clause);
        Ok(self)
    }

    /// Maximum end position for the inner span.
    #[must_use]
    pub fn end(mut self, end: u64) -> Self {
        self.opts.insert("end", end);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "SpanFirstQuery", "match")?;
        serialize::wrap("span_first", &self.opts)
    }
}

///
/// SpanNearQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanNearQuery {
    opts: ValueMap,
}

impl SpanNearQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one span clause; non-span queries are rejected eagerly.
    pub fn clause(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        push_list_entry(&mut self.opts, "clauses", clause);
        Ok(self)
    }

    #[must_use]
    pub fn slop(mut self, slop: u64) -> Self {
        self.opts.insert("slop", slop);
        self
    }

    #[must_use]
    pub fn in_order(mut self, in_order: bool) -> Self {
        self.opts.insert("in_order", in_order);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "SpanNearQuery", "clauses")?;
        serialize::wrap("span_near", &self.opts)
    }
}

///
/// SpanOrQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanOrQuery {
    opts: ValueMap,
}

impl SpanOrQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clause(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        push_list_entry(&mut self.opts, "clauses", clause);
        Ok(self)
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "SpanOrQuery", "clauses")?;
        serialize::wrap("span_or", &self.opts)
    }
}

///
/// SpanNotQuery
///
/// Matches `include` spans that do not overlap `exclude` spans.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanNotQuery {
    opts: ValueMap,
}

impl SpanNotQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        self.opts.insert("include", clause);
        Ok(self)
    }

    pub fn exclude(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        self.opts.insert("exclude", clause);
        Ok(self)
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "SpanNotQuery", "include")?;
        validate::require_key(&self.opts, "SpanNotQuery", "exclude")?;
        serialize::wrap("span_not", &self.opts)
    }
}

///
/// SpanContainingQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanContainingQuery {
    opts: ValueMap,
}

impl SpanContainingQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn little(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        self.opts.insert("little", clause);
        Ok(self)
    }

    pub fn big(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        self.opts.insert("big", clause);
        Ok(self)
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "SpanContainingQuery", "little")?;
        validate::require_key(&self.opts, "SpanContainingQuery", "big")?;
        serialize::wrap("span_containing", &self.opts)
    }
}

///
/// SpanWithinQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanWithinQuery {
    opts: ValueMap,
}

impl SpanWithinQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn little(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        self.opts.insert("little", clause);
        Ok(self)
    }

    pub fn big(mut self, query: impl Into<Query>) -> Result<Self, DslError> {
        let clause = span_clause(query)?;
        self.opts.insert("big", clause);
        Ok(self)
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "SpanWithinQuery", "little")?;
        validate::require_key(&self.opts, "SpanWithinQuery", "big")?;
        serialize::wrap("span_within", &self.opts)
    }
}
