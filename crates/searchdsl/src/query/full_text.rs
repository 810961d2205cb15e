use super::{FieldBody, push_list_entry};
use crate::{
    error::DslError,
    serialize, validate,
    validate::{MatchType, Operator, ZeroTermsQuery},
    value::{Value, ValueMap},
};
use serde_json::Value as JsonValue;

///
/// MatchQuery
///
/// Analyzed full-text match on one field. Requires `query` at
/// serialization; a bag holding only `query` collapses to
/// `{ match: { <field>: <query> } }`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct MatchQuery {
    body: FieldBody,
}

impl MatchQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_field(field),
        }
    }

    /// Text to analyze and match.
    #[must_use]
    pub fn query(mut self, query: impl Into<Value>) -> Self {
        self.body.insert("query", query);
        self
    }

    #[must_use]
    pub fn operator(mut self, operator: Operator) -> Self {
        self.body.insert("operator", operator);
        self
    }

    #[must_use]
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.body.insert("analyzer", analyzer.into());
        self
    }

    #[must_use]
    pub fn fuzziness(mut self, fuzziness: impl Into<Value>) -> Self {
        self.body.insert("fuzziness", fuzziness);
        self
    }

    #[must_use]
    pub fn prefix_length(mut self, length: u64) -> Self {
        self.body.insert("prefix_length", length);
        self
    }

    #[must_use]
    pub fn max_expansions(mut self, expansions: u64) -> Self {
        self.body.insert("max_expansions", expansions);
        self
    }

    #[must_use]
    pub fn minimum_should_match(mut self, minimum: impl Into<Value>) -> Self {
        self.body.insert("minimum_should_match", minimum);
        self
    }

    #[must_use]
    pub fn zero_terms_query(mut self, zero_terms: ZeroTermsQuery) -> Self {
        self.body.insert("zero_terms_query", zero_terms);
        self
    }

    #[must_use]
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.body.insert("lenient", lenient);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("MatchQuery", "match", Some("query"))
    }
}

///
/// MatchPhraseQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct MatchPhraseQuery {
    body: FieldBody,
}

impl MatchPhraseQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_field(field),
        }
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Value>) -> Self {
        self.body.insert("query", query);
        self
    }

    /// Allowed token distance between phrase terms.
    #[must_use]
    pub fn slop(mut self, slop: u64) -> Self {
        self.body.insert("slop", slop);
        self
    }

    #[must_use]
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.body.insert("analyzer", analyzer.into());
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body
            .to_json("MatchPhraseQuery", "match_phrase", Some("query"))
    }
}

///
/// MatchPhrasePrefixQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct MatchPhrasePrefixQuery {
    body: FieldBody,
}

impl MatchPhrasePrefixQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_field(field),
        }
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Value>) -> Self {
        self.body.insert("query", query);
        self
    }

    #[must_use]
    pub fn slop(mut self, slop: u64) -> Self {
        self.body.insert("slop", slop);
        self
    }

    #[must_use]
    pub fn max_expansions(mut self, expansions: u64) -> Self {
        self.body.insert("max_expansions", expansions);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body
            .to_json("MatchPhrasePrefixQuery", "match_phrase_prefix", Some("query"))
    }
}

///
/// MultiMatchQuery
///
/// Full-text match across several fields:
/// `{ multi_match: { query, fields: [...], ... } }`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiMatchQuery {
    opts: ValueMap,
}

impl MultiMatchQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Value>) -> Self {
        self.opts.insert("query", query);
        self
    }

    /// Append one target field; `field^boost` notation is passed through.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        push_list_entry(&mut self.opts, "fields", field.into());
        self
    }

    #[must_use]
    pub fn fields<F: Into<String>>(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        for field in fields {
            push_list_entry(&mut self.opts, "fields", field.into());
        }
        self
    }

    /// Execution strategy (`best_fields`, `phrase`, ...).
    #[must_use]
    pub fn kind(mut self, kind: MatchType) -> Self {
        self.opts.insert("type", kind);
        self
    }

    #[must_use]
    pub fn tie_breaker(mut self, tie_breaker: f64) -> Self {
        self.opts.insert("tie_breaker", tie_breaker);
        self
    }

    #[must_use]
    pub fn operator(mut self, operator: Operator) -> Self {
        self.opts.insert("operator", operator);
        self
    }

    #[must_use]
    pub fn minimum_should_match(mut self, minimum: impl Into<Value>) -> Self {
        self.opts.insert("minimum_should_match", minimum);
        self
    }

    #[must_use]
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.opts.insert("analyzer", analyzer.into());
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "MultiMatchQuery", "query")?;
        serialize::wrap("multi_match", &self.opts)
    }
}

///
/// QueryStringQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryStringQuery {
    opts: ValueMap,
}

impl QueryStringQuery {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let mut opts = ValueMap::new();
        opts.insert("query", query.into());
        Self { opts }
    }

    #[must_use]
    pub fn default_field(mut self, field: impl Into<String>) -> Self {
        self.opts.insert("default_field", field.into());
        self
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        push_list_entry(&mut self.opts, "fields", field.into());
        self
    }

    #[must_use]
    pub fn fields<F: Into<String>>(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        for field in fields {
            push_list_entry(&mut self.opts, "fields", field.into());
        }
        self
    }

    #[must_use]
    pub fn default_operator(mut self, operator: Operator) -> Self {
        self.opts.insert("default_operator", operator);
        self
    }

    #[must_use]
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.opts.insert("analyzer", analyzer.into());
        self
    }

    #[must_use]
    pub fn allow_leading_wildcard(mut self, allow: bool) -> Self {
        self.opts.insert("allow_leading_wildcard", allow);
        self
    }

    #[must_use]
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.opts.insert("lenient", lenient);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "QueryStringQuery", "query")?;
        serialize::wrap("query_string", &self.opts)
    }
}

///
/// SimpleQueryStringQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimpleQueryStringQuery {
    opts: ValueMap,
}

impl SimpleQueryStringQuery {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let mut opts = ValueMap::new();
        opts.insert("query", query.into());
        Self { opts }
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        push_list_entry(&mut self.opts, "fields", field.into());
        self
    }

    #[must_use]
    pub fn fields<F: Into<String>>(mut self, fields: impl IntoIterator<Item = F>) -> Self {
        for field in fields {
            push_list_entry(&mut self.opts, "fields", field.into());
        }
        self
    }

    #[must_use]
    pub fn default_operator(mut self, operator: Operator) -> Self {
        self.opts.insert("default_operator", operator);
        self
    }

    #[must_use]
    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.opts.insert("analyzer", analyzer.into());
        self
    }

    /// Enabled operator set, `|`-separated (e.g. `"AND|OR|PREFIX"`).
    #[must_use]
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.opts.insert("flags", flags.into());
        self
    }

    #[must_use]
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.opts.insert("lenient", lenient);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "SimpleQueryStringQuery", "query")?;
        serialize::wrap("simple_query_string", &self.opts)
    }
}
