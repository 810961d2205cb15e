mod compound;
mod full_text;
mod geo;
mod joining;
mod span;
mod specialized;
mod term_level;

#[cfg(test)]
mod tests;

pub use compound::*;
pub use full_text::*;
pub use geo::*;
pub use joining::*;
pub use span::*;
pub use specialized::*;
pub use term_level::*;

use crate::{
    error::DslError,
    node::Node,
    serialize,
    value::{Value, ValueMap},
};
use derive_more::From;
use serde_json::{Map as JsonMap, Value as JsonValue};

///
/// Query
///
/// Closed union of every query clause the library can build. Each variant
/// wraps one concrete builder; `to_json` dispatches to that builder's
/// serialized form.
///

#[derive(Clone, Debug, From, PartialEq)]
pub enum Query {
    MatchAll(MatchAllQuery),
    MatchNone(MatchNoneQuery),
    Term(TermQuery),
    Terms(TermsQuery),
    Range(RangeQuery),
    Exists(ExistsQuery),
    Prefix(PrefixQuery),
    Wildcard(WildcardQuery),
    Regexp(RegexpQuery),
    Fuzzy(FuzzyQuery),
    Ids(IdsQuery),
    Match(MatchQuery),
    MatchPhrase(MatchPhraseQuery),
    MatchPhrasePrefix(MatchPhrasePrefixQuery),
    MultiMatch(MultiMatchQuery),
    QueryString(QueryStringQuery),
    SimpleQueryString(SimpleQueryStringQuery),
    Bool(BoolQuery),
    DisMax(DisMaxQuery),
    ConstantScore(ConstantScoreQuery),
    Boosting(BoostingQuery),
    FunctionScore(FunctionScoreQuery),
    Nested(NestedQuery),
    HasChild(HasChildQuery),
    HasParent(HasParentQuery),
    ParentId(ParentIdQuery),
    SpanTerm(SpanTermQuery),
    SpanFirst(SpanFirstQuery),
    SpanNear(SpanNearQuery),
    SpanOr(SpanOrQuery),
    SpanNot(SpanNotQuery),
    SpanContaining(SpanContainingQuery),
    SpanWithin(SpanWithinQuery),
    GeoDistance(GeoDistanceQuery),
    GeoBoundingBox(GeoBoundingBoxQuery),
    MoreLikeThis(MoreLikeThisQuery),
    Script(ScriptQuery),
}

impl Query {
    /// True for the span family; span compound clauses accept only these.
    #[must_use]
    pub const fn is_span(&self) -> bool {
        matches!(
            self,
            Self::SpanTerm(_)
                | Self::SpanFirst(_)
                | Self::SpanNear(_)
                | Self::SpanOr(_)
                | Self::SpanNot(_)
                | Self::SpanContaining(_)
                | Self::SpanWithin(_)
        )
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        match self {
            Self::MatchAll(q) => q.to_json(),
            Self::MatchNone(q) => q.to_json(),
            Self::Term(q) => q.to_json(),
            Self::Terms(q) => q.to_json(),
            Self::Range(q) => q.to_json(),
            Self::Exists(q) => q.to_json(),
            Self::Prefix(q) => q.to_json(),
            Self::Wildcard(q) => q.to_json(),
            Self::Regexp(q) => q.to_json(),
            Self::Fuzzy(q) => q.to_json(),
            Self::Ids(q) => q.to_json(),
            Self::Match(q) => q.to_json(),
            Self::MatchPhrase(q) => q.to_json(),
            Self::MatchPhrasePrefix(q) => q.to_json(),
            Self::MultiMatch(q) => q.to_json(),
            Self::QueryString(q) => q.to_json(),
            Self::SimpleQueryString(q) => q.to_json(),
            Self::Bool(q) => q.to_json(),
            Self::DisMax(q) => q.to_json(),
            Self::ConstantScore(q) => q.to_json(),
            Self::Boosting(q) => q.to_json(),
            Self::FunctionScore(q) => q.to_json(),
            Self::Nested(q) => q.to_json(),
            Self::HasChild(q) => q.to_json(),
            Self::HasParent(q) => q.to_json(),
            Self::ParentId(q) => q.to_json(),
            Self::SpanTerm(q) => q.to_json(),
            Self::SpanFirst(q) => q.to_json(),
            Self::SpanNear(q) => q.to_json(),
            Self::SpanOr(q) => q.to_json(),
            Self::SpanNot(q) => q.to_json(),
            Self::SpanContaining(q) => q.to_json(),
            Self::SpanWithin(q) => q.to_json(),
            Self::GeoDistance(q) => q.to_json(),
            Self::GeoBoundingBox(q) => q.to_json(),
            Self::MoreLikeThis(q) => q.to_json(),
            Self::Script(q) => q.to_json(),
        }
    }
}

impl From<Query> for Value {
    fn from(query: Query) -> Self {
        Self::Node(Box::new(Node::Query(query)))
    }
}

///
/// FieldBody
///
/// Shared body for single-field clauses: a distinguished field name held
/// outside the generic option bag, plus the bag itself. Serializes to
/// `{ <tag>: { <field>: opts } }`, collapsing a one-entry bag holding only
/// the primary key to `{ <tag>: { <field>: <primary value> } }`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FieldBody {
    field: Option<String>,
    opts: ValueMap,
}

impl FieldBody {
    pub(crate) fn with_field(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            opts: ValueMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: impl Into<Value>) {
        self.opts.insert(key, value);
    }

    pub(crate) fn to_json(
        &self,
        node: &'static str,
        tag: &'static str,
        primary: Option<&'static str>,
    ) -> Result<JsonValue, DslError> {
        let Some(field) = &self.field else {
            return Err(DslError::required(node, "field"));
        };

        let inner = match primary {
            Some(primary) => {
                let Some(value) = self.opts.get(primary) else {
                    return Err(DslError::required(node, primary));
                };
                if self.opts.only_key() == Some(primary) {
                    serialize::to_plain(value)?
                } else {
                    JsonValue::Object(serialize::map_to_plain(&self.opts)?)
                }
            }
            None => JsonValue::Object(serialize::map_to_plain(&self.opts)?),
        };

        let mut body = JsonMap::new();
        body.insert(field.clone(), inner);
        Ok(serialize::single(tag, JsonValue::Object(body)))
    }
}

/// Append a value to a named list entry of an option bag, creating the
/// list on first use.
pub(crate) fn push_list_entry(opts: &mut ValueMap, key: &'static str, value: impl Into<Value>) {
    match opts.get_mut(key) {
        Some(Value::List(items)) => items.push(value.into()),
        _ => opts.insert(key, Value::List(vec![value.into()])),
    }
}
