mod bucket;
mod metrics;

#[cfg(test)]
mod tests;

pub use bucket::*;
pub use metrics::*;

use crate::{
    error::DslError,
    node::Node,
    serialize,
    value::{Value, ValueMap},
};
use derive_more::From;
use serde_json::{Map as JsonMap, Value as JsonValue};

///
/// Aggregation
///
/// Closed union of every aggregation the library can build. Every
/// aggregation carries its own result-bucket name; serialization emits
/// `{ <name>: { <tag>: body, "aggs": { ...children } } }`.
///

#[derive(Clone, Debug, From, PartialEq)]
pub enum Aggregation {
    Avg(AvgAggregation),
    Cardinality(CardinalityAggregation),
    ExtendedStats(ExtendedStatsAggregation),
    Max(MaxAggregation),
    Min(MinAggregation),
    Percentiles(PercentilesAggregation),
    Stats(StatsAggregation),
    Sum(SumAggregation),
    ValueCount(ValueCountAggregation),
    TopHits(TopHitsAggregation),
    Terms(TermsAggregation),
    Histogram(HistogramAggregation),
    DateHistogram(DateHistogramAggregation),
    Range(RangeAggregation),
    DateRange(DateRangeAggregation),
    Filter(FilterAggregation),
    Filters(FiltersAggregation),
    Missing(MissingAggregation),
    Global(GlobalAggregation),
    Nested(NestedAggregation),
    ReverseNested(ReverseNestedAggregation),
}

impl Aggregation {
    /// Result-bucket name this aggregation serializes under.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Avg(a) => a.name(),
            Self::Cardinality(a) => a.name(),
            Self::ExtendedStats(a) => a.name(),
            Self::Max(a) => a.name(),
            Self::Min(a) => a.name(),
            Self::Percentiles(a) => a.name(),
            Self::Stats(a) => a.name(),
            Self::Sum(a) => a.name(),
            Self::ValueCount(a) => a.name(),
            Self::TopHits(a) => a.name(),
            Self::Terms(a) => a.name(),
            Self::Histogram(a) => a.name(),
            Self::DateHistogram(a) => a.name(),
            Self::Range(a) => a.name(),
            Self::DateRange(a) => a.name(),
            Self::Filter(a) => a.name(),
            Self::Filters(a) => a.name(),
            Self::Missing(a) => a.name(),
            Self::Global(a) => a.name(),
            Self::Nested(a) => a.name(),
            Self::ReverseNested(a) => a.name(),
        }
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        match self {
            Self::Avg(a) => a.to_json(),
            Self::Cardinality(a) => a.to_json(),
            Self::ExtendedStats(a) => a.to_json(),
            Self::Max(a) => a.to_json(),
            Self::Min(a) => a.to_json(),
            Self::Percentiles(a) => a.to_json(),
            Self::Stats(a) => a.to_json(),
            Self::Sum(a) => a.to_json(),
            Self::ValueCount(a) => a.to_json(),
            Self::TopHits(a) => a.to_json(),
            Self::Terms(a) => a.to_json(),
            Self::Histogram(a) => a.to_json(),
            Self::DateHistogram(a) => a.to_json(),
            Self::Range(a) => a.to_json(),
            Self::DateRange(a) => a.to_json(),
            Self::Filter(a) => a.to_json(),
            Self::Filters(a) => a.to_json(),
            Self::Missing(a) => a.to_json(),
            Self::Global(a) => a.to_json(),
            Self::Nested(a) => a.to_json(),
            Self::ReverseNested(a) => a.to_json(),
        }
    }
}

impl From<Aggregation> for Value {
    fn from(agg: Aggregation) -> Self {
        Self::Node(Box::new(Node::Agg(agg)))
    }
}

/// Merge sibling aggregations into one `aggs` object, insertion order
/// preserved.
pub(crate) fn merge_aggs(aggs: &[Aggregation]) -> Result<JsonMap<String, JsonValue>, DslError> {
    let mut merged = JsonMap::new();
    for agg in aggs {
        if let JsonValue::Object(entries) = agg.to_json()? {
            for (key, value) in entries {
                merged.insert(key, value);
            }
        }
    }
    Ok(merged)
}

///
/// AggBody
///
/// Shared plumbing for every aggregation kind: the bucket name, the
/// tag-specific option bag, and any nested sub-aggregations.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AggBody {
    name: String,
    opts: ValueMap,
    aggs: Vec<Aggregation>,
}

impl AggBody {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            opts: ValueMap::new(),
            aggs: Vec::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn insert(&mut self, key: &'static str, value: impl Into<Value>) {
        self.opts.insert(key, value);
    }

    pub(crate) fn opts(&self) -> &ValueMap {
        &self.opts
    }

    pub(crate) fn opts_mut(&mut self) -> &mut ValueMap {
        &mut self.opts
    }

    pub(crate) fn push_agg(&mut self, agg: Aggregation) {
        self.aggs.push(agg);
    }

    /// Default shape: the option bag serialized under the tag.
    pub(crate) fn to_json(&self, tag: &'static str) -> Result<JsonValue, DslError> {
        self.to_json_with(tag, JsonValue::Object(serialize::map_to_plain(&self.opts)?))
    }

    /// Shape with a caller-provided tag body (e.g. filter aggregations,
    /// whose body is a query rather than an option bag).
    pub(crate) fn to_json_with(
        &self,
        tag: &'static str,
        tag_body: JsonValue,
    ) -> Result<JsonValue, DslError> {
        let mut inner = JsonMap::new();
        inner.insert(tag.to_string(), tag_body);
        if !self.aggs.is_empty() {
            inner.insert("aggs".to_string(), JsonValue::Object(merge_aggs(&self.aggs)?));
        }
        Ok(serialize::single(&self.name, JsonValue::Object(inner)))
    }
}
