use crate::{
    aggs::{Aggregation, merge_aggs},
    error::DslError,
    highlight::Highlight,
    query::Query,
    script::Script,
    serialize,
    sort::Sort,
    validate::RuntimeFieldType,
    value::{Value, ValueMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

///
/// RuntimeField
///
/// Search-time field mapping computed by a script.
///

#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeField {
    kind: RuntimeFieldType,
    script: Option<Script>,
}

impl RuntimeField {
    #[must_use]
    pub const fn new(kind: RuntimeFieldType) -> Self {
        Self { kind, script: None }
    }

    #[must_use]
    pub fn script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let mut out = JsonMap::new();
        out.insert(
            "type".to_string(),
            JsonValue::String(self.kind.as_str().to_string()),
        );
        if let Some(script) = &self.script {
            out.insert("script".to_string(), script.to_json()?);
        }
        Ok(JsonValue::Object(out))
    }
}

///
/// RequestBodySearch
///
/// Top-level search request body. Assembles the query, aggregations,
/// sort clauses, runtime mappings, and scalar options into the final
/// JSON object, preserving the order sections were added in.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestBodySearch {
    body: ValueMap,
    aggs: Vec<Aggregation>,
    sorts: Vec<Sort>,
    runtime: Vec<(String, RuntimeField)>,
}

impl RequestBodySearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.body.insert("query", query.into());
        self
    }

    /// Append a top-level aggregation; siblings merge under one `aggs`.
    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.aggs.push(agg.into());
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    #[must_use]
    pub fn from(mut self, from: u64) -> Self {
        self.body.insert("from", from);
        self
    }

    #[must_use]
    pub fn size(mut self, size: u64) -> Self {
        self.body.insert("size", size);
        self
    }

    /// Per-shard time limit, e.g. `"2s"`.
    #[must_use]
    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.body.insert("timeout", timeout.into());
        self
    }

    #[must_use]
    pub fn min_score(mut self, min_score: f64) -> Self {
        self.body.insert("min_score", min_score);
        self
    }

    /// Exact hit counting: a bool or an upper-bound count.
    #[must_use]
    pub fn track_total_hits(mut self, track: impl Into<Value>) -> Self {
        self.body.insert("track_total_hits", track);
        self
    }

    #[must_use]
    pub fn version(mut self, version: bool) -> Self {
        self.body.insert("version", version);
        self
    }

    #[must_use]
    pub fn explain(mut self, explain: bool) -> Self {
        self.body.insert("explain", explain);
        self
    }

    /// Filter applied after aggregations are computed.
    #[must_use]
    pub fn post_filter(mut self, filter: impl Into<Query>) -> Self {
        self.body.insert("post_filter", filter.into());
        self
    }

    /// Source filtering: `false`, a field pattern, or an include list.
    #[must_use]
    pub fn source(mut self, source: impl Into<Value>) -> Self {
        self.body.insert("_source", source);
        self
    }

    #[must_use]
    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.body.insert("highlight", highlight);
        self
    }

    /// Define one search-time runtime field.
    #[must_use]
    pub fn runtime_mapping(mut self, name: impl Into<String>, field: RuntimeField) -> Self {
        self.runtime.push((name.into(), field));
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let mut out = serialize::map_to_plain(&self.body)?;

        if !self.sorts.is_empty() {
            let sorts = self
                .sorts
                .iter()
                .map(Sort::to_json)
                .collect::<Result<Vec<_>, _>>()?;
            out.insert("sort".to_string(), JsonValue::Array(sorts));
        }
        if !self.aggs.is_empty() {
            out.insert(
                "aggs".to_string(),
                JsonValue::Object(merge_aggs(&self.aggs)?),
            );
        }
        if !self.runtime.is_empty() {
            let mut mappings = JsonMap::new();
            for (name, field) in &self.runtime {
                mappings.insert(name.clone(), field.to_json()?);
            }
            out.insert("runtime_mappings".to_string(), JsonValue::Object(mappings));
        }

        Ok(JsonValue::Object(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        aggs::{AvgAggregation, TermsAggregation},
        query::{BoolQuery, MatchQuery, TermQuery},
        validate::SortOrder,
    };
    use serde_json::json;

    #[test]
    fn full_request_body() {
        let request = RequestBodySearch::new()
            .query(
                BoolQuery::new()
                    .must(MatchQuery::new("message").query("this is a test"))
                    .filter(TermQuery::new("status").value("published")),
            )
            .sort(Sort::new("timestamp").order(SortOrder::Desc))
            .sort(Sort::new("_score"))
            .from(0)
            .size(20)
            .timeout("2s");

        assert_eq!(
            request.to_json().unwrap(),
            json!({
                "query": {
                    "bool": {
                        "must": { "match": { "message": "this is a test" } },
                        "filter": { "term": { "status": "published" } }
                    }
                },
                "from": 0,
                "size": 20,
                "timeout": "2s",
                "sort": [{ "timestamp": { "order": "desc" } }, "_score"]
            })
        );
    }

    #[test]
    fn sibling_aggregations_merge() {
        let request = RequestBodySearch::new()
            .size(0)
            .aggregation(
                TermsAggregation::new("genres")
                    .field("genre")
                    .aggregation(AvgAggregation::new("avg_rating").field("rating")),
            )
            .aggregation(AvgAggregation::new("avg_price").field("price"));

        assert_eq!(
            request.to_json().unwrap(),
            json!({
                "size": 0,
                "aggs": {
                    "genres": {
                        "terms": { "field": "genre" },
                        "aggs": { "avg_rating": { "avg": { "field": "rating" } } }
                    },
                    "avg_price": { "avg": { "field": "price" } }
                }
            })
        );
    }

    #[test]
    fn runtime_mappings_serialize_last() {
        let request = RequestBodySearch::new()
            .query(TermQuery::new("user").value("kimchy"))
            .runtime_mapping(
                "day_of_week",
                RuntimeField::new(RuntimeFieldType::Keyword)
                    .script(Script::new().source("emit(doc['ts'].value.dayOfWeek)")),
            );

        assert_eq!(
            request.to_json().unwrap(),
            json!({
                "query": { "term": { "user": "kimchy" } },
                "runtime_mappings": {
                    "day_of_week": {
                        "type": "keyword",
                        "script": { "source": "emit(doc['ts'].value.dayOfWeek)" }
                    }
                }
            })
        );
    }

    #[test]
    fn serde_serialize_matches_to_json() {
        let request = RequestBodySearch::new().query(TermQuery::new("user").value("kimchy"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            request.to_json().unwrap()
        );
    }
}
