use super::{AggBody, Aggregation};
use crate::{
    error::DslError,
    query::{Query, push_list_entry},
    serialize, validate,
    validate::{CollectMode, ExecutionHint, SortOrder},
    value::{Value, ValueMap},
};
use serde_json::Value as JsonValue;

///
/// RangeBucket
///
/// One entry of a range/date_range aggregation: open-ended `from`/`to`
/// bounds plus an optional bucket key.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RangeBucket {
    map: ValueMap,
}

impl RangeBucket {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from(mut self, from: impl Into<Value>) -> Self {
        self.map.insert("from", from);
        self
    }

    #[must_use]
    pub fn to(mut self, to: impl Into<Value>) -> Self {
        self.map.insert("to", to);
        self
    }

    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.map.insert("key", key.into());
        self
    }
}

impl From<RangeBucket> for Value {
    fn from(bucket: RangeBucket) -> Self {
        Self::Map(bucket.map)
    }
}

///
/// TermsAggregation
///

#[derive(Clone, Debug, PartialEq)]
pub struct TermsAggregation {
    body: AggBody,
}

impl TermsAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: AggBody::new(name),
        }
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.body.insert("field", field.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: u64) -> Self {
        self.body.insert("size", size);
        self
    }

    #[must_use]
    pub fn min_doc_count(mut self, count: u64) -> Self {
        self.body.insert("min_doc_count", count);
        self
    }

    #[must_use]
    pub fn shard_size(mut self, size: u64) -> Self {
        self.body.insert("shard_size", size);
        self
    }

    /// Bucket ordering, e.g. `order("_count", SortOrder::Desc)` or a
    /// sub-aggregation name.
    #[must_use]
    pub fn order(mut self, key: impl Into<String>, direction: SortOrder) -> Self {
        let mut order = ValueMap::new();
        order.insert(key, direction);
        self.body.insert("order", order);
        self
    }

    #[must_use]
    pub fn include(mut self, include: impl Into<Value>) -> Self {
        self.body.insert("include", include);
        self
    }

    #[must_use]
    pub fn exclude(mut self, exclude: impl Into<Value>) -> Self {
        self.body.insert("exclude", exclude);
        self
    }

    #[must_use]
    pub fn collect_mode(mut self, mode: CollectMode) -> Self {
        self.body.insert("collect_mode", mode);
        self
    }

    #[must_use]
    pub fn execution_hint(mut self, hint: ExecutionHint) -> Self {
        self.body.insert("execution_hint", hint);
        self
    }

    #[must_use]
    pub fn missing(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("missing", value);
        self
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("terms")
    }
}

///
/// HistogramAggregation
///

#[derive(Clone, Debug, PartialEq)]
pub struct HistogramAggregation {
    body: AggBody,
}

impl HistogramAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: AggBody::new(name),
        }
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.body.insert("field", field.into());
        self
    }

    #[must_use]
    pub fn interval(mut self, interval: impl Into<Value>) -> Self {
        self.body.insert("interval", interval);
        self
    }

    /// Emit empty buckets down to this count.
    #[must_use]
    pub fn min_doc_count(mut self, count: u64) -> Self {
        self.body.insert("min_doc_count", count);
        self
    }

    /// Force the histogram to span at least `[min, max]`.
    #[must_use]
    pub fn extended_bounds(mut self, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        let mut bounds = ValueMap::new();
        bounds.insert("min", min);
        bounds.insert("max", max);
        self.body.insert("extended_bounds", bounds);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.body.insert("offset", offset);
        self
    }

    #[must_use]
    pub fn keyed(mut self, keyed: bool) -> Self {
        self.body.insert("keyed", keyed);
        self
    }

    #[must_use]
    pub fn missing(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("missing", value);
        self
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("histogram")
    }
}

///
/// DateHistogramAggregation
///

#[derive(Clone, Debug, PartialEq)]
pub struct DateHistogramAggregation {
    body: AggBody,
}

impl DateHistogramAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: AggBody::new(name),
        }
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.body.insert("field", field.into());
        self
    }

    /// Calendar-aware bucket width, e.g. `"1M"` or `"week"`.
    #[must_use]
    pub fn calendar_interval(mut self, interval: impl Into<String>) -> Self {
        self.body.insert("calendar_interval", interval.into());
        self
    }

    /// Fixed bucket width, e.g. `"90s"`.
    #[must_use]
    pub fn fixed_interval(mut self, interval: impl Into<String>) -> Self {
        self.body.insert("fixed_interval", interval.into());
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.body.insert("format", format.into());
        self
    }

    #[must_use]
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.body.insert("time_zone", time_zone.into());
        self
    }

    #[must_use]
    pub fn min_doc_count(mut self, count: u64) -> Self {
        self.body.insert("min_doc_count", count);
        self
    }

    #[must_use]
    pub fn extended_bounds(mut self, min: impl Into<Value>, max: impl Into<Value>) -> Self {
        let mut bounds = ValueMap::new();
        bounds.insert("min", min);
        bounds.insert("max", max);
        self.body.insert("extended_bounds", bounds);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: impl Into<String>) -> Self {
        self.body.insert("offset", offset.into());
        self
    }

    #[must_use]
    pub fn keyed(mut self, keyed: bool) -> Self {
        self.body.insert("keyed", keyed);
        self
    }

    #[must_use]
    pub fn missing(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("missing", value);
        self
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("date_histogram")
    }
}

/// Range-style aggregations differ only in tag; both bucket over a list
/// of `RangeBucket` entries and require at least one.
macro_rules! range_agg {
    ( $( $(#[$meta:meta])* $name:ident => $tag:literal ),+ $(,)? ) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, PartialEq)]
            pub struct $name {
                body: AggBody,
            }

            impl $name {
                #[must_use]
                pub fn new(name: impl Into<String>) -> Self {
                    Self {
                        body: AggBody::new(name),
                    }
                }

                #[must_use]
                pub fn field(mut self, field: impl Into<String>) -> Self {
                    self.body.insert("field", field.into());
                    self
                }

                /// Append one bucket definition.
                #[must_use]
                pub fn range(mut self, bucket: RangeBucket) -> Self {
                    push_list_entry(self.body.opts_mut(), "ranges", bucket);
                    self
                }

                #[must_use]
                pub fn keyed(mut self, keyed: bool) -> Self {
                    self.body.insert("keyed", keyed);
                    self
                }

                #[must_use]
                pub fn missing(mut self, value: impl Into<Value>) -> Self {
                    self.body.insert("missing", value);
                    self
                }

                #[must_use]
                pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
                    self.body.push_agg(agg.into());
                    self
                }

                #[must_use]
                pub fn name(&self) -> &str {
                    self.body.name()
                }

                pub fn to_json(&self) -> Result<JsonValue, DslError> {
                    validate::require_key(self.body.opts(), stringify!($name), "ranges")?;
                    self.body.to_json($tag)
                }
            }
        )+
    };
}

range_agg! {
    ///
    /// RangeAggregation
    ///
    RangeAggregation => "range",

    ///
    /// DateRangeAggregation
    ///
    DateRangeAggregation => "date_range",
}

impl DateRangeAggregation {
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.body.insert("format", format.into());
        self
    }

    #[must_use]
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.body.insert("time_zone", time_zone.into());
        self
    }
}

///
/// FilterAggregation
///
/// Single bucket of documents matching a query; the tag body is the
/// query itself rather than an option bag.
///

#[derive(Clone, Debug, PartialEq)]
pub struct FilterAggregation {
    body: AggBody,
    filter: Query,
}

impl FilterAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>, filter: impl Into<Query>) -> Self {
        Self {
            body: AggBody::new(name),
            filter: filter.into(),
        }
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json_with("filter", self.filter.to_json()?)
    }
}

///
/// FiltersAggregation
///
/// Multi-bucket filters, either keyed (`{ filters: { <key>: query } }`)
/// or anonymous (`{ filters: [query, ...] }`). Named buckets take
/// precedence when both setters were used.
///

#[derive(Clone, Debug, PartialEq)]
pub struct FiltersAggregation {
    body: AggBody,
    filters: ValueMap,
    anonymous: Vec<Query>,
}

impl FiltersAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: AggBody::new(name),
            filters: ValueMap::new(),
            anonymous: Vec::new(),
        }
    }

    /// Add one named filter bucket.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, query: impl Into<Query>) -> Self {
        self.filters.insert(key, query.into());
        self
    }

    /// Add one anonymous filter bucket.
    #[must_use]
    pub fn anonymous_filter(mut self, query: impl Into<Query>) -> Self {
        self.anonymous.push(query.into());
        self
    }

    /// Bucket name for documents matching no filter.
    #[must_use]
    pub fn other_bucket_key(mut self, key: impl Into<String>) -> Self {
        self.body.insert("other_bucket_key", key.into());
        self
    }

    #[must_use]
    pub fn other_bucket(mut self, other_bucket: bool) -> Self {
        self.body.insert("other_bucket", other_bucket);
        self
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let filters = if self.filters.is_empty() {
            if self.anonymous.is_empty() {
                return Err(DslError::required("FiltersAggregation", "filters"));
            }
            let entries = self
                .anonymous
                .iter()
                .map(Query::to_json)
                .collect::<Result<_, _>>()?;
            JsonValue::Array(entries)
        } else {
            JsonValue::Object(serialize::map_to_plain(&self.filters)?)
        };

        let mut tag_body = serde_json::Map::new();
        tag_body.insert("filters".to_string(), filters);
        for (key, value) in self.body.opts().iter() {
            tag_body.insert(key.to_string(), serialize::to_plain(value)?);
        }
        self.body.to_json_with("filters", JsonValue::Object(tag_body))
    }
}

///
/// MissingAggregation
///

#[derive(Clone, Debug, PartialEq)]
pub struct MissingAggregation {
    body: AggBody,
}

impl MissingAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        let mut body = AggBody::new(name);
        body.insert("field", field.into());
        Self { body }
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("missing")
    }
}

///
/// GlobalAggregation
///
/// Bucket over every document in the search context: `{ global: {} }`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct GlobalAggregation {
    body: AggBody,
}

impl GlobalAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: AggBody::new(name),
        }
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("global")
    }
}

///
/// NestedAggregation
///

#[derive(Clone, Debug, PartialEq)]
pub struct NestedAggregation {
    body: AggBody,
}

impl NestedAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let mut body = AggBody::new(name);
        body.insert("path", path.into());
        Self { body }
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("nested")
    }
}

///
/// ReverseNestedAggregation
///

#[derive(Clone, Debug, PartialEq)]
pub struct ReverseNestedAggregation {
    body: AggBody,
}

impl ReverseNestedAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: AggBody::new(name),
        }
    }

    /// Step back out to a specific nesting level instead of the root.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.body.insert("path", path.into());
        self
    }

    #[must_use]
    pub fn aggregation(mut self, agg: impl Into<Aggregation>) -> Self {
        self.body.push_agg(agg.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("reverse_nested")
    }
}
