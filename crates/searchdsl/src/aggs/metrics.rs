use super::AggBody;
use crate::{
    error::DslError, highlight::Highlight, query::push_list_entry, script::Script, sort::Sort,
    value::Value,
};
use serde_json::Value as JsonValue;

/// Single-value metrics share the same skeleton: a field, an optional
/// `missing` default, or a script. None of them nest sub-aggregations.
macro_rules! metrics_agg {
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

                /// Field the metric is computed over.
                #[must_use]
                pub fn field(mut self, field: impl Into<String>) -> Self {
                    self.body.insert("field", field.into());
                    self
                }

                /// Default applied to documents missing the field.
                #[must_use]
                pub fn missing(mut self, value: impl Into<Value>) -> Self {
                    self.body.insert("missing", value);
                    self
                }

                /// Compute the metric from a script instead of a field.
                #[must_use]
                pub fn script(mut self, script: Script) -> Self {
                    self.body.insert("script", script);
                    self
                }

                #[must_use]
                pub fn name(&self) -> &str {
                    self.body.name()
                }

                pub fn to_json(&self) -> Result<JsonValue, DslError> {
                    self.body.to_json($tag)
                }
            }
        )+
    };
}

metrics_agg! {
    ///
    /// AvgAggregation
    ///
    AvgAggregation => "avg",

    ///
    /// CardinalityAggregation
    ///
    CardinalityAggregation => "cardinality",

    ///
    /// ExtendedStatsAggregation
    ///
    ExtendedStatsAggregation => "extended_stats",

    ///
    /// MaxAggregation
    ///
    MaxAggregation => "max",

    ///
    /// MinAggregation
    ///
    MinAggregation => "min",

    ///
    /// PercentilesAggregation
    ///
    PercentilesAggregation => "percentiles",

    ///
    /// StatsAggregation
    ///
    StatsAggregation => "stats",

    ///
    /// SumAggregation
    ///
    SumAggregation => "sum",

    ///
    /// ValueCountAggregation
    ///
    ValueCountAggregation => "value_count",
}

impl CardinalityAggregation {
    /// Count threshold below which counts are near-exact.
    #[must_use]
    pub fn precision_threshold(mut self, threshold: u64) -> Self {
        self.body.insert("precision_threshold", threshold);
        self
    }
}

impl ExtendedStatsAggregation {
    /// Standard-deviation bound width.
    #[must_use]
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.body.insert("sigma", sigma);
        self
    }
}

impl PercentilesAggregation {
    /// Percentile cut points to compute.
    #[must_use]
    pub fn percents(mut self, percents: impl IntoIterator<Item = f64>) -> Self {
        self.body
            .insert("percents", percents.into_iter().collect::<Vec<_>>());
        self
    }

    #[must_use]
    pub fn keyed(mut self, keyed: bool) -> Self {
        self.body.insert("keyed", keyed);
        self
    }
}

///
/// TopHitsAggregation
///
/// Returns the top matching hits per bucket instead of a computed value.
///

#[derive(Clone, Debug, PartialEq)]
pub struct TopHitsAggregation {
    body: AggBody,
}

impl TopHitsAggregation {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            body: AggBody::new(name),
        }
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

    /// Append a sort clause for hit ordering inside the bucket.
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        push_list_entry(self.body.opts_mut(), "sort", sort);
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

    #[must_use]
    pub fn name(&self) -> &str {
        self.body.name()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("top_hits")
    }
}
