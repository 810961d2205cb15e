use crate::{
    error::DslError,
    value::{Value, ValueMap},
};
use std::fmt;

///
/// Capability
///
/// Closed set of node families a dynamic argument can be checked against.
/// Conformance is nominal — a value conforms only by being a variant of
/// the matching closed enum, never by structural resemblance.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Capability {
    Query,
    SpanQuery,
    Aggregation,
    ScoreFunction,
    Script,
    Sort,
    Highlight,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "Query",
            Self::SpanQuery => "SpanQuery",
            Self::Aggregation => "Aggregation",
            Self::ScoreFunction => "ScoreFunction",
            Self::Script => "Script",
            Self::Sort => "Sort",
            Self::Highlight => "Highlight",
        })
    }
}

/// Check that a dynamic value is a node of the expected family.
///
/// Succeeds silently; fails with the capability-mismatch error. Callers
/// embedding one node inside another invoke this eagerly at the setter,
/// never at serialization time.
pub fn instance_of(value: &Value, expected: Capability) -> Result<(), DslError> {
    match value.as_node() {
        Some(node) if node.conforms_to(expected) => Ok(()),
        _ => Err(DslError::NotAnInstance { expected }),
    }
}

/// Serialization-time required-key check over an option bag.
pub(crate) fn require_key(
    opts: &ValueMap,
    node: &'static str,
    key: &'static str,
) -> Result<(), DslError> {
    if opts.contains_key(key) {
        Ok(())
    } else {
        Err(DslError::required(node, key))
    }
}

// ─────────────────────────────────────────────────────────────
// Enumerated option types
// ─────────────────────────────────────────────────────────────

/// Closed string-token option set with case-insensitive parsing.
///
/// Parsing failures carry the parameter name, the allowed token set, the
/// offending token, and the reference documentation URL — the uniform
/// message every enumerated parameter shares.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            param = $param:literal,
            allowed = $allowed:literal,
            reference = $reference:literal,
            $( $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Wire token for this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $token, )+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = DslError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_lowercase().as_str() {
                    $( $token => Ok(Self::$variant), )+
                    _ => Err(DslError::InvalidEnumValue {
                        param: $param,
                        allowed: $allowed,
                        got: s.to_string(),
                        reference: $reference,
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for Value {
            fn from(value: $name) -> Self {
                Self::Text(value.as_str().to_string())
            }
        }
    };
}

option_enum! {
    /// Sort direction.
    SortOrder {
        param = "order",
        allowed = "'asc', 'desc'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/sort-search-results.html",
        Asc => "asc",
        Desc => "desc",
    }
}

option_enum! {
    /// Multi-valued field reduction for sorting.
    SortMode {
        param = "mode",
        allowed = "'min', 'max', 'sum', 'avg', 'median'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/sort-search-results.html",
        Min => "min",
        Max => "max",
        Sum => "sum",
        Avg => "avg",
        Median => "median",
    }
}

option_enum! {
    /// Child-hit score reduction for joining queries (nested, has_child).
    ScoreMode {
        param = "score_mode",
        allowed = "'none', 'sum', 'min', 'max', 'avg'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-nested-query.html",
        None => "none",
        Sum => "sum",
        Min => "min",
        Max => "max",
        Avg => "avg",
    }
}

option_enum! {
    /// Function combination mode for function_score queries.
    FuncScoreMode {
        param = "score_mode",
        allowed = "'multiply', 'sum', 'avg', 'first', 'max', 'min'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-function-score-query.html",
        Multiply => "multiply",
        Sum => "sum",
        Avg => "avg",
        First => "first",
        Max => "max",
        Min => "min",
    }
}

option_enum! {
    /// How the computed function score combines with the query score.
    BoostMode {
        param = "boost_mode",
        allowed = "'multiply', 'replace', 'sum', 'avg', 'max', 'min'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-function-score-query.html",
        Multiply => "multiply",
        Replace => "replace",
        Sum => "sum",
        Avg => "avg",
        Max => "max",
        Min => "min",
    }
}

option_enum! {
    /// Boolean operator for analyzed full-text clauses.
    Operator {
        param = "operator",
        allowed = "'and', 'or'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-match-query.html",
        And => "and",
        Or => "or",
    }
}

option_enum! {
    /// Behavior when the analyzer strips every token from the input.
    ZeroTermsQuery {
        param = "zero_terms_query",
        allowed = "'none', 'all'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-match-query.html",
        None => "none",
        All => "all",
    }
}

option_enum! {
    /// Execution strategy for multi_match queries.
    MatchType {
        param = "type",
        allowed = "'best_fields', 'most_fields', 'cross_fields', 'phrase', 'phrase_prefix'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-multi-match-query.html",
        BestFields => "best_fields",
        MostFields => "most_fields",
        CrossFields => "cross_fields",
        Phrase => "phrase",
        PhrasePrefix => "phrase_prefix",
    }
}

option_enum! {
    /// Geo distance computation method.
    DistanceType {
        param = "distance_type",
        allowed = "'arc', 'plane'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-geo-distance-query.html",
        Arc => "arc",
        Plane => "plane",
    }
}

option_enum! {
    /// Coordinate validation for geo queries.
    ValidationMethod {
        param = "validation_method",
        allowed = "'ignore_malformed', 'coerce', 'strict'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-geo-bounding-box-query.html",
        IgnoreMalformed => "ignore_malformed",
        Coerce => "coerce",
        Strict => "strict",
    }
}

option_enum! {
    /// Bucket collection strategy for terms aggregations.
    CollectMode {
        param = "collect_mode",
        allowed = "'depth_first', 'breadth_first'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-bucket-terms-aggregation.html",
        DepthFirst => "depth_first",
        BreadthFirst => "breadth_first",
    }
}

option_enum! {
    /// Terms aggregation execution hint.
    ExecutionHint {
        param = "execution_hint",
        allowed = "'map', 'global_ordinals'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/search-aggregations-bucket-terms-aggregation.html",
        Map => "map",
        GlobalOrdinals => "global_ordinals",
    }
}

option_enum! {
    /// Multi-valued field reduction for decay functions.
    MultiValueMode {
        param = "multi_value_mode",
        allowed = "'min', 'max', 'avg', 'sum'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-function-score-query.html",
        Min => "min",
        Max => "max",
        Avg => "avg",
        Sum => "sum",
    }
}

option_enum! {
    /// Decay curve shape.
    DecayCurve {
        param = "mode",
        allowed = "'gauss', 'linear', 'exp'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-function-score-query.html",
        Gauss => "gauss",
        Linear => "linear",
        Exp => "exp",
    }
}

option_enum! {
    /// Score adjustment applied by field_value_factor functions.
    FieldModifier {
        param = "modifier",
        allowed = "'none', 'log', 'log1p', 'log2p', 'ln', 'ln1p', 'ln2p', 'square', 'sqrt', 'reciprocal'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/query-dsl-function-score-query.html",
        None => "none",
        Log => "log",
        Log1p => "log1p",
        Log2p => "log2p",
        Ln => "ln",
        Ln1p => "ln1p",
        Ln2p => "ln2p",
        Square => "square",
        Sqrt => "sqrt",
        Reciprocal => "reciprocal",
    }
}

option_enum! {
    /// Field type of a search-time runtime mapping.
    RuntimeFieldType {
        param = "type",
        allowed = "'boolean', 'composite', 'date', 'double', 'geo_point', 'ip', 'keyword', 'long', 'lookup'",
        reference = "https://www.elastic.co/guide/en/elasticsearch/reference/current/runtime.html",
        Boolean => "boolean",
        Composite => "composite",
        Date => "date",
        Double => "double",
        GeoPoint => "geo_point",
        Ip => "ip",
        Keyword => "keyword",
        Long => "long",
        Lookup => "lookup",
    }
}
