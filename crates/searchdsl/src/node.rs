use crate::{
    aggs::Aggregation, error::DslError, function::ScoreFunction, highlight::Highlight,
    query::Query, script::Script, sort::Sort, validate::Capability,
};
use derive_more::From;
use serde_json::Value as JsonValue;

///
/// Node
///
/// Closed union of every builder family that can appear inside an option
/// bag. Capability checks resolve against this enum, so conformance is
/// nominal: unrelated values can never pass by shape alone.
///

#[derive(Clone, Debug, From, PartialEq)]
pub enum Node {
    Query(Query),
    Agg(Aggregation),
    Func(ScoreFunction),
    Script(Script),
    Sort(Sort),
    Highlight(Highlight),
}

impl Node {
    /// Nominal conformance test. Span queries conform to both the `Query`
    /// and `SpanQuery` families.
    #[must_use]
    pub fn conforms_to(&self, expected: Capability) -> bool {
        match expected {
            Capability::Query => matches!(self, Self::Query(_)),
            Capability::SpanQuery => matches!(self, Self::Query(query) if query.is_span()),
            Capability::Aggregation => matches!(self, Self::Agg(_)),
            Capability::ScoreFunction => matches!(self, Self::Func(_)),
            Capability::Script => matches!(self, Self::Script(_)),
            Capability::Sort => matches!(self, Self::Sort(_)),
            Capability::Highlight => matches!(self, Self::Highlight(_)),
        }
    }

    /// Serialized wire form of the wrapped node.
    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        match self {
            Self::Query(query) => query.to_json(),
            Self::Agg(agg) => agg.to_json(),
            Self::Func(func) => func.to_json(),
            Self::Script(script) => script.to_json(),
            Self::Sort(sort) => sort.to_json(),
            Self::Highlight(highlight) => highlight.to_json(),
        }
    }
}

/// serde integration: builders serialize through their own `to_json`, so
/// `serde_json::to_string` on any of them emits the wire format directly.
macro_rules! serialize_via_to_json {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl ::serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    match self.to_json() {
                        Ok(json) => ::serde::Serialize::serialize(&json, serializer),
                        Err(err) => Err(::serde::ser::Error::custom(err)),
                    }
                }
            }
        )+
    };
}

serialize_via_to_json!(
    Node,
    crate::query::Query,
    crate::aggs::Aggregation,
    crate::function::ScoreFunction,
    crate::script::Script,
    crate::sort::Sort,
    crate::highlight::Highlight,
    crate::search::RequestBodySearch,
);
