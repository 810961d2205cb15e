use super::{FieldBody, push_list_entry};
use crate::{
    error::DslError,
    serialize, validate,
    value::{Value, ValueMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

///
/// TermQuery
///
/// Exact-value match on a single field. Requires `value` at serialization;
/// a bag holding only `value` collapses to `{ term: { <field>: <value> } }`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct TermQuery {
    body: FieldBody,
}

impl TermQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_field(field),
        }
    }

    /// Exact value to match.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("value", value);
        self
    }

    #[must_use]
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.body.insert("case_insensitive", case_insensitive);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("TermQuery", "term", Some("value"))
    }
}

///
/// TermsQuery
///
/// Any-of match over a list of exact values: `{ terms: { <field>: [...] } }`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct TermsQuery {
    field: String,
    values: Vec<Value>,
    opts: ValueMap,
}

impl TermsQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            values: Vec::new(),
            opts: ValueMap::new(),
        }
    }

    /// Append one candidate value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append a batch of candidate values.
    #[must_use]
    pub fn values<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let mut body = JsonMap::new();
        let values = self
            .values
            .iter()
            .map(serialize::to_plain)
            .collect::<Result<_, _>>()?;
        body.insert(self.field.clone(), JsonValue::Array(values));
        for (key, value) in self.opts.iter() {
            body.insert(key.to_string(), serialize::to_plain(value)?);
        }
        Ok(serialize::single("terms", JsonValue::Object(body)))
    }
}

///
/// RangeQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct RangeQuery {
    body: FieldBody,
}

impl RangeQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_field(field),
        }
    }

    #[must_use]
    pub fn gt(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("gt", value);
        self
    }

    #[must_use]
    pub fn gte(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("gte", value);
        self
    }

    #[must_use]
    pub fn lt(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("lt", value);
        self
    }

    #[must_use]
    pub fn lte(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("lte", value);
        self
    }

    /// Date format used to parse the bound values.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.body.insert("format", format.into());
        self
    }

    /// Range-field relation (`INTERSECTS`, `CONTAINS`, `WITHIN`).
    #[must_use]
    pub fn relation(mut self, relation: impl Into<String>) -> Self {
        self.body.insert("relation", relation.into());
        self
    }

    #[must_use]
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.body.insert("time_zone", time_zone.into());
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("RangeQuery", "range", None)
    }
}

///
/// ExistsQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct ExistsQuery {
    opts: ValueMap,
}

impl ExistsQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        let mut opts = ValueMap::new();
        opts.insert("field", field.into());
        Self { opts }
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        serialize::wrap("exists", &self.opts)
    }
}

///
/// PrefixQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct PrefixQuery {
    body: FieldBody,
}

impl PrefixQuery {
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
    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.body.insert("rewrite", rewrite.into());
        self
    }

    #[must_use]
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.body.insert("case_insensitive", case_insensitive);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("PrefixQuery", "prefix", Some("value"))
    }
}

///
/// WildcardQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct WildcardQuery {
    body: FieldBody,
}

impl WildcardQuery {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            body: FieldBody::with_field(field),
        }
    }

    /// Wildcard pattern (`*` and `?` placeholders).
    #[must_use]
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.body.insert("value", value);
        self
    }

    #[must_use]
    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.body.insert("rewrite", rewrite.into());
        self
    }

    #[must_use]
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.body.insert("case_insensitive", case_insensitive);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("WildcardQuery", "wildcard", Some("value"))
    }
}

///
/// RegexpQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct RegexpQuery {
    body: FieldBody,
}

impl RegexpQuery {
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

    /// Regexp engine flags, `|`-separated (e.g. `"INTERSECTION|EMPTY"`).
    #[must_use]
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.body.insert("flags", flags.into());
        self
    }

    #[must_use]
    pub fn max_determinized_states(mut self, states: u64) -> Self {
        self.body.insert("max_determinized_states", states);
        self
    }

    #[must_use]
    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.body.insert("rewrite", rewrite.into());
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("RegexpQuery", "regexp", Some("value"))
    }
}

///
/// FuzzyQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyQuery {
    body: FieldBody,
}

impl FuzzyQuery {
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

    /// Edit distance, either a number or `"AUTO"`.
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
    pub fn transpositions(mut self, transpositions: bool) -> Self {
        self.body.insert("transpositions", transpositions);
        self
    }

    #[must_use]
    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.body.insert("rewrite", rewrite.into());
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.body.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.to_json("FuzzyQuery", "fuzzy", Some("value"))
    }
}

///
/// IdsQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdsQuery {
    opts: ValueMap,
}

impl IdsQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one document id.
    #[must_use]
    pub fn value(mut self, id: impl Into<Value>) -> Self {
        push_list_entry(&mut self.opts, "values", id);
        self
    }

    /// Append a batch of document ids.
    #[must_use]
    pub fn values<V: Into<Value>>(mut self, ids: impl IntoIterator<Item = V>) -> Self {
        for id in ids {
            push_list_entry(&mut self.opts, "values", id);
        }
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        validate::require_key(&self.opts, "IdsQuery", "values")?;
        serialize::wrap("ids", &self.opts)
    }
}
