use super::Query;
use crate::{
    error::DslError,
    function::ScoreFunction,
    serialize,
    validate::{BoostMode, FuncScoreMode},
    value::{Value, ValueMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Emit a clause list as a single object when it holds one query and as an
/// array otherwise, matching the compact wire form.
fn push_clauses(
    body: &mut JsonMap<String, JsonValue>,
    key: &str,
    clauses: &[Query],
) -> Result<(), DslError> {
    match clauses {
        [] => {}
        [one] => {
            body.insert(key.to_string(), one.to_json()?);
        }
        many => {
            let serialized = many
                .iter()
                .map(Query::to_json)
                .collect::<Result<_, _>>()?;
            body.insert(key.to_string(), JsonValue::Array(serialized));
        }
    }
    Ok(())
}

///
/// BoolQuery
///
/// Boolean combination of clauses. Each occurrence-slot setter appends and
/// may be called repeatedly; serialization emits whatever slots are
/// populated.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoolQuery {
    must: Vec<Query>,
    filter: Vec<Query>,
    should: Vec<Query>,
    must_not: Vec<Query>,
    opts: ValueMap,
}

impl BoolQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn must(mut self, query: impl Into<Query>) -> Self {
        self.must.push(query.into());
        self
    }

    /// Non-scoring clause, cached by the engine.
    #[must_use]
    pub fn filter(mut self, query: impl Into<Query>) -> Self {
        self.filter.push(query.into());
        self
    }

    #[must_use]
    pub fn should(mut self, query: impl Into<Query>) -> Self {
        self.should.push(query.into());
        self
    }

    #[must_use]
    pub fn must_not(mut self, query: impl Into<Query>) -> Self {
        self.must_not.push(query.into());
        self
    }

    #[must_use]
    pub fn minimum_should_match(mut self, minimum: impl Into<Value>) -> Self {
        self.opts.insert("minimum_should_match", minimum);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let mut body = JsonMap::new();
        push_clauses(&mut body, "must", &self.must)?;
        push_clauses(&mut body, "filter", &self.filter)?;
        push_clauses(&mut body, "should", &self.should)?;
        push_clauses(&mut body, "must_not", &self.must_not)?;
        for (key, value) in self.opts.iter() {
            body.insert(key.to_string(), serialize::to_plain(value)?);
        }
        Ok(serialize::single("bool", JsonValue::Object(body)))
    }
}

///
/// DisMaxQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisMaxQuery {
    queries: Vec<Query>,
    opts: ValueMap,
}

impl DisMaxQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.queries.push(query.into());
        self
    }

    #[must_use]
    pub fn tie_breaker(mut self, tie_breaker: f64) -> Self {
        self.opts.insert("tie_breaker", tie_breaker);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let mut body = JsonMap::new();
        let queries = self
            .queries
            .iter()
            .map(Query::to_json)
            .collect::<Result<_, _>>()?;
        body.insert("queries".to_string(), JsonValue::Array(queries));
        for (key, value) in self.opts.iter() {
            body.insert(key.to_string(), serialize::to_plain(value)?);
        }
        Ok(serialize::single("dis_max", JsonValue::Object(body)))
    }
}

///
/// ConstantScoreQuery
///
/// Wraps a filter clause and scores every match with the boost.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstantScoreQuery {
    filter: Option<Box<Query>>,
    opts: ValueMap,
}

impl ConstantScoreQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(mut self, query: impl Into<Query>) -> Self {
        self.filter = Some(Box::new(query.into()));
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let Some(filter) = &self.filter else {
            return Err(DslError::required("ConstantScoreQuery", "filter"));
        };
        let mut body = JsonMap::new();
        body.insert("filter".to_string(), filter.to_json()?);
        for (key, value) in self.opts.iter() {
            body.insert(key.to_string(), serialize::to_plain(value)?);
        }
        Ok(serialize::single("constant_score", JsonValue::Object(body)))
    }
}

///
/// BoostingQuery
///
/// Demotes (without excluding) documents matching the negative clause.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoostingQuery {
    positive: Option<Box<Query>>,
    negative: Option<Box<Query>>,
    opts: ValueMap,
}

impl BoostingQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn positive(mut self, query: impl Into<Query>) -> Self {
        self.positive = Some(Box::new(query.into()));
        self
    }

    #[must_use]
    pub fn negative(mut self, query: impl Into<Query>) -> Self {
        self.negative = Some(Box::new(query.into()));
        self
    }

    #[must_use]
    pub fn negative_boost(mut self, negative_boost: f64) -> Self {
        self.opts.insert("negative_boost", negative_boost);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let Some(positive) = &self.positive else {
            return Err(DslError::required("BoostingQuery", "positive"));
        };
        let Some(negative) = &self.negative else {
            return Err(DslError::required("BoostingQuery", "negative"));
        };
        let mut body = JsonMap::new();
        body.insert("positive".to_string(), positive.to_json()?);
        body.insert("negative".to_string(), negative.to_json()?);
        for (key, value) in self.opts.iter() {
            body.insert(key.to_string(), serialize::to_plain(value)?);
        }
        Ok(serialize::single("boosting", JsonValue::Object(body)))
    }
}

///
/// FunctionScoreQuery
///
/// Rescores an inner query through a list of score functions.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionScoreQuery {
    query: Option<Box<Query>>,
    functions: Vec<ScoreFunction>,
    opts: ValueMap,
}

impl FunctionScoreQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(Box::new(query.into()));
        self
    }

    #[must_use]
    pub fn function(mut self, function: impl Into<ScoreFunction>) -> Self {
        self.functions.push(function.into());
        self
    }

    #[must_use]
    pub fn functions<F: Into<ScoreFunction>>(
        mut self,
        functions: impl IntoIterator<Item = F>,
    ) -> Self {
        self.functions.extend(functions.into_iter().map(Into::into));
        self
    }

    /// How the individual function scores combine with each other.
    #[must_use]
    pub fn score_mode(mut self, mode: FuncScoreMode) -> Self {
        self.opts.insert("score_mode", mode);
        self
    }

    /// How the combined function score combines with the query score.
    #[must_use]
    pub fn boost_mode(mut self, mode: BoostMode) -> Self {
        self.opts.insert("boost_mode", mode);
        self
    }

    #[must_use]
    pub fn max_boost(mut self, max_boost: f64) -> Self {
        self.opts.insert("max_boost", max_boost);
        self
    }

    #[must_use]
    pub fn min_score(mut self, min_score: f64) -> Self {
        self.opts.insert("min_score", min_score);
        self
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let mut body = JsonMap::new();
        if let Some(query) = &self.query {
            body.insert("query".to_string(), query.to_json()?);
        }
        if !self.functions.is_empty() {
            let functions = self
                .functions
                .iter()
                .map(ScoreFunction::to_json)
                .collect::<Result<_, _>>()?;
            body.insert("functions".to_string(), JsonValue::Array(functions));
        }
        for (key, value) in self.opts.iter() {
            body.insert(key.to_string(), serialize::to_plain(value)?);
        }
        Ok(serialize::single("function_score", JsonValue::Object(body)))
    }
}
