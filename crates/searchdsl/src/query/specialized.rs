use super::push_list_entry;
use crate::{
    error::DslError,
    script::Script,
    serialize, validate,
    value::{Value, ValueMap},
};
use serde_json::{Map as JsonMap, Value as JsonValue};

///
/// MatchAllQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchAllQuery {
    opts: ValueMap,
}

impl MatchAllQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        serialize::wrap("match_all", &self.opts)
    }
}

///
/// MatchNoneQuery
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchNoneQuery {
    opts: ValueMap,
}

impl MatchNoneQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        serialize::wrap("match_none", &self.opts)
    }
}

///
/// MoreLikeThisQuery
///
/// Finds documents similar to the given example texts.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoreLikeThisQuery {
    opts: ValueMap,
}

impl MoreLikeThisQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Append one example text or artificial document.
    #[must_use]
    pub fn like(mut self, like: impl Into<Value>) -> Self {
        push_list_entry(&mut self.opts, "like", like);
        self
    }

    #[must_use]
    pub fn min_term_freq(mut self, freq: u64) -> Self {
        self.opts.insert("min_term_freq", freq);
        self
    }

    #[must_use]
    pub fn max_query_terms(mut self, terms: u64) -> Self {
        self.opts.insert("max_query_terms", terms);
        self
    }

    #[must_use]
    pub fn min_doc_freq(mut self, freq: u64) -> Self {
        self.opts.insert("min_doc_freq", freq);
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
        validate::require_key(&self.opts, "MoreLikeThisQuery", "like")?;
        serialize::wrap("more_like_this", &self.opts)
    }
}

///
/// ScriptQuery
///
/// Filters with a script predicate: `{ script: { script: {...} } }`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScriptQuery {
    script: Option<Script>,
    opts: ValueMap,
}

impl ScriptQuery {
    #[must_use]
    pub fn new(script: Script) -> Self {
        Self {
            script: Some(script),
            opts: ValueMap::new(),
        }
    }

    #[must_use]
    pub fn boost(mut self, boost: f64) -> Self {
        self.opts.insert("boost", boost);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let Some(script) = &self.script else {
            return Err(DslError::required("ScriptQuery", "script"));
        };
        let mut body = JsonMap::new();
        body.insert("script".to_string(), script.to_json()?);
        for (key, value) in self.opts.iter() {
            body.insert(key.to_string(), serialize::to_plain(value)?);
        }
        Ok(serialize::single("script", JsonValue::Object(body)))
    }
}
