use crate::{
    error::DslError,
    node::Node,
    query::Query,
    script::Script,
    serialize,
    validate::{DecayCurve, FieldModifier, MultiValueMode},
    value::{Value, ValueMap},
};
use derive_more::From;
use serde_json::{Map as JsonMap, Value as JsonValue};

#[cfg(test)]
mod tests;

///
/// ScoreFunction
///
/// One entry of a function_score `functions` array.
///

#[derive(Clone, Debug, From, PartialEq)]
pub enum ScoreFunction {
    Weight(WeightFunction),
    ScriptScore(ScriptScoreFunction),
    RandomScore(RandomScoreFunction),
    FieldValueFactor(FieldValueFactorFunction),
    Decay(DecayFunction),
}

impl ScoreFunction {
    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        match self {
            Self::Weight(f) => f.to_json(),
            Self::ScriptScore(f) => f.to_json(),
            Self::RandomScore(f) => f.to_json(),
            Self::FieldValueFactor(f) => f.to_json(),
            Self::Decay(f) => f.to_json(),
        }
    }
}

impl From<ScoreFunction> for Value {
    fn from(func: ScoreFunction) -> Self {
        Self::Node(Box::new(Node::Func(func)))
    }
}

///
/// FuncBody
///
/// Common function envelope: an optional filter restricting which
/// documents the function applies to, and an optional weight multiplier.
///

#[derive(Clone, Debug, Default, PartialEq)]
struct FuncBody {
    filter: Option<Query>,
    weight: Option<Value>,
}

impl FuncBody {
    fn filter(&mut self, filter: Query) {
        self.filter = Some(filter);
    }

    fn weight(&mut self, weight: impl Into<Value>) {
        self.weight = Some(weight.into());
    }

    /// Assemble the function object: the kind-specific tag (if any)
    /// first, then `filter` and `weight`.
    fn finish(&self, tag: Option<(&'static str, JsonValue)>) -> Result<JsonValue, DslError> {
        let mut out = JsonMap::new();
        if let Some((key, body)) = tag {
            out.insert(key.to_string(), body);
        }
        if let Some(filter) = &self.filter {
            out.insert("filter".to_string(), filter.to_json()?);
        }
        if let Some(weight) = &self.weight {
            out.insert("weight".to_string(), serialize::to_plain(weight)?);
        }
        Ok(JsonValue::Object(out))
    }
}

///
/// WeightFunction
///
/// Bare weight multiplier, optionally gated by a filter.
///

#[derive(Clone, Debug, PartialEq)]
pub struct WeightFunction {
    body: FuncBody,
}

impl WeightFunction {
    #[must_use]
    pub fn new(weight: impl Into<Value>) -> Self {
        let mut body = FuncBody::default();
        body.weight(weight);
        Self { body }
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<Query>) -> Self {
        self.body.filter(filter.into());
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        self.body.finish(None)
    }
}

///
/// ScriptScoreFunction
///

#[derive(Clone, Debug, PartialEq)]
pub struct ScriptScoreFunction {
    script: Script,
    body: FuncBody,
}

impl ScriptScoreFunction {
    #[must_use]
    pub fn new(script: Script) -> Self {
        Self {
            script,
            body: FuncBody::default(),
        }
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<Query>) -> Self {
        self.body.filter(filter.into());
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: impl Into<Value>) -> Self {
        self.body.weight(weight);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let mut inner = JsonMap::new();
        inner.insert("script".to_string(), self.script.to_json()?);
        self.body
            .finish(Some(("script_score", JsonValue::Object(inner))))
    }
}

///
/// RandomScoreFunction
///
/// Reproducible pseudo-random scores when both `seed` and `field` are
/// set.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RandomScoreFunction {
    opts: ValueMap,
    body: FuncBody,
}

impl RandomScoreFunction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.opts.insert("seed", seed);
        self
    }

    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.opts.insert("field", field.into());
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<Query>) -> Self {
        self.body.filter(filter.into());
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: impl Into<Value>) -> Self {
        self.body.weight(weight);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let inner = serialize::map_to_plain(&self.opts)?;
        self.body
            .finish(Some(("random_score", JsonValue::Object(inner))))
    }
}

///
/// FieldValueFactorFunction
///

#[derive(Clone, Debug, PartialEq)]
pub struct FieldValueFactorFunction {
    opts: ValueMap,
    body: FuncBody,
}

impl FieldValueFactorFunction {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        let mut opts = ValueMap::new();
        opts.insert("field", field.into());
        Self {
            opts,
            body: FuncBody::default(),
        }
    }

    #[must_use]
    pub fn factor(mut self, factor: f64) -> Self {
        self.opts.insert("factor", factor);
        self
    }

    #[must_use]
    pub fn modifier(mut self, modifier: FieldModifier) -> Self {
        self.opts.insert("modifier", modifier);
        self
    }

    /// Fallback value for documents missing the field.
    #[must_use]
    pub fn missing(mut self, missing: impl Into<Value>) -> Self {
        self.opts.insert("missing", missing);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<Query>) -> Self {
        self.body.filter(filter.into());
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: impl Into<Value>) -> Self {
        self.body.weight(weight);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        let inner = serialize::map_to_plain(&self.opts)?;
        self.body
            .finish(Some(("field_value_factor", JsonValue::Object(inner))))
    }
}

///
/// DecayFunction
///
/// Distance-based score decay: `{ <curve>: { <field>: { origin, scale,
/// ... } } }` with the curve defaulting to gauss.
///

#[derive(Clone, Debug, PartialEq)]
pub struct DecayFunction {
    curve: DecayCurve,
    field: String,
    opts: ValueMap,
    multi_value_mode: Option<MultiValueMode>,
    body: FuncBody,
}

impl DecayFunction {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            curve: DecayCurve::Gauss,
            field: field.into(),
            opts: ValueMap::new(),
            multi_value_mode: None,
            body: FuncBody::default(),
        }
    }

    #[must_use]
    pub fn curve(mut self, curve: DecayCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Point of full score, e.g. a date, a number, or a geo point.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<Value>) -> Self {
        self.opts.insert("origin", origin);
        self
    }

    /// Distance from `origin` at which the score drops to `decay`.
    #[must_use]
    pub fn scale(mut self, scale: impl Into<Value>) -> Self {
        self.opts.insert("scale", scale);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: impl Into<Value>) -> Self {
        self.opts.insert("offset", offset);
        self
    }

    #[must_use]
    pub fn decay(mut self, decay: f64) -> Self {
        self.opts.insert("decay", decay);
        self
    }

    #[must_use]
    pub fn multi_value_mode(mut self, mode: MultiValueMode) -> Self {
        self.multi_value_mode = Some(mode);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<Query>) -> Self {
        self.body.filter(filter.into());
        self
    }

    #[must_use]
    pub fn weight(mut self, weight: impl Into<Value>) -> Self {
        self.body.weight(weight);
        self
    }

    pub fn to_json(&self) -> Result<JsonValue, DslError> {
        if !self.opts.contains_key("scale") {
            return Err(DslError::required("DecayFunction", "scale"));
        }

        let mut curve_body = JsonMap::new();
        curve_body.insert(
            self.field.clone(),
            JsonValue::Object(serialize::map_to_plain(&self.opts)?),
        );
        // multi_value_mode sits beside the field entry, not inside it
        if let Some(mode) = self.multi_value_mode {
            curve_body.insert(
                "multi_value_mode".to_string(),
                JsonValue::String(mode.as_str().to_string()),
            );
        }

        self.body
            .finish(Some((self.curve.as_str(), JsonValue::Object(curve_body))))
    }
}
