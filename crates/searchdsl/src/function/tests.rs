use super::*;
use crate::{
    query::{FunctionScoreQuery, MatchAllQuery, TermQuery},
    validate::{BoostMode, FieldModifier, FuncScoreMode},
};
use serde_json::json;

#[test]
fn weight_function_keeps_integer_weights() {
    let func = WeightFunction::new(2);
    assert_eq!(func.to_json().unwrap(), json!({ "weight": 2 }));
}

#[test]
fn weight_function_with_filter() {
    let func = WeightFunction::new(42).filter(TermQuery::new("status").value("urgent"));
    assert_eq!(
        func.to_json().unwrap(),
        json!({
            "filter": { "term": { "status": "urgent" } },
            "weight": 42
        })
    );
}

#[test]
fn gauss_decay_on_a_location_field() {
    let func = DecayFunction::new("location").origin("11, 12").scale("2km");
    assert_eq!(
        func.to_json().unwrap(),
        json!({
            "gauss": {
                "location": { "origin": "11, 12", "scale": "2km" }
            }
        })
    );
}

#[test]
fn gauss_decay_with_sibling_weight() {
    let func = DecayFunction::new("location")
        .origin("11,12")
        .scale("2km")
        .weight(2);

    assert_eq!(
        func.to_json().unwrap(),
        json!({
            "gauss": {
                "location": { "origin": "11,12", "scale": "2km" }
            },
            "weight": 2
        })
    );
}

#[test]
fn decay_curve_and_siblings() {
    let func = DecayFunction::new("date")
        .curve(DecayCurve::Exp)
        .origin("now")
        .scale("10d")
        .offset("5d")
        .decay(0.5)
        .multi_value_mode(MultiValueMode::Avg);

    assert_eq!(
        func.to_json().unwrap(),
        json!({
            "exp": {
                "date": { "origin": "now", "scale": "10d", "offset": "5d", "decay": 0.5 },
                "multi_value_mode": "avg"
            }
        })
    );
}

#[test]
fn decay_requires_scale() {
    let err = DecayFunction::new("date").origin("now").to_json().unwrap_err();
    assert_eq!(err.to_string(), "'scale' is required for DecayFunction");
}

#[test]
fn script_score_function() {
    let func = ScriptScoreFunction::new(Script::new().source("_score * doc['votes'].value"));
    assert_eq!(
        func.to_json().unwrap(),
        json!({ "script_score": { "script": { "source": "_score * doc['votes'].value" } } })
    );
}

#[test]
fn random_score_with_seed_and_field() {
    let func = RandomScoreFunction::new().seed(10).field("_seq_no");
    assert_eq!(
        func.to_json().unwrap(),
        json!({ "random_score": { "seed": 10, "field": "_seq_no" } })
    );
}

#[test]
fn field_value_factor_function() {
    let func = FieldValueFactorFunction::new("votes")
        .factor(1.2)
        .modifier(FieldModifier::Sqrt)
        .missing(1);

    assert_eq!(
        func.to_json().unwrap(),
        json!({
            "field_value_factor": {
                "field": "votes",
                "factor": 1.2,
                "modifier": "sqrt",
                "missing": 1
            }
        })
    );
}

#[test]
fn function_score_query_assembles_functions_array() {
    let query = FunctionScoreQuery::new()
        .query(MatchAllQuery::new())
        .function(DecayFunction::new("location").origin("11, 12").scale("2km"))
        .function(WeightFunction::new(2))
        .score_mode(FuncScoreMode::Multiply)
        .boost_mode(BoostMode::Sum);

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "function_score": {
                "query": { "match_all": {} },
                "functions": [
                    { "gauss": { "location": { "origin": "11, 12", "scale": "2km" } } },
                    { "weight": 2 }
                ],
                "score_mode": "multiply",
                "boost_mode": "sum"
            }
        })
    );
}
