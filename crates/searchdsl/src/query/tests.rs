use super::*;
use crate::validate::{MatchType, Operator, ScoreMode};
use serde_json::json;

// ─────────────────────────────────────────────────────────────
// Term-level
// ─────────────────────────────────────────────────────────────

#[test]
fn term_query_collapses_when_only_value_is_set() {
    let query = TermQuery::new("user").value("kimchy");
    assert_eq!(query.to_json().unwrap(), json!({ "term": { "user": "kimchy" } }));
}

#[test]
fn term_query_expands_when_options_are_present() {
    let query = TermQuery::new("user").value("kimchy").boost(2.0);
    assert_eq!(
        query.to_json().unwrap(),
        json!({ "term": { "user": { "value": "kimchy", "boost": 2.0 } } })
    );
}

#[test]
fn term_query_without_value_is_rejected() {
    let err = TermQuery::new("user").to_json().unwrap_err();
    assert_eq!(err.to_string(), "'value' is required for TermQuery");
}

#[test]
fn terms_query_always_emits_an_array() {
    let query = TermsQuery::new("tags").value("search").values(["rust", "dsl"]);
    assert_eq!(
        query.to_json().unwrap(),
        json!({ "terms": { "tags": ["search", "rust", "dsl"] } })
    );
}

#[test]
fn range_query_keeps_bound_order() {
    let query = RangeQuery::new("age").gte(10).lt(20).boost(2.0);
    assert_eq!(
        query.to_json().unwrap(),
        json!({ "range": { "age": { "gte": 10, "lt": 20, "boost": 2.0 } } })
    );
}

#[test]
fn exists_and_ids_queries() {
    assert_eq!(
        ExistsQuery::new("user").to_json().unwrap(),
        json!({ "exists": { "field": "user" } })
    );

    assert_eq!(
        IdsQuery::new().values(["1", "4", "100"]).to_json().unwrap(),
        json!({ "ids": { "values": ["1", "4", "100"] } })
    );
    let err = IdsQuery::new().to_json().unwrap_err();
    assert_eq!(err.to_string(), "'values' is required for IdsQuery");
}

#[test]
fn fuzzy_query_expanded_form() {
    let query = FuzzyQuery::new("user").value("ki").fuzziness(2).prefix_length(0);
    assert_eq!(
        query.to_json().unwrap(),
        json!({ "fuzzy": { "user": { "value": "ki", "fuzziness": 2, "prefix_length": 0 } } })
    );
}

// ─────────────────────────────────────────────────────────────
// Full-text
// ─────────────────────────────────────────────────────────────

#[test]
fn match_query_collapse_and_expansion() {
    let simple = MatchQuery::new("message").query("this is a test");
    assert_eq!(
        simple.to_json().unwrap(),
        json!({ "match": { "message": "this is a test" } })
    );

    let rich = MatchQuery::new("message")
        .query("this is a test")
        .operator(Operator::And)
        .zero_terms_query(crate::validate::ZeroTermsQuery::All);
    assert_eq!(
        rich.to_json().unwrap(),
        json!({
            "match": {
                "message": {
                    "query": "this is a test",
                    "operator": "and",
                    "zero_terms_query": "all"
                }
            }
        })
    );
}

#[test]
fn match_phrase_with_slop() {
    let query = MatchPhraseQuery::new("message").query("quick fox").slop(2);
    assert_eq!(
        query.to_json().unwrap(),
        json!({ "match_phrase": { "message": { "query": "quick fox", "slop": 2 } } })
    );
}

#[test]
fn multi_match_query() {
    let query = MultiMatchQuery::new()
        .query("quick brown fox")
        .fields(["subject", "message"])
        .kind(MatchType::BestFields)
        .tie_breaker(0.3);

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "multi_match": {
                "query": "quick brown fox",
                "fields": ["subject", "message"],
                "type": "best_fields",
                "tie_breaker": 0.3
            }
        })
    );
}

#[test]
fn multi_match_requires_query() {
    let err = MultiMatchQuery::new().field("subject").to_json().unwrap_err();
    assert_eq!(err.to_string(), "'query' is required for MultiMatchQuery");
}

#[test]
fn query_string_queries() {
    let query = QueryStringQuery::new("this AND that").default_field("content");
    assert_eq!(
        query.to_json().unwrap(),
        json!({ "query_string": { "query": "this AND that", "default_field": "content" } })
    );

    let simple = SimpleQueryStringQuery::new("\"fried eggs\" +(eggplant | potato)")
        .fields(["title^5", "body"]);
    assert_eq!(
        simple.to_json().unwrap(),
        json!({
            "simple_query_string": {
                "query": "\"fried eggs\" +(eggplant | potato)",
                "fields": ["title^5", "body"]
            }
        })
    );
}

// ─────────────────────────────────────────────────────────────
// Compound
// ─────────────────────────────────────────────────────────────

#[test]
fn bool_query_single_clause_stays_an_object() {
    let query = BoolQuery::new().must(TermQuery::new("user").value("kimchy"));
    assert_eq!(
        query.to_json().unwrap(),
        json!({ "bool": { "must": { "term": { "user": "kimchy" } } } })
    );
}

#[test]
fn bool_query_repeated_clauses_become_an_array() {
    let query = BoolQuery::new()
        .must(TermQuery::new("user").value("kimchy"))
        .must(TermQuery::new("status").value("active"))
        .should(MatchQuery::new("bio").query("search"))
        .minimum_should_match(1);

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "bool": {
                "must": [
                    { "term": { "user": "kimchy" } },
                    { "term": { "status": "active" } }
                ],
                "should": { "match": { "bio": "search" } },
                "minimum_should_match": 1
            }
        })
    );
}

#[test]
fn constant_score_requires_its_filter() {
    let err = ConstantScoreQuery::new().boost(1.2).to_json().unwrap_err();
    assert_eq!(err.to_string(), "'filter' is required for ConstantScoreQuery");

    let query = ConstantScoreQuery::new()
        .filter(TermQuery::new("user").value("kimchy"))
        .boost(1.2);
    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "constant_score": {
                "filter": { "term": { "user": "kimchy" } },
                "boost": 1.2
            }
        })
    );
}

#[test]
fn boosting_query() {
    let query = BoostingQuery::new()
        .positive(TermQuery::new("text").value("apple"))
        .negative(TermQuery::new("text").value("pie"))
        .negative_boost(0.5);

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "boosting": {
                "positive": { "term": { "text": "apple" } },
                "negative": { "term": { "text": "pie" } },
                "negative_boost": 0.5
            }
        })
    );
}

#[test]
fn dis_max_keeps_the_queries_array() {
    let query = DisMaxQuery::new()
        .query(TermQuery::new("title").value("quick"))
        .tie_breaker(0.7);

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "dis_max": {
                "queries": [{ "term": { "title": "quick" } }],
                "tie_breaker": 0.7
            }
        })
    );
}

// ─────────────────────────────────────────────────────────────
// Joining
// ─────────────────────────────────────────────────────────────

#[test]
fn nested_query_with_parsed_score_mode() {
    let mode: ScoreMode = "SUM".parse().unwrap();
    let query = NestedQuery::new("driver")
        .query(MatchQuery::new("driver.last_name").query("mckenzie"))
        .score_mode(mode);

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "nested": {
                "path": "driver",
                "query": { "match": { "driver.last_name": "mckenzie" } },
                "score_mode": "sum"
            }
        })
    );
}

#[test]
fn nested_query_requires_an_inner_query() {
    let err = NestedQuery::new("driver").to_json().unwrap_err();
    assert_eq!(err.to_string(), "'query' is required for NestedQuery");
}

#[test]
fn has_child_and_parent_id() {
    let query = HasChildQuery::new("answer")
        .query(MatchQuery::new("body").query("rust"))
        .score_mode(ScoreMode::Max)
        .min_children(2);
    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "has_child": {
                "type": "answer",
                "query": { "match": { "body": "rust" } },
                "score_mode": "max",
                "min_children": 2
            }
        })
    );

    assert_eq!(
        ParentIdQuery::new("answer", "1").to_json().unwrap(),
        json!({ "parent_id": { "type": "answer", "id": "1" } })
    );
}

// ─────────────────────────────────────────────────────────────
// Span
// ─────────────────────────────────────────────────────────────

#[test]
fn span_near_accepts_only_span_clauses() {
    let query = SpanNearQuery::new()
        .clause(SpanTermQuery::new("field").value("value1"))
        .unwrap()
        .clause(SpanTermQuery::new("field").value("value2"))
        .unwrap()
        .slop(0)
        .in_order(false);

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "span_near": {
                "clauses": [
                    { "span_term": { "field": "value1" } },
                    { "span_term": { "field": "value2" } }
                ],
                "slop": 0,
                "in_order": false
            }
        })
    );

    let err = SpanNearQuery::new()
        .clause(TermQuery::new("field").value("value1"))
        .unwrap_err();
    assert_eq!(err.to_string(), "Argument must be an instance of SpanQuery");
}

#[test]
fn span_first_wraps_its_match() {
    let query = SpanFirstQuery::new()
        .matches(SpanTermQuery::new("user").value("kimchy"))
        .unwrap()
        .end(3);

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "span_first": {
                "match": { "span_term": { "user": "kimchy" } },
                "end": 3
            }
        })
    );
}

#[test]
fn span_not_requires_both_sides() {
    let half = SpanNotQuery::new()
        .include(SpanTermQuery::new("field").value("hoya"))
        .unwrap();
    let err = half.to_json().unwrap_err();
    assert_eq!(err.to_string(), "'exclude' is required for SpanNotQuery");
}

#[test]
fn span_compounds_nest() {
    let query = SpanWithinQuery::new()
        .little(SpanTermQuery::new("field").value("foo"))
        .unwrap()
        .big(
            SpanNearQuery::new()
                .clause(SpanTermQuery::new("field").value("bar"))
                .unwrap()
                .clause(SpanTermQuery::new("field").value("baz"))
                .unwrap()
                .slop(5),
        )
        .unwrap();

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "span_within": {
                "little": { "span_term": { "field": "foo" } },
                "big": {
                    "span_near": {
                        "clauses": [
                            { "span_term": { "field": "bar" } },
                            { "span_term": { "field": "baz" } }
                        ],
                        "slop": 5
                    }
                }
            }
        })
    );
}

// ─────────────────────────────────────────────────────────────
// Geo and specialized
// ─────────────────────────────────────────────────────────────

#[test]
fn geo_distance_places_the_field_last() {
    let query = GeoDistanceQuery::new("pin.location")
        .distance("12km")
        .point(GeoPoint::new(40.0, -70.0));

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "geo_distance": {
                "distance": "12km",
                "pin.location": { "lat": 40.0, "lon": -70.0 }
            }
        })
    );

    let err = GeoDistanceQuery::new("pin.location")
        .point(GeoPoint::new(40.0, -70.0))
        .to_json()
        .unwrap_err();
    assert_eq!(err.to_string(), "'distance' is required for GeoDistanceQuery");
}

#[test]
fn geo_bounding_box_corners() {
    let query = GeoBoundingBoxQuery::new("pin.location")
        .top_left(GeoPoint::new(40.73, -74.1))
        .bottom_right(GeoPoint::new(40.01, -71.12));

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "geo_bounding_box": {
                "pin.location": {
                    "top_left": { "lat": 40.73, "lon": -74.1 },
                    "bottom_right": { "lat": 40.01, "lon": -71.12 }
                }
            }
        })
    );
}

#[test]
fn match_all_and_match_none() {
    assert_eq!(MatchAllQuery::new().to_json().unwrap(), json!({ "match_all": {} }));
    assert_eq!(
        MatchAllQuery::new().boost(1.2).to_json().unwrap(),
        json!({ "match_all": { "boost": 1.2 } })
    );
    assert_eq!(MatchNoneQuery::new().to_json().unwrap(), json!({ "match_none": {} }));
}

#[test]
fn more_like_this_requires_an_example() {
    let query = MoreLikeThisQuery::new()
        .fields(["title", "description"])
        .like("Once upon a time")
        .min_term_freq(1);
    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "more_like_this": {
                "fields": ["title", "description"],
                "like": ["Once upon a time"],
                "min_term_freq": 1
            }
        })
    );

    let err = MoreLikeThisQuery::new().field("title").to_json().unwrap_err();
    assert_eq!(err.to_string(), "'like' is required for MoreLikeThisQuery");
}

#[test]
fn three_levels_of_nesting_serialize_flat() {
    let query = ConstantScoreQuery::new().filter(
        BoolQuery::new()
            .must(TermQuery::new("status").value("active"))
            .must_not(TermQuery::new("hidden").value(true)),
    );

    assert_eq!(
        query.to_json().unwrap(),
        json!({
            "constant_score": {
                "filter": {
                    "bool": {
                        "must": { "term": { "status": "active" } },
                        "must_not": { "term": { "hidden": true } }
                    }
                }
            }
        })
    );
}
