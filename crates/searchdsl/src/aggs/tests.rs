use super::*;
use crate::{
    query::TermQuery,
    script::Script,
    sort::Sort,
    validate::{CollectMode, SortOrder},
};
use serde_json::json;

#[test]
fn metric_aggregations_wrap_name_then_tag() {
    let agg = AvgAggregation::new("avg_grade").field("grade");
    assert_eq!(
        agg.to_json().unwrap(),
        json!({ "avg_grade": { "avg": { "field": "grade" } } })
    );

    let agg = SumAggregation::new("hat_prices").field("price").missing(0);
    assert_eq!(
        agg.to_json().unwrap(),
        json!({ "hat_prices": { "sum": { "field": "price", "missing": 0 } } })
    );
}

#[test]
fn scripted_metric() {
    let agg = MaxAggregation::new("max_price")
        .script(Script::new().source("doc.price.value * 1.2"));
    assert_eq!(
        agg.to_json().unwrap(),
        json!({ "max_price": { "max": { "script": { "source": "doc.price.value * 1.2" } } } })
    );
}

#[test]
fn percentiles_with_custom_cut_points() {
    let agg = PercentilesAggregation::new("load_time_outlier")
        .field("load_time")
        .percents([95.0, 99.0, 99.9]);
    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "load_time_outlier": {
                "percentiles": { "field": "load_time", "percents": [95.0, 99.0, 99.9] }
            }
        })
    );
}

#[test]
fn histogram_with_interval() {
    let agg = HistogramAggregation::new("prices").field("my_field").interval(10);
    assert_eq!(
        agg.to_json().unwrap(),
        json!({ "prices": { "histogram": { "field": "my_field", "interval": 10 } } })
    );
}

#[test]
fn histogram_extended_bounds_and_min_doc_count() {
    let agg = HistogramAggregation::new("prices")
        .field("price")
        .interval(50)
        .min_doc_count(0)
        .extended_bounds(0, 500);

    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "prices": {
                "histogram": {
                    "field": "price",
                    "interval": 50,
                    "min_doc_count": 0,
                    "extended_bounds": { "min": 0, "max": 500 }
                }
            }
        })
    );
}

#[test]
fn terms_aggregation_with_ordering() {
    let agg = TermsAggregation::new("genres")
        .field("genre")
        .size(5)
        .order("_count", SortOrder::Asc)
        .collect_mode(CollectMode::BreadthFirst);

    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "genres": {
                "terms": {
                    "field": "genre",
                    "size": 5,
                    "order": { "_count": "asc" },
                    "collect_mode": "breadth_first"
                }
            }
        })
    );
}

#[test]
fn date_histogram_calendar_interval() {
    let agg = DateHistogramAggregation::new("sales_over_time")
        .field("date")
        .calendar_interval("1M")
        .format("yyyy-MM-dd")
        .time_zone("-01:00");

    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "sales_over_time": {
                "date_histogram": {
                    "field": "date",
                    "calendar_interval": "1M",
                    "format": "yyyy-MM-dd",
                    "time_zone": "-01:00"
                }
            }
        })
    );
}

#[test]
fn range_aggregation_buckets_keep_order() {
    let agg = RangeAggregation::new("price_ranges")
        .field("price")
        .range(RangeBucket::new().to(100))
        .range(RangeBucket::new().from(100).to(200).key("mid"))
        .range(RangeBucket::new().from(200));

    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "price_ranges": {
                "range": {
                    "field": "price",
                    "ranges": [
                        { "to": 100 },
                        { "from": 100, "to": 200, "key": "mid" },
                        { "from": 200 }
                    ]
                }
            }
        })
    );
}

#[test]
fn range_aggregation_requires_buckets() {
    let err = RangeAggregation::new("price_ranges").field("price").to_json().unwrap_err();
    assert_eq!(err.to_string(), "'ranges' is required for RangeAggregation");
}

#[test]
fn filter_aggregation_embeds_the_query() {
    let agg = FilterAggregation::new("t_shirts", TermQuery::new("type").value("t-shirt"))
        .aggregation(AvgAggregation::new("avg_price").field("price"));

    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "t_shirts": {
                "filter": { "term": { "type": "t-shirt" } },
                "aggs": { "avg_price": { "avg": { "field": "price" } } }
            }
        })
    );
}

#[test]
fn filters_aggregation_keyed_form() {
    let agg = FiltersAggregation::new("messages")
        .filter("errors", TermQuery::new("body").value("error"))
        .filter("warnings", TermQuery::new("body").value("warning"))
        .other_bucket_key("other_messages");

    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "messages": {
                "filters": {
                    "filters": {
                        "errors": { "term": { "body": "error" } },
                        "warnings": { "term": { "body": "warning" } }
                    },
                    "other_bucket_key": "other_messages"
                }
            }
        })
    );
}

#[test]
fn filters_aggregation_anonymous_form() {
    let agg = FiltersAggregation::new("messages")
        .anonymous_filter(TermQuery::new("body").value("error"))
        .anonymous_filter(TermQuery::new("body").value("warning"));

    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "messages": {
                "filters": {
                    "filters": [
                        { "term": { "body": "error" } },
                        { "term": { "body": "warning" } }
                    ]
                }
            }
        })
    );
}

#[test]
fn filters_aggregation_requires_at_least_one_filter() {
    let err = FiltersAggregation::new("messages").to_json().unwrap_err();
    assert_eq!(err.to_string(), "'filters' is required for FiltersAggregation");
}

#[test]
fn global_and_missing_and_nested() {
    let agg = GlobalAggregation::new("all_products")
        .aggregation(AvgAggregation::new("avg_price").field("price"));
    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "all_products": {
                "global": {},
                "aggs": { "avg_price": { "avg": { "field": "price" } } }
            }
        })
    );

    assert_eq!(
        MissingAggregation::new("products_without_a_price", "price").to_json().unwrap(),
        json!({ "products_without_a_price": { "missing": { "field": "price" } } })
    );

    let agg = NestedAggregation::new("resellers", "resellers")
        .aggregation(MinAggregation::new("min_price").field("resellers.price"));
    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "resellers": {
                "nested": { "path": "resellers" },
                "aggs": { "min_price": { "min": { "field": "resellers.price" } } }
            }
        })
    );

    assert_eq!(
        ReverseNestedAggregation::new("back_to_root").to_json().unwrap(),
        json!({ "back_to_root": { "reverse_nested": {} } })
    );
}

#[test]
fn sub_aggregations_merge_in_insertion_order() {
    let agg = TermsAggregation::new("genres")
        .field("genre")
        .aggregation(MaxAggregation::new("max_play_count").field("play_count"))
        .aggregation(MinAggregation::new("min_play_count").field("play_count"));

    let json = agg.to_json().unwrap();
    let aggs = json["genres"]["aggs"].as_object().unwrap();
    let keys: Vec<_> = aggs.keys().collect();
    assert_eq!(keys, ["max_play_count", "min_play_count"]);
}

#[test]
fn top_hits_with_sort_and_source() {
    let agg = TopHitsAggregation::new("latest")
        .size(1)
        .sort(Sort::new("date").order(SortOrder::Desc))
        .source(false);

    assert_eq!(
        agg.to_json().unwrap(),
        json!({
            "latest": {
                "top_hits": {
                    "size": 1,
                    "sort": [{ "date": { "order": "desc" } }],
                    "_source": false
                }
            }
        })
    );
}
