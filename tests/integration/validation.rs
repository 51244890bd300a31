//! Integration tests for client-side parameter validation
//!
//! Validation fires before any request is issued, so these tests point the
//! client at a closed port; reaching the transport would fail loudly.

use chrono::NaiveDate;
use stlouisfed::enums::{OrderBy, TagGroupId};
use stlouisfed::fred::{
    ListQuery, RealtimePeriod, SeriesListQuery, SeriesSearchQuery, TagsQuery, UpdatesQuery,
};
use stlouisfed::{ClientError, Fred};

const API_KEY: &str = "abcdefghijklmnopqrstuvwxyz123456";

fn offline_client() -> Fred {
    Fred::with_base_url(API_KEY, "http://127.0.0.1:9", None).unwrap()
}

fn assert_invalid_parameter(result: Result<impl std::fmt::Debug, ClientError>) {
    match result {
        Err(ClientError::InvalidParameter(_)) => {}
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[tokio::test]
async fn test_realtime_end_after_today_is_rejected() {
    let fred = offline_client();
    let far_future = RealtimePeriod {
        start: None,
        end: NaiveDate::from_ymd_opt(9999, 1, 1),
    };
    assert_invalid_parameter(fred.category_children(13, &far_future).await);
}

#[tokio::test]
async fn test_realtime_start_before_earliest_is_rejected() {
    let fred = offline_client();
    let prehistoric = RealtimePeriod {
        start: NaiveDate::from_ymd_opt(1700, 1, 1),
        end: None,
    };
    assert_invalid_parameter(fred.series("GNPCA", &prehistoric).await);
}

#[tokio::test]
async fn test_inverted_realtime_period_is_rejected() {
    let fred = offline_client();
    let inverted = RealtimePeriod::between(
        NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    );
    assert_invalid_parameter(fred.category_children(13, &inverted).await);
}

#[tokio::test]
async fn test_series_listing_rejects_tag_order() {
    let fred = offline_client();
    let query = SeriesListQuery {
        order_by: Some(OrderBy::Created),
        ..Default::default()
    };
    assert_invalid_parameter(fred.category_series(125, &query).await);
}

#[tokio::test]
async fn test_tag_listing_rejects_series_order() {
    let fred = offline_client();
    let query = TagsQuery {
        order_by: Some(OrderBy::Title),
        ..Default::default()
    };
    assert_invalid_parameter(fred.tags(&query).await);
}

#[tokio::test]
async fn test_exclude_tags_without_tags_is_rejected() {
    let fred = offline_client();
    let query = SeriesSearchQuery {
        exclude_tag_names: Some(vec!["discontinued".to_string()]),
        ..Default::default()
    };
    assert_invalid_parameter(fred.series_search("monetary service index", &query).await);
}

#[tokio::test]
async fn test_citation_tag_group_is_not_filterable() {
    let fred = offline_client();
    let query = TagsQuery {
        tag_group_id: Some(TagGroupId::CitationAndCopyright),
        ..Default::default()
    };
    assert_invalid_parameter(fred.category_tags(125, &query).await);
}

#[tokio::test]
async fn test_zero_release_id_is_rejected() {
    let fred = offline_client();
    assert_invalid_parameter(fred.release(0, &RealtimePeriod::default()).await);
}

#[tokio::test]
async fn test_zero_source_id_is_rejected() {
    let fred = offline_client();
    assert_invalid_parameter(fred.source(0, &RealtimePeriod::default()).await);
}

#[tokio::test]
async fn test_updates_start_time_requires_end_time() {
    let fred = offline_client();
    let query = UpdatesQuery {
        start_time: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(0, 0, 0),
        ..Default::default()
    };
    assert_invalid_parameter(fred.series_updates(&query).await);
}

#[tokio::test]
async fn test_updates_window_must_be_ordered() {
    let fred = offline_client();
    let midnight = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(0, 0, 0);
    let query = UpdatesQuery {
        start_time: midnight,
        end_time: midnight,
        ..Default::default()
    };
    assert_invalid_parameter(fred.series_updates(&query).await);
}

#[tokio::test]
async fn test_tags_series_requires_tag_names() {
    let fred = offline_client();
    assert_invalid_parameter(fred.tags_series(&[], &SeriesListQuery::default()).await);
}

#[tokio::test]
async fn test_series_tags_rejects_series_order() {
    let fred = offline_client();
    let query = ListQuery {
        order_by: Some(OrderBy::ObservationStart),
        ..Default::default()
    };
    assert_invalid_parameter(fred.series_tags("GNPCA", &query).await);
}
