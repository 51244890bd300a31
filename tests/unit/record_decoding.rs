//! Unit tests for decoding documented service payloads

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use stlouisfed::enums::TagGroupId;
use stlouisfed::{Category, Observation, Release, ReleaseDate, Series, Source, Tag};

#[test]
fn test_decodes_category_listing() {
    let categories: Vec<Category> = serde_json::from_str(
        r#"[
            { "id": 16, "name": "Exports", "parent_id": 13 },
            { "id": 17, "name": "Imports", "parent_id": 13 }
        ]"#,
    )
    .unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Exports");
    assert_eq!(categories[1].parent_id, 13);
}

#[test]
fn test_decodes_search_series_with_group_popularity() {
    let series: Series = serde_json::from_str(
        r#"{
            "id": "MSIM2",
            "realtime_start": "2017-08-01",
            "realtime_end": "2017-08-01",
            "title": "Monetary Services Index: M2 (preferred)",
            "observation_start": "1967-01-01",
            "observation_end": "2013-12-01",
            "frequency": "Monthly",
            "frequency_short": "M",
            "units": "Billions of Dollars",
            "units_short": "Bil. of $",
            "seasonal_adjustment": "Seasonally Adjusted",
            "seasonal_adjustment_short": "SA",
            "last_updated": "2014-01-17 07:16:44-06",
            "popularity": 34,
            "group_popularity": 33,
            "notes": "The MSI measure the flow of monetary services."
        }"#,
    )
    .unwrap();

    assert_eq!(series.id, "MSIM2");
    assert_eq!(series.group_popularity, Some(33));
    assert_eq!(
        series.last_updated,
        Utc.with_ymd_and_hms(2014, 1, 17, 13, 16, 44).unwrap()
    );
}

#[test]
fn test_decodes_observations_with_gaps() {
    let observations: Vec<Observation> = serde_json::from_str(
        r#"[
            {
                "realtime_start": "2013-08-14",
                "realtime_end": "2013-08-14",
                "date": "1929-01-01",
                "value": "1065.9"
            },
            {
                "realtime_start": "2013-08-14",
                "realtime_end": "2013-08-14",
                "date": "1930-01-01",
                "value": "."
            }
        ]"#,
    )
    .unwrap();

    assert_eq!(
        observations[0].value,
        Some(Decimal::from_str("1065.9").unwrap())
    );
    assert_eq!(observations[1].value, None);
}

#[test]
fn test_decodes_release_without_link() {
    let release: Release = serde_json::from_str(
        r#"{
            "id": 82,
            "realtime_start": "2013-08-14",
            "realtime_end": "2013-08-14",
            "name": "Consumer Price Index",
            "press_release": false
        }"#,
    )
    .unwrap();

    assert_eq!(release.link, None);
    assert!(!release.press_release);
}

#[test]
fn test_decodes_release_dates_with_and_without_name() {
    let with_name: ReleaseDate = serde_json::from_str(
        r#"{ "release_id": 9, "release_name": "Advance Monthly Sales", "date": "2013-08-13" }"#,
    )
    .unwrap();
    let without_name: ReleaseDate =
        serde_json::from_str(r#"{ "release_id": 82, "date": "1997-02-10" }"#).unwrap();

    assert_eq!(
        with_name.release_name.as_deref(),
        Some("Advance Monthly Sales")
    );
    assert_eq!(with_name.date, NaiveDate::from_ymd_opt(2013, 8, 13).unwrap());
    assert_eq!(without_name.release_name, None);
}

#[test]
fn test_decodes_source() {
    let source: Source = serde_json::from_str(
        r#"{
            "id": 1,
            "realtime_start": "2013-08-14",
            "realtime_end": "2013-08-14",
            "name": "Board of Governors of the Federal Reserve System",
            "link": "http://www.federalreserve.gov/"
        }"#,
    )
    .unwrap();

    assert_eq!(source.id, 1);
    assert!(source.validate().is_ok());
}

#[test]
fn test_decodes_tag_group() {
    let tag: Tag = serde_json::from_str(
        r#"{
            "name": "usa",
            "group_id": "geo",
            "notes": "United States of America",
            "created": "2012-02-27 10:18:19-06",
            "popularity": 100,
            "series_count": 527922
        }"#,
    )
    .unwrap();

    assert_eq!(tag.group_id, TagGroupId::Geography);
    assert_eq!(tag.popularity, 100);
}

#[test]
fn test_decodes_vintage_dates_as_plain_dates() {
    let dates: Vec<NaiveDate> =
        serde_json::from_str(r#"["1958-12-21", "1959-02-19", "1959-07-19"]"#).unwrap();
    assert_eq!(dates.len(), 3);
    assert_eq!(dates[0], NaiveDate::from_ymd_opt(1958, 12, 21).unwrap());
}
