//! Unit tests for query-parameter normalization

use chrono::NaiveDate;
use stlouisfed::client::{ParamValue, Params};
use stlouisfed::enums::{Frequency, OutputType, SortOrder, TagGroupId, Unit};

#[test]
fn test_dates_format_as_iso() {
    let date = NaiveDate::from_ymd_opt(2005, 2, 24).unwrap();
    assert_eq!(ParamValue::from(date).to_query_value(), "2005-02-24");
}

#[test]
fn test_update_timestamps_format_compact() {
    // 2018-03-02 02:20 travels as 201803020220
    let stamp = NaiveDate::from_ymd_opt(2018, 3, 2)
        .unwrap()
        .and_hms_opt(2, 20, 0)
        .unwrap();
    assert_eq!(ParamValue::from(stamp).to_query_value(), "201803020220");
}

#[test]
fn test_lists_join_with_semicolon() {
    let tags = vec!["monetary aggregates".to_string(), "weekly".to_string()];
    assert_eq!(
        ParamValue::from(tags).to_query_value(),
        "monetary aggregates;weekly"
    );
}

#[test]
fn test_booleans_format_lowercase() {
    assert_eq!(ParamValue::from(true).to_query_value(), "true");
    assert_eq!(ParamValue::from(false).to_query_value(), "false");
}

#[test]
fn test_enums_use_wire_values() {
    assert_eq!(ParamValue::from(Unit::Pc1).to_query_value(), "pc1");
    assert_eq!(ParamValue::from(Frequency::Quarterly).to_query_value(), "q");
    assert_eq!(ParamValue::from(SortOrder::Desc).to_query_value(), "desc");
    assert_eq!(ParamValue::from(TagGroupId::Source).to_query_value(), "src");
    // Output types are numeric on the wire
    assert_eq!(
        ParamValue::from(OutputType::NewAndRevised).to_query_value(),
        "3"
    );
}

#[test]
fn test_absent_parameters_are_omitted() {
    let mut params = Params::new();
    params.push("series_id", "T10Y2Y");
    params.push_opt("frequency", None::<Frequency>);
    params.push_opt("units", Some(Unit::Lin));

    let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["series_id", "units"]);
}

#[test]
fn test_parameters_keep_insertion_order() {
    let mut params = Params::new();
    params.push("realtime_start", NaiveDate::from_ymd_opt(2020, 7, 4).unwrap());
    params.push("realtime_end", NaiveDate::from_ymd_opt(2023, 7, 20).unwrap());
    params.push("limit", 1000u32);

    assert_eq!(
        params.pairs(),
        &[
            ("realtime_start", "2020-07-04".to_string()),
            ("realtime_end", "2023-07-20".to_string()),
            ("limit", "1000".to_string()),
        ]
    );
}
