//! Unit tests for the request vocabulary

use std::str::FromStr;
use stlouisfed::enums::{
    AggregationMethod, FilterValue, Frequency, OrderBy, OutputType, SearchType, Unit,
};

#[test]
fn test_aggregation_methods() {
    assert_eq!(AggregationMethod::EndOfPeriod.to_string(), "eop");
    assert_eq!(
        AggregationMethod::from_str("avg").unwrap(),
        AggregationMethod::Average
    );
}

#[test]
fn test_weekly_ending_frequencies() {
    assert_eq!(Frequency::WeeklyEndingFriday.to_string(), "wef");
    assert_eq!(
        Frequency::from_str("weth").unwrap(),
        Frequency::WeeklyEndingThursday
    );
}

#[test]
fn test_output_types_are_one_through_four() {
    let all = [
        OutputType::RealtimePeriod,
        OutputType::All,
        OutputType::NewAndRevised,
        OutputType::InitialReleaseOnly,
    ];
    let wire: Vec<u8> = all.iter().map(|o| o.as_u8()).collect();
    assert_eq!(wire, vec![1, 2, 3, 4]);
}

#[test]
fn test_search_types() {
    assert_eq!(SearchType::FullText.to_string(), "full_text");
    assert!(SearchType::from_str("fuzzy").is_err());
}

#[test]
fn test_filter_values() {
    assert_eq!(FilterValue::Regional.to_string(), "regional");
    assert_eq!(FilterValue::from_str("macro").unwrap(), FilterValue::Macro);
}

#[test]
fn test_units_reject_unknown() {
    assert!(Unit::from_str("percent").is_err());
}

#[test]
fn test_order_by_covers_release_orders() {
    assert_eq!(
        OrderBy::from_str("release_name").unwrap(),
        OrderBy::ReleaseName
    );
    assert_eq!(OrderBy::PressRelease.to_string(), "press_release");
}
