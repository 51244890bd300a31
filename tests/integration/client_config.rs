//! Integration tests for client construction and quota wiring

use std::time::Duration;
use stlouisfed::{ClientError, Fred, Quota};

const API_KEY: &str = "abcdefghijklmnopqrstuvwxyz123456";

#[test]
fn test_new_client_carries_documented_quota() {
    let fred = Fred::new(API_KEY).unwrap();
    let limiter = fred.limiter().expect("gate enabled by default");
    assert_eq!(limiter.quota().max_calls(), 120);
    assert_eq!(limiter.quota().window(), Duration::from_secs(60));
}

#[test]
fn test_custom_quota_is_respected() {
    let quota = Quota::new(10, Duration::from_secs(5)).unwrap();
    let fred = Fred::with_quota(API_KEY, quota).unwrap();
    assert_eq!(fred.limiter().unwrap().quota(), quota);
}

#[test]
fn test_rate_limit_can_be_disabled() {
    let fred = Fred::without_rate_limit(API_KEY).unwrap();
    assert!(fred.limiter().is_none());
}

#[test]
fn test_uppercase_api_key_is_accepted() {
    assert!(Fred::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ123456").is_ok());
}

#[test]
fn test_short_api_key_is_rejected() {
    assert!(matches!(
        Fred::new("tooshort"),
        Err(ClientError::InvalidApiKey)
    ));
}

#[test]
fn test_api_key_with_symbols_is_rejected() {
    assert!(matches!(
        Fred::new("abcdefghijklmnopqrstuvwxyz12345!"),
        Err(ClientError::InvalidApiKey)
    ));
}

#[test]
fn test_each_client_owns_its_own_gate() {
    let first = Fred::new(API_KEY).unwrap();
    let second = Fred::new(API_KEY).unwrap();
    assert!(!std::sync::Arc::ptr_eq(
        first.limiter().unwrap(),
        second.limiter().unwrap()
    ));
}
