//! FRED/ALFRED endpoint catalog
//!
//! [`Fred`] exposes each documented listing as a typed method. Optional
//! parameters travel in per-endpoint query structs so `..Default::default()`
//! reads like the service's own defaults. Validation the service would
//! reject anyway (date ranges, order_by allow-lists, id signs) happens
//! client-side and surfaces as [`ClientError::InvalidParameter`] without
//! spending a call against the quota.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::client::{ApiClient, ClientError, ClientResult, DEFAULT_BASE_URL};
use crate::enums::{
    AggregationMethod, FilterValue, FilterVariable, Frequency, OrderBy, OutputType, SearchType,
    SortOrder, TagGroupId, Unit,
};
use crate::rate_limit::{Quota, RateLimiter};

mod categories;
mod releases;
mod series;
mod sources;
mod tags;

/// Default page size for listing endpoints.
pub(crate) const PAGE_LIMIT: u32 = 1_000;

/// Ordering attributes accepted by series listings.
pub(crate) const SERIES_ORDERS: [OrderBy; 12] = [
    OrderBy::SeriesId,
    OrderBy::Title,
    OrderBy::Units,
    OrderBy::Frequency,
    OrderBy::SeasonalAdjustment,
    OrderBy::RealtimeStart,
    OrderBy::RealtimeEnd,
    OrderBy::LastUpdated,
    OrderBy::ObservationStart,
    OrderBy::ObservationEnd,
    OrderBy::Popularity,
    OrderBy::GroupPopularity,
];

/// Ordering attributes accepted by tag listings.
pub(crate) const TAG_ORDERS: [OrderBy; 5] = [
    OrderBy::SeriesCount,
    OrderBy::Popularity,
    OrderBy::Created,
    OrderBy::Name,
    OrderBy::GroupId,
];

/// Ordering attributes accepted by release listings.
pub(crate) const RELEASE_ORDERS: [OrderBy; 5] = [
    OrderBy::ReleaseId,
    OrderBy::Name,
    OrderBy::PressRelease,
    OrderBy::RealtimeStart,
    OrderBy::RealtimeEnd,
];

/// Tag groups accepted as filters; citation-and-copyright is browse-only.
pub(crate) const FILTERABLE_TAG_GROUPS: [TagGroupId; 7] = [
    TagGroupId::Frequency,
    TagGroupId::GeneralOrConcept,
    TagGroupId::Geography,
    TagGroupId::GeographyType,
    TagGroupId::Release,
    TagGroupId::SeasonalAdjustment,
    TagGroupId::Source,
];
/// Page size for release-date and vintage-date listings.
pub(crate) const DATES_PAGE_LIMIT: u32 = 10_000;
/// Page size for observation listings.
pub(crate) const OBSERVATIONS_PAGE_LIMIT: u32 = 100_000;

/// Earliest date the service accepts for any real-time or observation bound.
pub(crate) fn earliest_realtime() -> NaiveDate {
    NaiveDate::from_ymd_opt(1776, 7, 4).expect("valid literal date")
}

/// Sentinel "forever" date the service uses for open-ended observation ends.
pub(crate) fn latest_observation() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).expect("valid literal date")
}

/// Today according to the service's clock.
///
/// The service runs on US Central time; validating "not after today" against
/// a UTC date would reject dates the service still considers today for up to
/// six hours after its midnight. Computed with the standard-time offset;
/// during daylight saving the derived date can lag the service by one hour
/// past midnight, which only ever keeps a permitted date permitted.
pub(crate) fn service_today() -> NaiveDate {
    let central = FixedOffset::west_opt(6 * 3600).expect("valid literal offset");
    Utc::now().with_timezone(&central).date_naive()
}

/// Real-time period bounds; `None` falls back to the endpoint's default.
///
/// For most endpoints both bounds default to today; the handful of archival
/// listings that default the start earlier document it on their method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealtimePeriod {
    /// Start of the real-time period
    pub start: Option<NaiveDate>,
    /// End of the real-time period
    pub end: Option<NaiveDate>,
}

impl RealtimePeriod {
    /// A period with both bounds pinned.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Resolve defaults (start falls back to `default_start`, end to the
    /// service's today) and check the service's range rules.
    pub(crate) fn resolve_or(&self, default_start: NaiveDate) -> ClientResult<(NaiveDate, NaiveDate)> {
        let today = service_today();
        let start = self.start.unwrap_or(default_start);
        let end = self.end.unwrap_or(today);

        if start < earliest_realtime() {
            return Err(ClientError::InvalidParameter(format!(
                "realtime_start ({start}) is before the earliest supported date ({})",
                earliest_realtime()
            )));
        }
        if end > today {
            return Err(ClientError::InvalidParameter(format!(
                "realtime_end ({end}) is after today ({today})"
            )));
        }
        if start > end {
            return Err(ClientError::InvalidParameter(format!(
                "realtime_start ({start}) is after realtime_end ({end})"
            )));
        }

        Ok((start, end))
    }

    /// Resolve with both bounds defaulting to the service's today.
    pub(crate) fn resolve(&self) -> ClientResult<(NaiveDate, NaiveDate)> {
        self.resolve_or(service_today())
    }
}

/// Options for plain ordered listings (releases, sources, series tags).
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Ordering attribute; each endpoint documents its default
    pub order_by: Option<OrderBy>,
    /// Sort direction; defaults ascending
    pub sort_order: Option<SortOrder>,
}

/// Options for series listings under a category, release, or tag set.
#[derive(Debug, Clone, Default)]
pub struct SeriesListQuery {
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Ordering attribute; defaults to the series id
    pub order_by: Option<OrderBy>,
    /// Sort direction; defaults ascending
    pub sort_order: Option<SortOrder>,
    /// Attribute to filter by
    pub filter_variable: Option<FilterVariable>,
    /// Value of the filter attribute
    pub filter_value: Option<FilterValue>,
    /// Keep series matching all of these tags
    pub tag_names: Option<Vec<String>>,
    /// Drop series matching any of these tags; requires `tag_names`
    pub exclude_tag_names: Option<Vec<String>>,
}

/// Options for tag listings.
#[derive(Debug, Clone, Default)]
pub struct TagsQuery {
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Keep tags among these names
    pub tag_names: Option<Vec<String>>,
    /// Keep tags of this group
    pub tag_group_id: Option<TagGroupId>,
    /// The words to find matching tags with
    pub search_text: Option<String>,
    /// Ordering attribute; defaults to the series count
    pub order_by: Option<OrderBy>,
    /// Sort direction; defaults ascending
    pub sort_order: Option<SortOrder>,
}

/// Options for related-tag listings.
#[derive(Debug, Clone, Default)]
pub struct RelatedTagsQuery {
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Tags the related tags must co-occur with
    pub tag_names: Option<Vec<String>>,
    /// Tags the related tags must not co-occur with
    pub exclude_tag_names: Option<Vec<String>>,
    /// Keep tags of this group
    pub tag_group_id: Option<TagGroupId>,
    /// The words to find matching tags with
    pub search_text: Option<String>,
    /// Ordering attribute; defaults to the series count
    pub order_by: Option<OrderBy>,
    /// Sort direction; defaults ascending
    pub sort_order: Option<SortOrder>,
}

/// Options for tag listings scoped to a series search.
#[derive(Debug, Clone, Default)]
pub struct SearchTagsQuery {
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Keep tags among these names
    pub tag_names: Option<Vec<String>>,
    /// Keep tags of this group
    pub tag_group_id: Option<TagGroupId>,
    /// The words to find matching tags with
    pub tag_search_text: Option<String>,
    /// Ordering attribute; defaults to the series count
    pub order_by: Option<OrderBy>,
    /// Sort direction; defaults ascending
    pub sort_order: Option<SortOrder>,
}

/// Options for related-tag listings scoped to a series search.
#[derive(Debug, Clone, Default)]
pub struct SearchRelatedTagsQuery {
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Tags the related tags must co-occur with
    pub tag_names: Option<Vec<String>>,
    /// Tags the related tags must not co-occur with
    pub exclude_tag_names: Option<Vec<String>>,
    /// Keep tags of this group
    pub tag_group_id: Option<TagGroupId>,
    /// The words to find matching tags with
    pub tag_search_text: Option<String>,
    /// Ordering attribute; defaults to the series count
    pub order_by: Option<OrderBy>,
    /// Sort direction; defaults ascending
    pub sort_order: Option<SortOrder>,
}

/// Options for fetching series observations.
#[derive(Debug, Clone, Default)]
pub struct ObservationsQuery {
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Sort direction over observation dates; defaults ascending
    pub sort_order: Option<SortOrder>,
    /// Start of the observation period; defaults to the earliest supported
    pub observation_start: Option<NaiveDate>,
    /// End of the observation period; defaults open-ended
    pub observation_end: Option<NaiveDate>,
    /// Data value transformation; defaults to levels
    pub units: Option<Unit>,
    /// Lower frequency to aggregate values to
    pub frequency: Option<Frequency>,
    /// Aggregation method when a frequency is set; defaults to the average
    pub aggregation_method: Option<AggregationMethod>,
    /// Output layout; defaults to observations by real-time period
    pub output_type: Option<OutputType>,
    /// Download data as it existed on these dates instead of a real-time
    /// period
    pub vintage_dates: Option<Vec<NaiveDate>>,
}

/// Options for series search.
#[derive(Debug, Clone, Default)]
pub struct SeriesSearchQuery {
    /// Kind of search; defaults to full text
    pub search_type: Option<SearchType>,
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Ordering attribute; defaults to search rank for full-text searches
    /// and the series id for id searches
    pub order_by: Option<OrderBy>,
    /// Sort direction; defaults descending when ordered by search rank or
    /// popularity, ascending otherwise
    pub sort_order: Option<SortOrder>,
    /// Attribute to filter by
    pub filter_variable: Option<FilterVariable>,
    /// Value of the filter attribute
    pub filter_value: Option<FilterValue>,
    /// Keep series matching all of these tags
    pub tag_names: Option<Vec<String>>,
    /// Drop series matching any of these tags; requires `tag_names`
    pub exclude_tag_names: Option<Vec<String>>,
}

/// Options for the series-updates listing.
#[derive(Debug, Clone, Default)]
pub struct UpdatesQuery {
    /// Real-time period
    pub realtime: RealtimePeriod,
    /// Geographic scope; defaults to all series
    pub filter_value: Option<FilterValue>,
    /// Keep series updated at or after this minute; requires `end_time`
    pub start_time: Option<NaiveDateTime>,
    /// Keep series updated before this minute; requires `start_time`
    pub end_time: Option<NaiveDateTime>,
}

/// Options for the all-releases date listing.
#[derive(Debug, Clone, Default)]
pub struct ReleasesDatesQuery {
    /// Real-time period; start defaults to the first day of the current year
    pub realtime: RealtimePeriod,
    /// Ordering attribute; defaults to the release id
    pub order_by: Option<OrderBy>,
    /// Sort direction; defaults descending
    pub sort_order: Option<SortOrder>,
    /// Also list dates with no data yet
    pub include_release_dates_with_no_data: bool,
}

/// Options for one release's date listing.
#[derive(Debug, Clone, Default)]
pub struct ReleaseDatesQuery {
    /// Real-time period; start defaults to the earliest supported date
    pub realtime: RealtimePeriod,
    /// Sort direction; defaults ascending
    pub sort_order: Option<SortOrder>,
    /// Also list dates with no data yet
    pub include_release_dates_with_no_data: bool,
}

/// Options for the vintage-date listing.
#[derive(Debug, Clone, Default)]
pub struct VintageDatesQuery {
    /// Real-time period; start defaults to the earliest supported date
    pub realtime: RealtimePeriod,
    /// Sort direction; defaults ascending
    pub sort_order: Option<SortOrder>,
}

/// Client for the FRED economic data API.
///
/// One instance owns one API key, one connection pool, and one call gate;
/// clones of the instance are not needed — share it behind `Arc` if multiple
/// tasks fetch concurrently.
pub struct Fred {
    api: ApiClient,
}

/// ALFRED (Archival FRED) client.
///
/// The archival surface is the same endpoint catalog with the real-time and
/// vintage parameters that [`Fred`] already carries.
pub type Alfred = Fred;

impl Fred {
    /// Create a client with the documented service quota (120 calls per 60
    /// seconds).
    ///
    /// # Errors
    /// Returns `InvalidApiKey` unless `api_key` is a 32 character
    /// alphanumeric string.
    pub fn new(api_key: &str) -> ClientResult<Self> {
        Self::with_quota(api_key, Quota::default())
    }

    /// Create a client enforcing a custom quota.
    pub fn with_quota(api_key: &str, quota: Quota) -> ClientResult<Self> {
        Ok(Self {
            api: ApiClient::new(api_key, DEFAULT_BASE_URL, Some(quota))?,
        })
    }

    /// Create a client with the call gate disabled.
    ///
    /// Useful behind an external limiter; the service will answer 429 when
    /// its quota is exceeded.
    pub fn without_rate_limit(api_key: &str) -> ClientResult<Self> {
        Ok(Self {
            api: ApiClient::new(api_key, DEFAULT_BASE_URL, None)?,
        })
    }

    /// Create a client against a non-default service root (a mirror or a
    /// test double).
    pub fn with_base_url(
        api_key: &str,
        base_url: impl Into<String>,
        quota: Option<Quota>,
    ) -> ClientResult<Self> {
        Ok(Self {
            api: ApiClient::new(api_key, base_url, quota)?,
        })
    }

    /// The call gate shared by this client's requests, if enabled.
    pub fn limiter(&self) -> Option<&Arc<RateLimiter>> {
        self.api.limiter()
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }
}

/// Decode a list of raw records into typed ones.
pub(crate) fn decode_records<T: DeserializeOwned>(records: Vec<Value>) -> ClientResult<Vec<T>> {
    serde_json::from_value(Value::Array(records))
        .map_err(|e| ClientError::Decode(format!("record shape mismatch: {e}")))
}

/// Decode the first record of a single-record payload.
pub(crate) fn decode_one<T: DeserializeOwned>(
    mut records: Vec<Value>,
    what: &str,
) -> ClientResult<T> {
    if records.is_empty() {
        return Err(ClientError::Decode(format!("empty {what} response")));
    }
    serde_json::from_value(records.remove(0))
        .map_err(|e| ClientError::Decode(format!("{what} shape mismatch: {e}")))
}

/// Check an ordering attribute against an endpoint's allow-list.
pub(crate) fn ensure_order_allowed(order_by: OrderBy, allowed: &[OrderBy]) -> ClientResult<()> {
    if allowed.contains(&order_by) {
        return Ok(());
    }
    Err(ClientError::InvalidParameter(format!(
        "order_by ({order_by}) is not supported by this endpoint; expected one of: {}",
        allowed
            .iter()
            .map(|o| o.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

/// Check a tag group against an endpoint's allow-list.
pub(crate) fn ensure_tag_group_allowed(
    group: Option<TagGroupId>,
    allowed: &[TagGroupId],
) -> ClientResult<()> {
    match group {
        Some(group) if !allowed.contains(&group) => Err(ClientError::InvalidParameter(format!(
            "tag_group_id ({group}) is not supported by this endpoint; expected one of: {}",
            allowed
                .iter()
                .map(|g| g.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
        _ => Ok(()),
    }
}

/// `exclude_tag_names` only makes sense with `tag_names` narrowing the match
/// set first; the service rejects the bare form.
pub(crate) fn ensure_exclude_requires_tags(
    tag_names: &Option<Vec<String>>,
    exclude_tag_names: &Option<Vec<String>>,
) -> ClientResult<()> {
    if exclude_tag_names.is_some() && tag_names.is_none() {
        return Err(ClientError::InvalidParameter(
            "exclude_tag_names requires tag_names to also be set".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_realtime_defaults_to_today() {
        let (start, end) = RealtimePeriod::default().resolve().unwrap();
        let today = service_today();
        assert_eq!(start, today);
        assert_eq!(end, today);
    }

    #[test]
    fn test_realtime_rejects_prehistoric_start() {
        let period = RealtimePeriod {
            start: NaiveDate::from_ymd_opt(1700, 1, 1),
            end: None,
        };
        assert!(matches!(
            period.resolve(),
            Err(ClientError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_realtime_rejects_future_end() {
        let period = RealtimePeriod {
            start: None,
            end: service_today().succ_opt(),
        };
        assert!(matches!(
            period.resolve(),
            Err(ClientError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_realtime_rejects_inverted_range() {
        let period = RealtimePeriod::between(
            NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        );
        assert!(matches!(
            period.resolve(),
            Err(ClientError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_order_allow_list() {
        let allowed = [OrderBy::SeriesId, OrderBy::Title];
        assert!(ensure_order_allowed(OrderBy::Title, &allowed).is_ok());
        assert!(ensure_order_allowed(OrderBy::SearchRank, &allowed).is_err());
    }

    #[test]
    fn test_exclude_requires_tags() {
        let excludes = Some(vec!["discontinued".to_string()]);
        assert!(ensure_exclude_requires_tags(&None, &excludes).is_err());

        let tags = Some(vec!["gdp".to_string()]);
        assert!(ensure_exclude_requires_tags(&tags, &excludes).is_ok());
        assert!(ensure_exclude_requires_tags(&None, &None).is_ok());
    }

    #[test]
    fn test_decode_one_rejects_empty() {
        let result: ClientResult<crate::Category> = decode_one(Vec::new(), "category");
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }
}
