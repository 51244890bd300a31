//! Series endpoints
//!
//! The core of the catalog: series metadata, observations (with vintage
//! support), search, tags, updates, and vintage dates.

use chrono::NaiveDate;

use crate::client::{pagination, ClientError, ClientResult, Params};
use crate::enums::{
    AggregationMethod, FilterValue, OrderBy, OutputType, SearchType, SortOrder, Unit,
};
use crate::fred::{
    decode_one, decode_records, earliest_realtime, ensure_exclude_requires_tags,
    ensure_order_allowed, latest_observation, Fred, ListQuery, ObservationsQuery, RealtimePeriod,
    SearchRelatedTagsQuery, SearchTagsQuery, SeriesSearchQuery, UpdatesQuery, VintageDatesQuery,
    DATES_PAGE_LIMIT, OBSERVATIONS_PAGE_LIMIT, PAGE_LIMIT, TAG_ORDERS,
};
use crate::{Category, Observation, Release, Series, Tag};

/// Ordering attributes accepted by series search; search rank on top of the
/// usual series orders.
const SEARCH_ORDERS: [OrderBy; 13] = [
    OrderBy::SearchRank,
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

fn format_vintage_dates(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect()
}

impl Fred {
    /// Get an economic data series.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series.html>
    pub async fn series(&self, series_id: &str, realtime: &RealtimePeriod) -> ClientResult<Series> {
        let (start, end) = realtime.resolve()?;

        let mut params = Params::new();
        params.push("series_id", series_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);

        let records =
            pagination::fetch_all(self.api(), "/fred/series", "seriess", None, &params).await?;
        decode_one(records, "series")
    }

    /// Get the categories for an economic data series.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_categories.html>
    pub async fn series_categories(
        &self,
        series_id: &str,
        realtime: &RealtimePeriod,
    ) -> ClientResult<Vec<Category>> {
        let (start, end) = realtime.resolve()?;

        let mut params = Params::new();
        params.push("series_id", series_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);

        let records = pagination::fetch_all(
            self.api(),
            "/fred/series/categories",
            "categories",
            None,
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the observations or data values for an economic data series.
    ///
    /// `vintage_dates` downloads data as it existed on those dates in
    /// history; it substitutes for the real-time period.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_observations.html>
    pub async fn series_observations(
        &self,
        series_id: &str,
        query: &ObservationsQuery,
    ) -> ClientResult<Vec<Observation>> {
        let (start, end) = query.realtime.resolve()?;
        let observation_start = query.observation_start.unwrap_or_else(earliest_realtime);
        let observation_end = query.observation_end.unwrap_or_else(latest_observation);

        let mut params = Params::new();
        params.push("series_id", series_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));
        params.push("observation_start", observation_start);
        params.push("observation_end", observation_end);
        params.push("units", query.units.unwrap_or(Unit::Lin));
        params.push_opt("frequency", query.frequency);
        params.push(
            "aggregation_method",
            query.aggregation_method.unwrap_or(AggregationMethod::Average),
        );
        params.push(
            "output_type",
            query.output_type.unwrap_or(OutputType::RealtimePeriod),
        );
        params.push_opt(
            "vintage_dates",
            query.vintage_dates.as_deref().map(format_vintage_dates),
        );

        let records = pagination::fetch_all(
            self.api(),
            "/fred/series/observations",
            "observations",
            Some(OBSERVATIONS_PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the release for an economic data series.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_release.html>
    pub async fn series_release(
        &self,
        series_id: &str,
        realtime: &RealtimePeriod,
    ) -> ClientResult<Release> {
        let (start, end) = realtime.resolve()?;

        let mut params = Params::new();
        params.push("series_id", series_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);

        let records =
            pagination::fetch_all(self.api(), "/fred/series/release", "releases", None, &params)
                .await?;
        decode_one(records, "release")
    }

    /// Get economic data series that match search text.
    ///
    /// Full-text searches default to ordering by search rank, id searches by
    /// series id; search rank and popularity order descending by default.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_search.html>
    pub async fn series_search(
        &self,
        search_text: &str,
        query: &SeriesSearchQuery,
    ) -> ClientResult<Vec<Series>> {
        let (start, end) = query.realtime.resolve()?;
        let search_type = query.search_type.unwrap_or(SearchType::FullText);
        let order_by = query.order_by.unwrap_or(match search_type {
            SearchType::FullText => OrderBy::SearchRank,
            SearchType::SeriesId => OrderBy::SeriesId,
        });
        ensure_order_allowed(order_by, &SEARCH_ORDERS)?;
        let sort_order = query.sort_order.unwrap_or(match order_by {
            OrderBy::SearchRank | OrderBy::Popularity => SortOrder::Desc,
            _ => SortOrder::Asc,
        });
        ensure_exclude_requires_tags(&query.tag_names, &query.exclude_tag_names)?;

        let mut params = Params::new();
        params.push("search_text", search_text);
        params.push("search_type", search_type);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("order_by", order_by);
        params.push("sort_order", sort_order);
        params.push_opt("filter_variable", query.filter_variable);
        params.push_opt("filter_value", query.filter_value);
        params.push_opt("tag_names", query.tag_names.clone());
        params.push_opt("exclude_tag_names", query.exclude_tag_names.clone());

        let records = pagination::fetch_all(
            self.api(),
            "/fred/series/search",
            "seriess",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the tags for a series search.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_search_tags.html>
    pub async fn series_search_tags(
        &self,
        series_search_text: &str,
        query: &SearchTagsQuery,
    ) -> ClientResult<Vec<Tag>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;

        let mut params = Params::new();
        params.push("series_search_text", series_search_text);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push_opt("tag_names", query.tag_names.clone());
        params.push_opt("tag_group_id", query.tag_group_id);
        params.push_opt("tag_search_text", query.tag_search_text.clone());
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/series/search/tags",
            "tags",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get tags related to the tags of a series search.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_search_related_tags.html>
    pub async fn series_search_related_tags(
        &self,
        series_search_text: &str,
        query: &SearchRelatedTagsQuery,
    ) -> ClientResult<Vec<Tag>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;

        let mut params = Params::new();
        params.push("series_search_text", series_search_text);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push_opt("tag_names", query.tag_names.clone());
        params.push_opt("exclude_tag_names", query.exclude_tag_names.clone());
        params.push_opt("tag_group_id", query.tag_group_id);
        params.push_opt("tag_search_text", query.tag_search_text.clone());
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/series/search/related_tags",
            "tags",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the tags for an economic data series.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_tags.html>
    pub async fn series_tags(&self, series_id: &str, query: &ListQuery) -> ClientResult<Vec<Tag>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;

        let mut params = Params::new();
        params.push("series_id", series_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records =
            pagination::fetch_all(self.api(), "/fred/series/tags", "tags", None, &params).await?;
        decode_records(records)
    }

    /// Get economic data series sorted by when observations were updated,
    /// most recent first.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_updates.html>
    ///
    /// # Errors
    /// Returns `InvalidParameter` unless `start_time` and `end_time` are
    /// given together with `start_time` strictly earlier.
    pub async fn series_updates(&self, query: &UpdatesQuery) -> ClientResult<Vec<Series>> {
        let (start, end) = query.realtime.resolve()?;

        match (query.start_time, query.end_time) {
            (Some(_), None) => {
                return Err(ClientError::InvalidParameter(
                    "end_time is required if start_time is set".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(ClientError::InvalidParameter(
                    "start_time is required if end_time is set".to_string(),
                ))
            }
            (Some(from), Some(to)) if from >= to => {
                return Err(ClientError::InvalidParameter(
                    "end_time must be greater than start_time".to_string(),
                ))
            }
            _ => {}
        }

        let mut params = Params::new();
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push(
            "filter_value",
            query.filter_value.unwrap_or(FilterValue::All),
        );
        params.push_opt("start_time", query.start_time);
        params.push_opt("end_time", query.end_time);

        let records = pagination::fetch_all(
            self.api(),
            "/fred/series/updates",
            "seriess",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the dates in history when a series' data values were revised or
    /// new data values were released.
    ///
    /// The real-time start defaults to the earliest supported date so the
    /// whole vintage history comes back, matching the service.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/series_vintagedates.html>
    pub async fn series_vintagedates(
        &self,
        series_id: &str,
        query: &VintageDatesQuery,
    ) -> ClientResult<Vec<NaiveDate>> {
        let (start, end) = query.realtime.resolve_or(earliest_realtime())?;

        let mut params = Params::new();
        params.push("series_id", series_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/series/vintagedates",
            "vintage_dates",
            Some(DATES_PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }
}
