//! Release endpoints

use chrono::{Datelike, NaiveDate};

use crate::client::{pagination, ClientError, ClientResult, Params};
use crate::enums::{OrderBy, SortOrder};
use crate::fred::{
    decode_one, decode_records, earliest_realtime, ensure_exclude_requires_tags,
    ensure_order_allowed, service_today, Fred, ListQuery, RealtimePeriod, RelatedTagsQuery,
    ReleaseDatesQuery, ReleasesDatesQuery, SeriesListQuery, TagsQuery, DATES_PAGE_LIMIT,
    PAGE_LIMIT, RELEASE_ORDERS, SERIES_ORDERS, TAG_ORDERS,
};
use crate::{Release, ReleaseDate, Series, Source, Tag};

/// Ordering attributes accepted by the all-releases date listing.
const RELEASES_DATES_ORDERS: [OrderBy; 3] = [
    OrderBy::ReleaseDate,
    OrderBy::ReleaseId,
    OrderBy::ReleaseName,
];

fn ensure_release_id(release_id: u32) -> ClientResult<()> {
    if release_id == 0 {
        return Err(ClientError::InvalidParameter(
            "release_id must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

impl Fred {
    /// Get all releases of economic data.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/releases.html>
    pub async fn releases(&self, query: &ListQuery) -> ClientResult<Vec<Release>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::ReleaseId);
        ensure_order_allowed(order_by, &RELEASE_ORDERS)?;

        let mut params = Params::new();
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/releases",
            "releases",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get release dates for all releases of economic data.
    ///
    /// The real-time start defaults to the first day of the current year,
    /// matching the service.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/releases_dates.html>
    pub async fn releases_dates(
        &self,
        query: &ReleasesDatesQuery,
    ) -> ClientResult<Vec<ReleaseDate>> {
        let first_of_year = NaiveDate::from_ymd_opt(service_today().year(), 1, 1)
            .expect("january first always exists");
        let (start, end) = query.realtime.resolve_or(first_of_year)?;
        let order_by = query.order_by.unwrap_or(OrderBy::ReleaseId);
        ensure_order_allowed(order_by, &RELEASES_DATES_ORDERS)?;

        let mut params = Params::new();
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Desc));
        params.push(
            "include_release_dates_with_no_data",
            query.include_release_dates_with_no_data,
        );

        let records = pagination::fetch_all(
            self.api(),
            "/fred/releases/dates",
            "release_dates",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get a release of economic data.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/release.html>
    pub async fn release(
        &self,
        release_id: u32,
        realtime: &RealtimePeriod,
    ) -> ClientResult<Release> {
        ensure_release_id(release_id)?;
        let (start, end) = realtime.resolve()?;

        let mut params = Params::new();
        params.push("release_id", release_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);

        let records =
            pagination::fetch_all(self.api(), "/fred/release", "releases", None, &params).await?;
        decode_one(records, "release")
    }

    /// Get release dates for one release of economic data.
    ///
    /// The real-time start defaults to the earliest supported date so the
    /// whole history comes back, matching the service.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/release_dates.html>
    pub async fn release_dates(
        &self,
        release_id: u32,
        query: &ReleaseDatesQuery,
    ) -> ClientResult<Vec<ReleaseDate>> {
        ensure_release_id(release_id)?;
        let (start, end) = query.realtime.resolve_or(earliest_realtime())?;

        let mut params = Params::new();
        params.push("release_id", release_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));
        params.push(
            "include_release_dates_with_no_data",
            query.include_release_dates_with_no_data,
        );

        let records = pagination::fetch_all(
            self.api(),
            "/fred/release/dates",
            "release_dates",
            Some(DATES_PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the series on a release.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/release_series.html>
    pub async fn release_series(
        &self,
        release_id: u32,
        query: &SeriesListQuery,
    ) -> ClientResult<Vec<Series>> {
        ensure_release_id(release_id)?;
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesId);
        ensure_order_allowed(order_by, &SERIES_ORDERS)?;
        ensure_exclude_requires_tags(&query.tag_names, &query.exclude_tag_names)?;

        let mut params = Params::new();
        params.push("release_id", release_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));
        params.push_opt("filter_variable", query.filter_variable);
        params.push_opt("filter_value", query.filter_value);
        params.push_opt("tag_names", query.tag_names.clone());
        params.push_opt("exclude_tag_names", query.exclude_tag_names.clone());

        let records = pagination::fetch_all(
            self.api(),
            "/fred/release/series",
            "seriess",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the sources for a release.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/release_sources.html>
    pub async fn release_sources(
        &self,
        release_id: u32,
        realtime: &RealtimePeriod,
    ) -> ClientResult<Vec<Source>> {
        ensure_release_id(release_id)?;
        let (start, end) = realtime.resolve()?;

        let mut params = Params::new();
        params.push("release_id", release_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);

        let records = pagination::fetch_all(
            self.api(),
            "/fred/release/sources",
            "sources",
            None,
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the tags for a release.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/release_tags.html>
    pub async fn release_tags(&self, release_id: u32, query: &TagsQuery) -> ClientResult<Vec<Tag>> {
        ensure_release_id(release_id)?;
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;

        let mut params = Params::new();
        params.push("release_id", release_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push_opt("tag_names", query.tag_names.clone());
        params.push_opt("tag_group_id", query.tag_group_id);
        params.push_opt("search_text", query.search_text.clone());
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/release/tags",
            "tags",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get tags related to the tags of a release.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/release_related_tags.html>
    pub async fn release_related_tags(
        &self,
        release_id: u32,
        query: &RelatedTagsQuery,
    ) -> ClientResult<Vec<Tag>> {
        ensure_release_id(release_id)?;
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;

        let mut params = Params::new();
        params.push("release_id", release_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push_opt("tag_names", query.tag_names.clone());
        params.push_opt("exclude_tag_names", query.exclude_tag_names.clone());
        params.push_opt("tag_group_id", query.tag_group_id);
        params.push_opt("search_text", query.search_text.clone());
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/release/related_tags",
            "tags",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }
}
