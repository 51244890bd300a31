//! Tag endpoints

use crate::client::{pagination, ClientError, ClientResult, Params};
use crate::enums::{OrderBy, SortOrder};
use crate::fred::{
    decode_records, ensure_order_allowed, ensure_tag_group_allowed, Fred, RelatedTagsQuery,
    SeriesListQuery, TagsQuery, FILTERABLE_TAG_GROUPS, PAGE_LIMIT, SERIES_ORDERS, TAG_ORDERS,
};
use crate::{Series, Tag};

impl Fred {
    /// Get FRED tags, optionally narrowed by name, group, or search words.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/tags.html>
    pub async fn tags(&self, query: &TagsQuery) -> ClientResult<Vec<Tag>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;

        let mut params = Params::new();
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push_opt("tag_names", query.tag_names.clone());
        params.push_opt("tag_group_id", query.tag_group_id);
        params.push_opt("search_text", query.search_text.clone());
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/tags",
            "tags",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the tags related to one or more tags.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/related_tags.html>
    pub async fn related_tags(&self, query: &RelatedTagsQuery) -> ClientResult<Vec<Tag>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;
        ensure_tag_group_allowed(query.tag_group_id, &FILTERABLE_TAG_GROUPS)?;

        let mut params = Params::new();
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
            "/fred/related_tags",
            "tags",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the series matching all of `tag_names` and none of the query's
    /// excluded tags.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/tags_series.html>
    pub async fn tags_series(
        &self,
        tag_names: &[String],
        query: &SeriesListQuery,
    ) -> ClientResult<Vec<Series>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesId);
        ensure_order_allowed(order_by, &SERIES_ORDERS)?;
        if tag_names.is_empty() {
            return Err(ClientError::InvalidParameter(
                "tags_series requires at least one tag name".to_string(),
            ));
        }

        let mut params = Params::new();
        params.push("tag_names", tag_names);
        params.push_opt("exclude_tag_names", query.exclude_tag_names.clone());
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/tags/series",
            "seriess",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }
}
