//! Category endpoints
//!
//! Categories form a tree rooted at id 0; series hang off leaf categories.

use crate::client::{pagination, ClientResult, Params};
use crate::enums::{OrderBy, SortOrder};
use crate::fred::{
    decode_one, decode_records, ensure_exclude_requires_tags, ensure_order_allowed,
    ensure_tag_group_allowed, Fred, RealtimePeriod, RelatedTagsQuery, SeriesListQuery, TagsQuery,
    FILTERABLE_TAG_GROUPS, PAGE_LIMIT, SERIES_ORDERS, TAG_ORDERS,
};
use crate::{Category, Series, Tag};

impl Fred {
    /// Get a category.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/category.html>
    pub async fn category(&self, category_id: u32) -> ClientResult<Category> {
        let mut params = Params::new();
        params.push("category_id", category_id);

        let records =
            pagination::fetch_all(self.api(), "/fred/category", "categories", None, &params)
                .await?;
        decode_one(records, "category")
    }

    /// Get the child categories of a category.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/category_children.html>
    pub async fn category_children(
        &self,
        category_id: u32,
        realtime: &RealtimePeriod,
    ) -> ClientResult<Vec<Category>> {
        let (start, end) = realtime.resolve()?;

        let mut params = Params::new();
        params.push("category_id", category_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);

        let records = pagination::fetch_all(
            self.api(),
            "/fred/category/children",
            "categories",
            None,
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get categories related to a category.
    ///
    /// Related categories are linked across branches of the tree, like a
    /// trade-partner category under a different region.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/category_related.html>
    pub async fn category_related(
        &self,
        category_id: u32,
        realtime: &RealtimePeriod,
    ) -> ClientResult<Vec<Category>> {
        let (start, end) = realtime.resolve()?;

        let mut params = Params::new();
        params.push("category_id", category_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);

        let records = pagination::fetch_all(
            self.api(),
            "/fred/category/related",
            "categories",
            None,
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the series in a category.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/category_series.html>
    ///
    /// # Errors
    /// Returns `InvalidParameter` for an unsupported `order_by`, an
    /// `exclude_tag_names` without `tag_names`, or a real-time period the
    /// service would reject.
    pub async fn category_series(
        &self,
        category_id: u32,
        query: &SeriesListQuery,
    ) -> ClientResult<Vec<Series>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesId);
        ensure_order_allowed(order_by, &SERIES_ORDERS)?;
        ensure_exclude_requires_tags(&query.tag_names, &query.exclude_tag_names)?;

        let mut params = Params::new();
        params.push("category_id", category_id);
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
            "/fred/category/series",
            "seriess",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get the tags for a category.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/category_tags.html>
    pub async fn category_tags(
        &self,
        category_id: u32,
        query: &TagsQuery,
    ) -> ClientResult<Vec<Tag>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;
        ensure_tag_group_allowed(query.tag_group_id, &FILTERABLE_TAG_GROUPS)?;

        let mut params = Params::new();
        params.push("category_id", category_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push_opt("tag_names", query.tag_names.clone());
        params.push_opt("tag_group_id", query.tag_group_id);
        params.push_opt("search_text", query.search_text.clone());
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/category/tags",
            "tags",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get tags related to the tags of a category.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/category_related_tags.html>
    pub async fn category_related_tags(
        &self,
        category_id: u32,
        query: &RelatedTagsQuery,
    ) -> ClientResult<Vec<Tag>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SeriesCount);
        ensure_order_allowed(order_by, &TAG_ORDERS)?;

        let mut params = Params::new();
        params.push("category_id", category_id);
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
            "/fred/category/related_tags",
            "tags",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }
}
