//! Source endpoints

use crate::client::{pagination, ClientError, ClientResult, Params};
use crate::enums::{OrderBy, SortOrder};
use crate::fred::{
    decode_one, decode_records, ensure_order_allowed, Fred, ListQuery, RealtimePeriod,
    PAGE_LIMIT, RELEASE_ORDERS,
};
use crate::{Release, Source};

/// Ordering attributes accepted by the sources listing.
const SOURCE_ORDERS: [OrderBy; 4] = [
    OrderBy::SourceId,
    OrderBy::Name,
    OrderBy::RealtimeStart,
    OrderBy::RealtimeEnd,
];

fn ensure_source_id(source_id: u32) -> ClientResult<()> {
    if source_id == 0 {
        return Err(ClientError::InvalidParameter(
            "source_id must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

impl Fred {
    /// Get all sources of economic data.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/sources.html>
    pub async fn sources(&self, query: &ListQuery) -> ClientResult<Vec<Source>> {
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::SourceId);
        ensure_order_allowed(order_by, &SOURCE_ORDERS)?;

        let mut params = Params::new();
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/sources",
            "sources",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }

    /// Get a source of economic data.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/source.html>
    pub async fn source(&self, source_id: u32, realtime: &RealtimePeriod) -> ClientResult<Source> {
        ensure_source_id(source_id)?;
        let (start, end) = realtime.resolve()?;

        let mut params = Params::new();
        params.push("source_id", source_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);

        let records =
            pagination::fetch_all(self.api(), "/fred/source", "sources", None, &params).await?;
        decode_one(records, "source")
    }

    /// Get the releases for a source.
    ///
    /// <https://fred.stlouisfed.org/docs/api/fred/source_releases.html>
    pub async fn source_releases(
        &self,
        source_id: u32,
        query: &ListQuery,
    ) -> ClientResult<Vec<Release>> {
        ensure_source_id(source_id)?;
        let (start, end) = query.realtime.resolve()?;
        let order_by = query.order_by.unwrap_or(OrderBy::ReleaseId);
        ensure_order_allowed(order_by, &RELEASE_ORDERS)?;

        let mut params = Params::new();
        params.push("source_id", source_id);
        params.push("realtime_start", start);
        params.push("realtime_end", end);
        params.push("order_by", order_by);
        params.push("sort_order", query.sort_order.unwrap_or(SortOrder::Asc));

        let records = pagination::fetch_all(
            self.api(),
            "/fred/source/releases",
            "releases",
            Some(PAGE_LIMIT),
            &params,
        )
        .await?;
        decode_records(records)
    }
}
