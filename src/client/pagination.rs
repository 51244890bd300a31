//! Pagination over count/offset/limit listings
//!
//! Listing endpoints cap each page with `limit` and report the total record
//! `count`; the loop advances `offset` until a short page or the reported
//! count is exhausted. Payloads without a `count` field are single-shot.
//!
//! Includes a maximum page guard so a misbehaving upstream cannot hold the
//! loop open forever.

use serde_json::Value;
use tracing::debug;

use crate::client::http::ApiClient;
use crate::client::params::Params;
use crate::client::{ClientError, ClientResult};

/// Hard ceiling on pages fetched for one logical request.
const MAX_PAGES: u64 = 10_000;

/// Fetch every record of a listing endpoint.
///
/// `list_key` names the payload field holding the records; nested fields use
/// dots. `limit` of `None` requests a single page without `limit`/`offset`
/// parameters.
///
/// # Errors
/// Returns an error if a page fetch fails, the list key is absent, or the
/// page guard trips.
pub(crate) async fn fetch_all(
    client: &ApiClient,
    endpoint: &str,
    list_key: &str,
    limit: Option<u32>,
    params: &Params,
) -> ClientResult<Vec<Value>> {
    let mut records = Vec::new();
    let mut offset: u64 = 0;
    let mut page_number: u64 = 1;

    loop {
        if page_number > MAX_PAGES {
            return Err(ClientError::Decode(format!(
                "page guard tripped after {MAX_PAGES} pages for {endpoint}"
            )));
        }

        let mut query = params.clone();
        if let Some(limit) = limit {
            query.push("limit", limit);
            query.push("offset", offset);
        }

        let body = client.get_json(endpoint, &query).await?;
        let page = extract_list(&body, list_key)?;
        let page_len = page.len() as u64;

        // Payloads without a count field carry everything in one response.
        let Some(count) = body.get("count").and_then(Value::as_u64) else {
            return Ok(page);
        };

        let total_pages = match limit {
            Some(limit) => count / u64::from(limit) + 1,
            None => 1,
        };
        debug!(count, page_number, total_pages, "fetched listing page");

        records.extend(page);

        let Some(limit) = limit.map(u64::from) else {
            break;
        };
        if count < limit || page_len < limit {
            break;
        }
        offset += limit;
        page_number += 1;
    }

    Ok(records)
}

/// Pull the record list out of a payload by (possibly dotted) key.
///
/// A non-array value is wrapped into a single-element list; some endpoints
/// return one object where their siblings return arrays.
pub(crate) fn extract_list(body: &Value, list_key: &str) -> ClientResult<Vec<Value>> {
    let mut current = body;
    for key in list_key.split('.') {
        current = current.get(key).ok_or_else(|| {
            ClientError::Decode(format!("response is missing expected field {list_key:?}"))
        })?;
    }

    match current {
        Value::Array(items) => Ok(items.clone()),
        other => Ok(vec![other.clone()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_list_returns_array() {
        let body = json!({ "categories": [{ "id": 125 }, { "id": 126 }] });
        let items = extract_list(&body, "categories").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_extract_list_wraps_single_object() {
        let body = json!({ "meta": { "title": "Unemployment" } });
        let items = extract_list(&body, "meta").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Unemployment");
    }

    #[test]
    fn test_extract_list_follows_dotted_keys() {
        let body = json!({ "meta": { "data": [1, 2, 3] } });
        let items = extract_list(&body, "meta.data").unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_extract_list_missing_key_is_decode_error() {
        let body = json!({ "observations": [] });
        assert!(matches!(
            extract_list(&body, "seriess"),
            Err(ClientError::Decode(_))
        ));
    }
}
