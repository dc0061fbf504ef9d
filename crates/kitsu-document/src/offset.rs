//! Pagination offset extraction from document links.
//!
//! The Kitsu API paginates collections with `page[limit]`/`page[offset]`
//! query parameters embedded in the `first`, `last`, `prev` and `next`
//! links of a collection document. This module pulls the numeric offsets
//! out of those links so callers can request the adjacent pages without
//! parsing URLs themselves.

use serde_json::Value;
use tracing::trace;
use url::Url;

use crate::document::Links;
use crate::error::{Error, Result};
use crate::resource::json_kind;

/// The query parameter carrying the offset. The brackets are literal
/// characters of the parameter name.
const OFFSET_PARAM: &str = "page[offset]";

/// The link keys that carry pagination offsets. Other keys, e.g. `self`
/// and `related`, are ignored.
const LINK_KEYS: [&str; 4] = ["first", "last", "prev", "next"];

/// Numeric pagination cursors extracted from a collection document's links.
///
/// Each field is the `page[offset]` value of the correspondingly named
/// link, or 0 when that link is absent or carries no offset parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOffset {
    /// Offset of the first page.
    pub first: u64,
    /// Offset of the last page.
    pub last: u64,
    /// Offset of the previous page.
    pub prev: u64,
    /// Offset of the next page.
    pub next: u64,
}

/// Extract pagination offsets from a links object.
///
/// Absent keys yield 0 for their field. Links using the alternative
/// `page[number]`/`page[size]` convention yield an all-zero offset with no
/// error; this parser recognizes only the offset/limit convention. A link
/// that is present but not a string, not a parseable URL, or carries a
/// non-numeric offset fails with [`Error::MalformedLinks`].
pub fn parse_offset(links: &Links) -> Result<PageOffset> {
    let mut offsets = [0u64; 4];
    for (slot, key) in offsets.iter_mut().zip(LINK_KEYS) {
        let Some(value) = links.get(key) else {
            continue;
        };
        let Value::String(link) = value else {
            return Err(Error::malformed_links(
                key,
                format!("link is not a string, found {}", json_kind(value)),
            ));
        };
        *slot = offset_from_link(key, link)?;
    }
    let [first, last, prev, next] = offsets;
    let page_offset = PageOffset { first, last, prev, next };
    trace!(?page_offset, "parsed pagination offsets");
    Ok(page_offset)
}

fn offset_from_link(name: &str, link: &str) -> Result<u64> {
    let url = Url::parse(link).map_err(|e| Error::malformed_links(name, e.to_string()))?;
    let Some(raw) = url
        .query_pairs()
        .find(|(key, _)| *key == OFFSET_PARAM)
        .map(|(_, value)| value)
    else {
        return Ok(0);
    };
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u64>()
        .map_err(|_| Error::malformed_links(name, format!("offset {raw:?} is not a number")))
}
