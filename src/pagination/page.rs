//! Page computation and link building

use crate::error::{Error, Result};
use serde::Serialize;

/// Request-scoped context for building pagination links.
///
/// Links are rendered as `{scheme}://{host}{path}?offset={n}&limit={m}`,
/// with `offset` always before `limit`.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Link scheme (`http` or `https`)
    pub scheme: String,
    /// Host (and optional port) of this service
    pub host: String,
    /// Request path, including any trailing slash
    pub path: String,
}

impl PageContext {
    /// Create a page context
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            path: path.into(),
        }
    }

    /// Render a link for the given offset and limit
    pub fn link(&self, offset: usize, limit: usize) -> String {
        format!(
            "{}://{}{}?offset={}&limit={}",
            self.scheme, self.host, self.path, offset, limit
        )
    }
}

/// One page of a source collection plus its link metadata.
///
/// `count` is always the size of the source collection the page was cut
/// from, regardless of how many results this page carries.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Size of the source collection
    pub count: usize,
    /// Link to the next page, if one exists
    pub next: Option<String>,
    /// Link to the previous page, if one exists
    pub previous: Option<String>,
    /// Items on this page, source order preserved
    pub results: Vec<T>,
}

/// Cut the page starting at `offset` out of `source` and derive its links.
///
/// The page is exactly `source[offset .. min(offset + limit, len)]`: it
/// always starts at the caller's offset, and the trailing partial page is
/// returned as-is when the offset is not limit-aligned. A request for a
/// page at or beyond the end of the collection succeeds with empty
/// `results` (never an error); `previous` is still populated there when
/// `offset > 0`.
///
/// Links step by exactly `limit` from the caller's offset: `previous`
/// encodes `offset - limit` (saturating at zero) and is absent only when
/// `offset == 0`; `next` encodes `offset + limit` and is absent when
/// `offset + limit >= len`.
pub fn paginate<T>(
    source: Vec<T>,
    limit: usize,
    offset: usize,
    context: &PageContext,
) -> Result<Page<T>> {
    if limit == 0 {
        return Err(Error::invalid_argument("limit must be greater than zero"));
    }

    let count = source.len();

    let results = if offset >= count {
        Vec::new()
    } else {
        source.into_iter().skip(offset).take(limit).collect()
    };

    let previous = if offset > 0 {
        Some(context.link(offset.saturating_sub(limit), limit))
    } else {
        None
    };
    // checked_add keeps an absurdly large offset from wrapping
    let next = offset
        .checked_add(limit)
        .filter(|end| *end < count)
        .map(|end| context.link(end, limit));

    Ok(Page {
        count,
        next,
        previous,
        results,
    })
}
