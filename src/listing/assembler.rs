//! The list-assembly pipeline

use crate::error::Result;
use crate::listing::filters::{apply_filters, rewrite_urls};
use crate::pagination::{paginate, Page, PageContext};
use crate::types::{FilterCriteria, ListingItem};
use crate::upstream::PokeApi;
use tracing::debug;

/// Assembles one response page of the list endpoint.
///
/// Built per request: `base_uri` is derived from the incoming request's
/// scheme and host, so rewritten resource URLs and pagination links both
/// point back at the caller's view of this service.
#[derive(Debug)]
pub struct ListAssembler {
    api: PokeApi,
    base_uri: String,
}

impl ListAssembler {
    /// Create an assembler rewriting URLs onto `base_uri`.
    ///
    /// `base_uri` must carry a trailing slash (`http://host/api/v1/`).
    pub fn new(api: PokeApi, base_uri: impl Into<String>) -> Self {
        Self {
            api,
            base_uri: base_uri.into(),
        }
    }

    /// Fetch, filter, rewrite, and paginate the collection.
    ///
    /// `count` on the returned page is the post-filter collection size.
    /// Filtering happens before pagination, so offset and limit address
    /// the filtered collection.
    pub async fn list(
        &self,
        criteria: &FilterCriteria,
        limit: usize,
        offset: usize,
        links: &PageContext,
    ) -> Result<Page<ListingItem>> {
        let items = self.api.fetch_all().await?;
        debug!("Assembling page: {} items upstream", items.len());

        let items = apply_filters(items, criteria);
        let items = rewrite_urls(items, self.api.base_uri(), &self.base_uri);

        paginate(items, limit, offset, links)
    }
}
