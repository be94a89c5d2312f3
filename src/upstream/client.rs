//! PokéAPI client built on [`HttpClient`]

use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{Listing, ListingItem};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the upstream Pokémon API.
///
/// Cheap to clone; the underlying HTTP client shares its connection pool.
#[derive(Debug, Clone)]
pub struct PokeApi {
    http: HttpClient,
    base_uri: String,
    page_size: usize,
}

impl PokeApi {
    /// Create a client against the given upstream base URL.
    ///
    /// `page_size` is the probe size used by [`fetch_all`](Self::fetch_all)
    /// to learn the collection total.
    pub fn new(base_uri: impl Into<String>, page_size: usize, timeout: Duration) -> Self {
        let base_uri = base_uri.into();
        let http = HttpClient::with_config(
            HttpClientConfig::builder()
                .base_url(base_uri.clone())
                .timeout(timeout)
                .build(),
        );
        Self {
            http,
            base_uri,
            page_size,
        }
    }

    /// Create a client with a pre-built HTTP client
    pub fn with_http(http: HttpClient, base_uri: impl Into<String>, page_size: usize) -> Self {
        Self {
            http,
            base_uri: base_uri.into(),
            page_size,
        }
    }

    /// The upstream base URI this client talks to
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Fetch one page of the listing endpoint.
    ///
    /// A non-success upstream status yields an empty listing, not an
    /// error. Transport failures (timeout, DNS, refused connection) are
    /// returned as errors and are not retried.
    pub async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Listing> {
        let config = RequestConfig::new()
            .query("limit", limit.to_string())
            .query("offset", offset.to_string());

        match self.http.get_json_with_config("pokemon", config).await {
            Ok(listing) => Ok(listing),
            Err(e) if e.is_http_status() => {
                warn!("Upstream listing returned non-success: {e}");
                Ok(Listing::empty())
            }
            Err(e) => Err(e),
        }
    }

    /// Fetch the entire listing collection, upstream order preserved.
    ///
    /// Two round trips: a probe at the default page size to learn the
    /// total count, then one request sized to that count.
    pub async fn fetch_all(&self) -> Result<Vec<ListingItem>> {
        let probe = self.fetch_page(self.page_size, 0).await?;
        if probe.count == 0 {
            return Ok(Vec::new());
        }

        debug!("Upstream reports {} items, refetching in full", probe.count);
        let full = self.fetch_page(probe.count as usize, 0).await?;
        Ok(full.results)
    }

    /// Fetch a single record by its pokédex id.
    ///
    /// Returns `None` on any non-success upstream status; the raw JSON
    /// document otherwise.
    pub async fn fetch_by_id(&self, id: u32) -> Result<Option<Value>> {
        match self.http.get_json(&format!("pokemon/{id}")).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_http_status() => {
                debug!("Upstream has no record for id {id}: {e}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
