//! Listing filters and URL rewriting

use crate::types::{FilterCriteria, ListingItem};
use regex::Regex;
use std::sync::LazyLock;

// First run of digits delimited by slashes, e.g. ".../pokemon/42/".
static POKEDEX_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+)/").expect("valid pokédex id pattern"));

/// Extract the pokédex id from a resource URL.
///
/// The id is the first slash-delimited digit run in the URL. Returns
/// `None` when the URL carries no such segment.
pub fn extract_pokedex_id(url: &str) -> Option<&str> {
    POKEDEX_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Apply the list filters to a collection, preserving order.
///
/// Filters are independent and applied in sequence: name substring match
/// first, then exact pokédex id match on the URL-extracted id. An item
/// whose URL yields no id never matches an id filter.
pub fn apply_filters(mut items: Vec<ListingItem>, criteria: &FilterCriteria) -> Vec<ListingItem> {
    if let Some(name) = &criteria.name {
        items.retain(|item| item.name.contains(name.as_str()));
    }
    if let Some(id) = &criteria.pokedex_id {
        items.retain(|item| extract_pokedex_id(&item.url) == Some(id.as_str()));
    }
    items
}

/// Rewrite upstream resource URLs to local ones.
///
/// Replaces the `upstream_base` prefix with `local_base`, leaving the
/// rest of the URL intact. URLs that do not start with `upstream_base`
/// (already rewritten, or foreign) pass through unchanged, which makes
/// the rewrite idempotent.
pub fn rewrite_urls(
    mut items: Vec<ListingItem>,
    upstream_base: &str,
    local_base: &str,
) -> Vec<ListingItem> {
    for item in &mut items {
        if let Some(rest) = item.url.strip_prefix(upstream_base) {
            item.url = format!("{local_base}{rest}");
        }
    }
    items
}
