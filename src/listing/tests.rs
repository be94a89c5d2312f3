//! Tests for the list-assembly module

use super::*;
use crate::pagination::PageContext;
use crate::types::{FilterCriteria, ListingItem};
use crate::upstream::PokeApi;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UPSTREAM_BASE: &str = "https://pokeapi.co/api/v2/";
const LOCAL_BASE: &str = "http://proxy.test/api/v1/";

fn item(name: &str, id: u32) -> ListingItem {
    ListingItem::new(name, format!("{UPSTREAM_BASE}pokemon/{id}/"))
}

fn fire_starters() -> Vec<ListingItem> {
    vec![
        item("charmander", 4),
        item("charmeleon", 5),
        item("charizard", 6),
        item("pikachu", 25),
    ]
}

// ============================================================================
// Pokédex Id Extraction
// ============================================================================

#[test_case("https://pokeapi.co/api/v2/pokemon/1/", Some("1"); "trailing slash")]
#[test_case("https://pokeapi.co/api/v2/pokemon/151/", Some("151"); "multi digit")]
#[test_case("http://proxy.test/api/v1/pokemon/25/", Some("25"); "local url")]
#[test_case("https://pokeapi.co/api/v2/pokemon/", None; "no id segment")]
#[test_case("", None; "empty url")]
fn test_extract_pokedex_id(url: &str, expected: Option<&str>) {
    assert_eq!(extract_pokedex_id(url), expected);
}

#[test]
fn test_extract_pokedex_id_takes_first_slash_delimited_run() {
    // "v2" is not slash-delimited digits, so the id segment wins
    assert_eq!(
        extract_pokedex_id("https://pokeapi.co/api/v2/pokemon/7/"),
        Some("7")
    );
    // An earlier slash-delimited run shadows the id
    assert_eq!(
        extract_pokedex_id("https://example.test/2/pokemon/7/"),
        Some("2")
    );
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_filter_name_substring_preserves_order() {
    let filtered = apply_filters(fire_starters(), &FilterCriteria::none().with_name("char"));
    let names: Vec<_> = filtered.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["charmander", "charmeleon", "charizard"]);
}

#[test]
fn test_filter_name_is_case_sensitive() {
    let filtered = apply_filters(fire_starters(), &FilterCriteria::none().with_name("Char"));
    assert!(filtered.is_empty());
}

#[test]
fn test_filter_pokedex_id_exact() {
    let filtered = apply_filters(fire_starters(), &FilterCriteria::none().with_pokedex_id("5"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "charmeleon");

    // "2" is not a prefix match against 25
    let filtered = apply_filters(fire_starters(), &FilterCriteria::none().with_pokedex_id("2"));
    assert!(filtered.is_empty());
}

#[test]
fn test_filters_combine() {
    let criteria = FilterCriteria::none().with_name("char").with_pokedex_id("6");
    let filtered = apply_filters(fire_starters(), &criteria);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "charizard");
}

#[test]
fn test_no_filters_pass_everything_through() {
    let filtered = apply_filters(fire_starters(), &FilterCriteria::none());
    assert_eq!(filtered.len(), 4);
}

#[test]
fn test_filter_skips_items_without_id_segment() {
    let items = vec![
        item("pikachu", 25),
        ListingItem::new("missingno", "https://pokeapi.co/api/v2/pokemon/"),
    ];
    let filtered = apply_filters(items, &FilterCriteria::none().with_pokedex_id("25"));
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "pikachu");
}

// ============================================================================
// URL Rewriting
// ============================================================================

#[test]
fn test_rewrite_urls_replaces_upstream_prefix() {
    let rewritten = rewrite_urls(vec![item("pikachu", 25)], UPSTREAM_BASE, LOCAL_BASE);
    assert_eq!(rewritten[0].url, "http://proxy.test/api/v1/pokemon/25/");
}

#[test]
fn test_rewrite_urls_is_idempotent() {
    let once = rewrite_urls(fire_starters(), UPSTREAM_BASE, LOCAL_BASE);
    let twice = rewrite_urls(once.clone(), UPSTREAM_BASE, LOCAL_BASE);
    assert_eq!(once, twice);
}

#[test]
fn test_rewrite_urls_leaves_foreign_urls_alone() {
    let items = vec![ListingItem::new(
        "ditto",
        "https://other.example/api/v2/pokemon/132/",
    )];
    let rewritten = rewrite_urls(items.clone(), UPSTREAM_BASE, LOCAL_BASE);
    assert_eq!(rewritten, items);
}

// ============================================================================
// Assembler Pipeline
// ============================================================================

async fn mock_collection(server: &MockServer, names: &[(&str, u32)]) {
    let base = format!("{}/", server.uri());
    let results: Vec<_> = names
        .iter()
        .map(|(name, id)| json!({"name": name, "url": format!("{base}pokemon/{id}/")}))
        .collect();
    let count = results.len();

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": count,
            "next": null,
            "previous": null,
            "results": results
        })))
        .mount(server)
        .await;
}

fn context() -> PageContext {
    PageContext::new("http", "proxy.test", "/api/v1/pokemon/")
}

#[tokio::test]
async fn test_assembler_filters_rewrites_and_paginates() {
    let server = MockServer::start().await;
    mock_collection(
        &server,
        &[
            ("charmander", 4),
            ("charmeleon", 5),
            ("charizard", 6),
            ("pikachu", 25),
        ],
    )
    .await;

    let api = PokeApi::new(format!("{}/", server.uri()), 10, Duration::from_secs(5));
    let assembler = ListAssembler::new(api, LOCAL_BASE);

    let page = assembler
        .list(&FilterCriteria::none().with_name("char"), 2, 0, &context())
        .await
        .unwrap();

    // Count reflects the filtered collection, not the upstream total
    assert_eq!(page.count, 3);
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "charmander");
    assert_eq!(
        page.results[0].url,
        "http://proxy.test/api/v1/pokemon/4/"
    );
    assert_eq!(
        page.next,
        Some("http://proxy.test/api/v1/pokemon/?offset=2&limit=2".to_string())
    );
    assert_eq!(page.previous, None);
}

#[tokio::test]
async fn test_assembler_filtered_to_nothing_is_empty_success() {
    let server = MockServer::start().await;
    mock_collection(&server, &[("pikachu", 25)]).await;

    let api = PokeApi::new(format!("{}/", server.uri()), 10, Duration::from_secs(5));
    let assembler = ListAssembler::new(api, LOCAL_BASE);

    let page = assembler
        .list(
            &FilterCriteria::none().with_name("mewtwo"),
            10,
            0,
            &context(),
        )
        .await
        .unwrap();

    assert_eq!(page.count, 0);
    assert!(page.results.is_empty());
    assert_eq!(page.next, None);
    assert_eq!(page.previous, None);
}

#[tokio::test]
async fn test_assembler_upstream_failure_yields_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let api = PokeApi::new(format!("{}/", server.uri()), 10, Duration::from_secs(5));
    let assembler = ListAssembler::new(api, LOCAL_BASE);

    let page = assembler
        .list(&FilterCriteria::none(), 10, 0, &context())
        .await
        .unwrap();
    assert_eq!(page.count, 0);
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn test_assembler_rejects_zero_limit() {
    let server = MockServer::start().await;
    mock_collection(&server, &[("pikachu", 25)]).await;

    let api = PokeApi::new(format!("{}/", server.uri()), 10, Duration::from_secs(5));
    let assembler = ListAssembler::new(api, LOCAL_BASE);

    let err = assembler
        .list(&FilterCriteria::none(), 0, 0, &context())
        .await
        .unwrap_err();
    assert!(matches!(err, crate::error::Error::InvalidArgument { .. }));
}
