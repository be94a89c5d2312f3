//! HTTP server exposing the proxy API
//!
//! Routes mirror the upstream API shape under `/api/v1/`: a paginated,
//! filterable listing plus by-id retrieval, with local overrides writable
//! through PUT/PATCH/POST.

use axum::{
    extract::{Host, OriginalUri, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::listing::ListAssembler;
use crate::pagination::PageContext;
use crate::store::{OverrideStore, RecordMerger, UpsertOutcome};
use crate::types::{FilterCriteria, PokemonRecord};
use crate::upstream::PokeApi;


/// App state shared across handlers
#[derive(Clone)]
pub struct AppState {
    api: PokeApi,
    store: Arc<OverrideStore>,
    scheme: String,
    page_size: usize,
}

impl AppState {
    /// Build state from the service configuration
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let mut http_config = HttpClientConfig::builder()
            .base_url(config.upstream_base())
            .timeout(Duration::from_secs(config.timeout_secs));
        if let Some(agent) = &config.user_agent {
            http_config = http_config.user_agent(agent);
        }
        let api = PokeApi::with_http(
            HttpClient::with_config(http_config.build()),
            config.upstream_base(),
            config.page_size,
        );
        let store = match &config.database {
            Some(path) => OverrideStore::open(path)?,
            None => OverrideStore::in_memory()?,
        };
        Ok(Self {
            api,
            store: Arc::new(store),
            scheme: config.scheme.clone(),
            page_size: config.page_size,
        })
    }

    /// Build state from pre-constructed parts
    pub fn new(api: PokeApi, store: Arc<OverrideStore>, scheme: String, page_size: usize) -> Self {
        Self {
            api,
            store,
            scheme,
            page_size,
        }
    }
}

/// Query parameters accepted by the list endpoint
#[derive(Debug, Deserialize)]
struct ListParams {
    /// Starting position within the (filtered) collection
    #[serde(default)]
    offset: usize,
    /// Page size; the service default applies when absent
    limit: Option<usize>,
    /// Name substring filter
    name: Option<String>,
    /// Exact pokédex id filter
    pokedex_id: Option<String>,
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/pokemon/", get(list_pokemon).post(create_pokemon))
        .route(
            "/api/v1/pokemon/:id/",
            get(retrieve_pokemon)
                .put(upsert_pokemon)
                .patch(upsert_pokemon),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(config: &ServiceConfig) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {}: {e}", config.port)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// List the collection: filter, rewrite URLs, paginate
async fn list_pokemon(
    State(state): State<AppState>,
    Host(host): Host,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(state.page_size);
    if limit == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "limit must be greater than zero" })),
        )
            .into_response();
    }

    let mut criteria = FilterCriteria::none();
    if let Some(name) = params.name {
        criteria = criteria.with_name(name);
    }
    if let Some(id) = params.pokedex_id {
        criteria = criteria.with_pokedex_id(id);
    }

    let base_uri = format!("{}://{}/api/v1/", state.scheme, host);
    let links = PageContext::new(&state.scheme, &host, uri.path());
    let assembler = ListAssembler::new(state.api.clone(), base_uri);

    match assembler.list(&criteria, limit, params.offset, &links).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Retrieve a record, local override first
async fn retrieve_pokemon(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    let merger = RecordMerger::new(state.store.clone(), state.api.clone());

    match merger.retrieve(id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => error_response(&Error::not_found(id)),
        Err(e) => error_response(&e),
    }
}

/// Store an override under the path id.
///
/// PUT and PATCH behave identically: the full record replaces whatever
/// was stored, and a missing row is created rather than rejected.
async fn upsert_pokemon(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(mut record): Json<PokemonRecord>,
) -> impl IntoResponse {
    // The path id is authoritative
    record.id = id;

    match state.store.upsert(&record) {
        Ok(_) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Store an override keyed by the body's own id
async fn create_pokemon(
    State(state): State<AppState>,
    Json(record): Json<PokemonRecord>,
) -> impl IntoResponse {
    match state.store.upsert(&record) {
        Ok(UpsertOutcome::Created) => (StatusCode::CREATED, Json(record)).into_response(),
        Ok(UpsertOutcome::Updated) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Map an error to its HTTP shape.
///
/// Upstream transport failures are the caller's 502; bad arguments are
/// 400; everything else is a plain 500. Not-found keeps the DRF-style
/// detail string.
fn error_response(e: &Error) -> axum::response::Response {
    let status = match e {
        Error::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::Http(_) | Error::Timeout { .. } | Error::HttpStatus { .. } => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!("Request failed: {e}");
    }

    let detail = match e {
        Error::NotFound { .. } => "Not found.".to_string(),
        _ => e.to_string(),
    };
    (status, Json(json!({ "detail": detail }))).into_response()
}
