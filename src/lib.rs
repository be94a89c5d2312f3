// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pokeproxy
//!
//! A read-through HTTP proxy in front of the Pokémon API.
//!
//! The proxy re-exposes the upstream listing under its own address with
//! offset/limit pagination, optional name and pokédex-id filters, and
//! resource URLs rewritten to point back at the proxy. Individual records
//! can be overridden locally; an override shadows the upstream record on
//! retrieval.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokeproxy::config::ServiceConfig;
//!
//! #[tokio::main]
//! async fn main() -> pokeproxy::Result<()> {
//!     let config = ServiceConfig::default();
//!     pokeproxy::server::serve(&config).await
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the service
pub mod error;

/// Shared domain types
pub mod types;

/// Service configuration
pub mod config;

/// HTTP client for upstream calls
pub mod http;

/// Offset/limit pagination
pub mod pagination;

/// Upstream PokéAPI client
pub mod upstream;

/// List assembly: filter, rewrite, paginate
pub mod listing;

/// Local override store and record merging
pub mod store;

/// HTTP server and routes
pub mod server;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
