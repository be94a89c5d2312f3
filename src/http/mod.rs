//! HTTP client module
//!
//! Thin wrapper over reqwest with a config builder, per-request settings,
//! and status classification. Deliberately retry-free: a failed transport
//! call is fatal for the surrounding request.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
