//! Upstream PokéAPI client
//!
//! Read-only access to the upstream API: page fetches, whole-collection
//! fetches, and by-id record fetches. Non-success upstream statuses are
//! treated as "nothing there" (empty listing, absent record); transport
//! failures propagate as errors.

mod client;

pub use client::PokeApi;
