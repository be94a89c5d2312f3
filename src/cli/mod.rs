//! CLI module
//!
//! Command-line interface for the proxy service.
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server
//! - `check` - Probe the upstream API

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
