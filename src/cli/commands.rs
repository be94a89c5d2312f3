//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pokémon read-through proxy CLI
#[derive(Parser, Debug)]
#[command(name = "pokeproxy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Override database file path
        #[arg(long)]
        database: Option<PathBuf>,

        /// Override upstream API base URL
        #[arg(long)]
        upstream_url: Option<String>,
    },

    /// Probe the upstream API and report its collection size
    Check,
}
