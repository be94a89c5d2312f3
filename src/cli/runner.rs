//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::ServiceConfig;
use crate::error::Result;
use crate::server;
use crate::upstream::PokeApi;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        match &self.cli.command {
            Commands::Serve {
                port,
                database,
                upstream_url,
            } => {
                let config = apply_overrides(config, *port, database, upstream_url);
                config.validate()?;
                server::serve(&config).await
            }
            Commands::Check => self.check(&config).await,
        }
    }

    fn load_config(&self) -> Result<ServiceConfig> {
        match &self.cli.config {
            Some(path) => ServiceConfig::from_file(path),
            None => Ok(ServiceConfig::default()),
        }
    }

    async fn check(&self, config: &ServiceConfig) -> Result<()> {
        let api = PokeApi::new(
            config.upstream_base(),
            config.page_size,
            Duration::from_secs(config.timeout_secs),
        );
        let listing = api.fetch_page(1, 0).await?;

        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "upstream": config.upstream_base(),
                "reachable": true,
                "count": listing.count
            }))?
        );
        Ok(())
    }
}

fn apply_overrides(
    mut config: ServiceConfig,
    port: Option<u16>,
    database: &Option<PathBuf>,
    upstream_url: &Option<String>,
) -> ServiceConfig {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(database) = database {
        config.database = Some(database.clone());
    }
    if let Some(url) = upstream_url {
        config.upstream_url = url.clone();
    }
    config
}
