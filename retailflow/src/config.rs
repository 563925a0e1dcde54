//! Command line and environment configuration

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

const DB_FILE: &str = "retailflow.db";
const LOG_DIR: &str = "logs";

/// RetailFlow workflow builder
#[derive(Parser, Debug, Clone)]
#[command(name = "retailflow", version, about)]
pub struct Cli {
    /// Directory holding the local database and logs
    #[arg(long, env = "RETAILFLOW_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Backend base URL; saves are POSTed to {url}/api/workflows when set
    #[arg(long, env = "RETAILFLOW_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Simulated save latency in milliseconds (used without a backend)
    #[arg(long, env = "RETAILFLOW_SAVE_DELAY_MS", default_value_t = 1000)]
    pub save_delay_ms: u64,

    /// Log filter, e.g. "info" or "retailflow=debug"
    #[arg(long, env = "RETAILFLOW_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive builder (default)
    Tui,
    /// Print saved workflows as JSON
    List,
    /// Remove all saved workflows
    Clear,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub backend_url: Option<String>,
    pub save_delay: Duration,
    pub log_level: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let data_dir = match &cli.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };

        let backend_url = cli
            .backend_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string());

        Ok(Self {
            data_dir,
            backend_url,
            save_delay: Duration::from_millis(cli.save_delay_ms),
            log_level: cli.log_level.clone(),
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR)
    }
}

/// Platform data directory, e.g. `~/.local/share/retailflow`
pub fn default_data_dir() -> Result<PathBuf> {
    use directories::ProjectDirs;

    ProjectDirs::from("com", "retailflow", "retailflow")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| anyhow!("Failed to determine a data directory; pass --data-dir"))
}
