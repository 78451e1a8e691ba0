use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crate::app::SearchMode;
use crate::config::{DEFAULT_ENDPOINT, DEFAULT_MODE, DEFAULT_TIMEOUT_SECS, ENDPOINT_ENV};

#[derive(Parser)]
#[command(name = "product-search")]
#[command(about = "Interactive product search client")]
pub struct Cli {
    /// Base URL of the search service (e.g., "http://localhost:8000")
    #[arg(short, long, env = ENDPOINT_ENV, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Search mode used for the first query
    #[arg(short, long, default_value = DEFAULT_MODE)]
    pub mode: SearchMode,

    /// Run this query right after startup
    #[arg(short, long)]
    pub query: Option<String>,

    /// Filter catalogue (JSON with "categories", "brands" and "manufacturers" lists)
    #[arg(long, env = "PRODUCT_SEARCH_METADATA")]
    pub metadata: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Print the results of --query and exit instead of starting the UI
    #[arg(long, requires = "query")]
    pub once: bool,

    /// Output format used with --once
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
