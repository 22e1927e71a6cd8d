use crate::config::{toml_config::TomlConfig, TransportConfig};
use crate::utils::error::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "knot")]
#[command(about = "Command-line client for the Knot patent-intelligence backend")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend origin, e.g. http://localhost:8000
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path prefix prepended to every API path
    #[arg(long)]
    pub api_prefix: Option<String>,

    /// Abandon a request after this many seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a company name to its canonical entity and ultimate parent
    ResolveCompany { name: String },

    /// Fetch the ownership graph around a company
    Graph { company_id: String },

    /// Run a freedom-to-operate analysis
    Fto {
        description: String,
        #[arg(long, value_delimiter = ',')]
        markets: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
    },

    /// Search patents
    Search {
        query: String,
        #[arg(long, value_delimiter = ',')]
        jurisdictions: Option<Vec<String>>,
    },

    /// Fetch one patent by id
    Patent { id: String },

    /// Match a product description against known products
    MatchProducts {
        description: String,
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
    },

    /// Ask a free-text question
    Query { text: String },

    /// Check backend health
    Health,

    /// Search prior art for a patent
    PriorArt {
        patent_id: String,
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
    },

    /// Analyze the technology landscape of a domain
    Landscape {
        domain: String,
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,
    },

    /// Show which screen a front-end path resolves to
    Route { path: String },

    /// List every front-end screen
    Routes,
}

impl CliConfig {
    /// Loads the TOML file named by `--config`, or defaults when absent.
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    /// Defaults, then file, then `KNOT_*` environment, then flags.
    pub fn transport_config(&self, file: &TomlConfig) -> Result<TransportConfig> {
        let mut config = file.transport.clone();
        config.apply_env_overrides()?;
        self.apply_flags(&mut config);
        Ok(config)
    }

    fn apply_flags(&self, config: &mut TransportConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(prefix) = &self.api_prefix {
            config.api_prefix = prefix.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
    }

    pub fn effective_log_format(&self, file: &TomlConfig) -> LogFormat {
        match (self.log_format, file.log_format()) {
            (Some(format), _) => format,
            (None, Some("json")) => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
