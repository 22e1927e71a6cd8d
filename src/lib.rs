pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::HttpTransport;
pub use app::{resolve, RouteEntry, Screen, ViewRouter};
pub use config::{toml_config::TomlConfig, TransportConfig};
pub use crate::core::{HttpMethod, KnotClient, RequestEnvelope, ResponseEnvelope, Transport};
pub use tokio_util::sync::CancellationToken;
pub use utils::error::{KnotError, Result};
