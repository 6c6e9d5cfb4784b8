#![allow(clippy::must_use_candidate)]

mod env;
pub mod error_handler;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use env::ExpandError;
pub use error_handler::*;
pub use health::*;
pub use server::*;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level caffeine configuration
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// API error handler options
    #[serde(default)]
    pub error_handler: ErrorHandlerConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
