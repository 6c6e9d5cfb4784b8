//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use caffeine_config::{Config, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                ..Config::default()
            },
        }
    }

    /// Expose the status table endpoint at its default path
    pub fn with_status_map_endpoint(mut self) -> Self {
        self.config.error_handler.status_map_endpoint.enabled = true;
        self
    }

    /// Let handler panics tear down the connection
    pub fn without_panic_catching(mut self) -> Self {
        self.config.error_handler.catch_panics = false;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
