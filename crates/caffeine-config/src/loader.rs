use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, TOML parsing fails or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::parse(&raw)?;
        tracing::debug!(path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder cannot be expanded, TOML parsing
    /// fails or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint path is not absolute or two enabled
    /// endpoints share a path
    pub fn validate(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        let status_map = &self.error_handler.status_map_endpoint;

        if health.enabled {
            validate_path("server.health.path", &health.path)?;
        }

        if status_map.enabled {
            validate_path("error_handler.status_map_endpoint.path", &status_map.path)?;
        }

        if health.enabled && status_map.enabled && health.path == status_map.path {
            anyhow::bail!("health and status map endpoints cannot share path `{}`", health.path);
        }

        Ok(())
    }
}

fn validate_path(field: &str, path: &str) -> anyhow::Result<()> {
    if !path.starts_with('/') {
        anyhow::bail!("{field} must start with `/`, got `{path}`");
    }

    if path.contains(char::is_whitespace) {
        anyhow::bail!("{field} must not contain whitespace, got `{path}`");
    }

    Ok(())
}
