use serde::Deserialize;

/// Options for the API error handler plugin
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorHandlerConfig {
    /// Turn handler panics into 500 responses instead of dropping the
    /// connection
    #[serde(default = "default_catch_panics")]
    pub catch_panics: bool,
    /// Read-only endpoint listing the layer/kind -> status table
    #[serde(default)]
    pub status_map_endpoint: StatusMapEndpointConfig,
}

impl Default for ErrorHandlerConfig {
    fn default() -> Self {
        Self {
            catch_panics: default_catch_panics(),
            status_map_endpoint: StatusMapEndpointConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusMapEndpointConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_status_map_path")]
    pub path: String,
}

impl Default for StatusMapEndpointConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_status_map_path(),
        }
    }
}

const fn default_catch_panics() -> bool {
    true
}

fn default_status_map_path() -> String {
    "/_caffeine/status-codes".to_owned()
}
