//! Logging for caffeine services
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a text
//! or JSON formatter chosen by configuration.

use caffeine_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber
///
/// `default_filter` applies when no telemetry section is configured.
/// `RUST_LOG`, when set, takes precedence over both.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) -> anyhow::Result<()> {
    let directives = config.map_or(default_filter, |c| c.log_filter.as_str());
    let format = config.map_or(LogFormat::Text, |c| c.log_format);

    tracing_subscriber::registry()
        .with(fmt_layer(format))
        .with(build_filter(directives))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Build the filter, falling back to `info` on invalid directives
fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives))
        .unwrap_or_else(|e| {
            eprintln!("invalid log filter `{directives}` ({e}), falling back to `info`");
            EnvFilter::new("info")
        })
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().flatten_event(true).boxed(),
    }
}
