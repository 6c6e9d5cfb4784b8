use std::path::PathBuf;

use clap::Parser;

/// Caffeine API host
#[derive(Debug, Parser)]
#[command(name = "caffeine", about = "HTTP host with layered exception to status translation")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "caffeine.toml", env = "CAFFEINE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "CAFFEINE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
