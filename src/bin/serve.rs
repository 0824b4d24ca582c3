use anyhow::Result;
use tracing::warn;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use ollama_chat::config::Config;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    for advisory in config.tracing.advisories() {
        warn!("{advisory}");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(ollama_chat::start_server(config))
}
