use anyhow::{bail, Result};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ollama_chat::chat_core::{Pipeline, Session};
use ollama_chat::config::Config;

/// Ask a single question from the command line, e.g. `ask What is the capital of France?`
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let question = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let config = Config::from_env()?;
    for advisory in config.tracing.advisories() {
        warn!("{advisory}");
    }
    let pipeline = Pipeline::from_config(&config);

    let mut session = Session::new();
    if !session.submit(&pipeline, &question).await {
        bail!("usage: ask <question>");
    }

    if let Some(reply) = session.transcript().all().last() {
        println!("{}", reply.text());
    }
    Ok(())
}
