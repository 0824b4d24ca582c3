use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use thiserror::Error;

use crate::global;

/// Everything read from the environment, once, at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub inference: InferenceConfig,
    pub tracing: TracingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    /// `host:port` the browser dials for the websocket.
    pub reachable_addr: String,
}

#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub api_key: Option<String>,
    pub project: Option<String>,
    pub tracing_v2: bool,
}

/// Tracing settings that are absent. None of these stop the chat working.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationMissing {
    #[error("LANGCHAIN_API_KEY is not set, run tracing is disabled")]
    ApiKey,

    #[error("LANGCHAIN_PROJECT is not set, runs are traced under the default project")]
    Project,
}

impl TracingConfig {
    pub fn enabled(&self) -> bool {
        self.tracing_v2 && self.api_key.is_some()
    }

    pub fn advisories(&self) -> Vec<ConfigurationMissing> {
        let mut missing = Vec::new();
        if self.api_key.is_none() {
            missing.push(ConfigurationMissing::ApiKey);
        }
        if self.project.is_none() {
            missing.push(ConfigurationMissing::Project);
        }
        missing
    }
}

impl Config {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let listen = get("LISTEN_ADDR").unwrap_or_else(|| global::DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a socket address: {listen}"))?;
        let reachable_addr = get("REACHABLE_ADDR").unwrap_or_else(|| listen_addr.to_string());

        let timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a whole number: {secs}"))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let tracing_v2 = get("LANGCHAIN_TRACING_V2")
            .map(|value| !value.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        Ok(Config {
            server: ServerConfig {
                listen_addr,
                reachable_addr,
            },
            inference: InferenceConfig {
                base_url: get("OLLAMA_BASE_URL").unwrap_or_else(|| global::DEFAULT_BASE_URL.to_string()),
                model: get("OLLAMA_MODEL").unwrap_or_else(|| global::DEFAULT_MODEL.to_string()),
                timeout,
            },
            tracing: TracingConfig {
                api_key: get("LANGCHAIN_API_KEY"),
                project: get("LANGCHAIN_PROJECT"),
                tracing_v2,
            },
        })
    }
}
