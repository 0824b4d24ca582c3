use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde_json::{json, Value};
use tracing::info;

use super::backend::BackendError;
use super::types::PromptRequest;
use crate::config::TracingConfig;

/// Project name used when tracing is on but no project was configured.
const DEFAULT_PROJECT: &str = "default";

/// Best-effort record of each pipeline run, tagged with the configured
/// project. A disabled tracer records nothing.
#[derive(Debug)]
pub struct RunTracer {
    enabled: bool,
    project: String,
    next_run: AtomicU64,
}

impl RunTracer {
    pub fn disabled() -> RunTracer {
        RunTracer {
            enabled: false,
            project: DEFAULT_PROJECT.to_string(),
            next_run: AtomicU64::new(1),
        }
    }

    pub fn from_config(config: &TracingConfig) -> RunTracer {
        RunTracer {
            enabled: config.enabled(),
            project: config
                .project
                .clone()
                .unwrap_or_else(|| DEFAULT_PROJECT.to_string()),
            next_run: AtomicU64::new(1),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn record(
        &self,
        model: &str,
        request: &PromptRequest,
        outcome: &Result<String, BackendError>,
        elapsed: Duration,
    ) {
        if !self.enabled {
            return;
        }
        let record = self.run_record(model, request, outcome, elapsed);
        info!(target: "run_trace", project = %self.project, "{}", record);
    }

    fn run_record(
        &self,
        model: &str,
        request: &PromptRequest,
        outcome: &Result<String, BackendError>,
        elapsed: Duration,
    ) -> Value {
        let run_id = self.next_run.fetch_add(1, Ordering::Relaxed);
        let inputs: Vec<Value> = request
            .messages()
            .iter()
            .map(|message| {
                json!({
                    "role": format!("{:?}", message.role).to_lowercase(),
                    "content": message.text,
                })
            })
            .collect();

        let mut record = json!({
            "run_id": run_id,
            "project": self.project,
            "model": model,
            "inputs": inputs,
            "elapsed_ms": u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        });
        match outcome {
            Ok(text) => record["outputs"] = json!({ "text": text }),
            Err(err) => record["error"] = json!(err.to_string()),
        }
        record
    }
}
