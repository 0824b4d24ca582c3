use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::backend::{Backend, BackendError, OllamaBackend};
use super::normalize::normalize;
use super::prompt::build;
use super::run_tracer::RunTracer;
use super::types::PromptRequest;
use crate::config::Config;

/// Question in, display text out. Shared read-only by every session.
pub struct Pipeline {
    backend: Arc<dyn Backend>,
    model: String,
    timeout: Option<Duration>,
    tracer: RunTracer,
}

impl Pipeline {
    pub fn new(backend: Arc<dyn Backend>, model: impl Into<String>) -> Pipeline {
        Pipeline {
            backend,
            model: model.into(),
            timeout: None,
            tracer: RunTracer::disabled(),
        }
    }

    pub fn from_config(config: &Config) -> Pipeline {
        let backend = OllamaBackend::new(&config.inference.base_url);
        Pipeline::new(Arc::new(backend), config.inference.model.clone())
            .with_timeout(config.inference.timeout)
            .with_tracer(RunTracer::from_config(&config.tracing))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Pipeline {
        self.timeout = timeout;
        self
    }

    pub fn with_tracer(mut self, tracer: RunTracer) -> Pipeline {
        self.tracer = tracer;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn complete(&self, request: &PromptRequest) -> Result<String, BackendError> {
        let call = self.backend.complete(&self.model, request);
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or_else(|_| Err(BackendError::Timeout(limit))),
            None => call.await,
        }
    }

    pub async fn respond(&self, question: &str) -> String {
        let request = build(question);
        let started = Instant::now();
        let outcome = self.complete(&request).await;
        let elapsed = started.elapsed();

        match &outcome {
            Ok(text) => debug!(model = %self.model, ?elapsed, reply_len = text.len(), "completion received"),
            Err(err) => warn!(model = %self.model, ?elapsed, error = %err, "completion failed"),
        }
        self.tracer.record(&self.model, &request, &outcome, elapsed);
        normalize(outcome)
    }
}
