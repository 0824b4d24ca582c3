use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::backend::{Backend, BackendError};
use super::types::PromptRequest;

/// Replies with a fixed text and remembers every request it saw.
#[derive(Clone, Default)]
pub struct FixedBackend {
    reply: String,
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<(String, PromptRequest)>>>,
}

impl FixedBackend {
    pub fn new(reply: &str) -> FixedBackend {
        FixedBackend {
            reply: reply.to_string(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, PromptRequest)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for FixedBackend {
    async fn complete(&self, model: &str, request: &PromptRequest) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((model.to_string(), request.clone()));
        Ok(self.reply.clone())
    }
}

/// Always fails with a transport error carrying `detail`.
pub struct FailingBackend {
    detail: String,
}

impl FailingBackend {
    pub fn new(detail: &str) -> FailingBackend {
        FailingBackend {
            detail: detail.to_string(),
        }
    }
}

#[async_trait]
impl Backend for FailingBackend {
    async fn complete(&self, _model: &str, _request: &PromptRequest) -> Result<String, BackendError> {
        Err(BackendError::Transport(self.detail.clone()))
    }
}

/// Never answers.
pub struct StalledBackend;

#[async_trait]
impl Backend for StalledBackend {
    async fn complete(&self, _model: &str, _request: &PromptRequest) -> Result<String, BackendError> {
        std::future::pending().await
    }
}
