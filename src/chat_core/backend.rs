use std::time::Duration;

use async_openai::{
    config::OpenAIConfig, error::OpenAIError, types as openai_types, Client,
};
use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::types::{PromptRequest, PromptRole};

type Model = openai_types::CreateChatCompletionRequest;
type Message = openai_types::ChatCompletionRequestMessage;
type ModelArgs = openai_types::CreateChatCompletionRequestArgs;
type MessageArgs = openai_types::ChatCompletionRequestMessageArgs;

/// Anything that went wrong between sending a prompt and holding the
/// completion text. `Display` is what ends up in the transcript.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{0}")]
    Client(#[from] OpenAIError),

    /// Connection failures from backends that don't go through
    /// `async-openai`; those arrive as `Client`.
    #[error("{0}")]
    Transport(String),

    #[error("malformed completion: {0}")]
    Malformed(String),

    #[error("no completion within {0:?}")]
    Timeout(Duration),
}

/// A completion service addressed by model name.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn complete(&self, model: &str, request: &PromptRequest) -> Result<String, BackendError>;
}

/// Ollama through its OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct OllamaBackend {
    client: Client<OpenAIConfig>,
}

impl OllamaBackend {
    pub fn new(base_url: &str) -> OllamaBackend {
        // Ollama ignores the key, but the client always sends one.
        let config = OpenAIConfig::new()
            .with_api_base(base_url)
            .with_api_key("ollama");
        OllamaBackend {
            client: Client::with_config(config),
        }
    }

    fn build_model(model: &str, request: &PromptRequest) -> Result<Model, BackendError> {
        let messages = request
            .messages()
            .into_iter()
            .map(|message| {
                let role = match message.role {
                    PromptRole::System => openai_types::Role::System,
                    PromptRole::User => openai_types::Role::User,
                };
                MessageArgs::default().role(role).content(message.text).build()
            })
            .collect::<Result<Vec<Message>, _>>()?;

        let model = ModelArgs::default()
            .model(model)
            .messages(messages)
            .build()?;
        Ok(model)
    }
}

#[async_trait]
impl Backend for OllamaBackend {
    async fn complete(&self, model: &str, request: &PromptRequest) -> Result<String, BackendError> {
        let body = OllamaBackend::build_model(model, request)?;
        debug!(model, question_len = request.question.len(), "sending completion request");

        let response = self.client.chat().create(body).await?;
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::Malformed("response carried no choices".into()))?;
        choice
            .message
            .content
            .ok_or_else(|| BackendError::Malformed("first choice carried no content".into()))
    }
}
