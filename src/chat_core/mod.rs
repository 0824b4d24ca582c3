mod backend;
mod normalize;
mod pipeline;
mod prompt;
mod run_tracer;
mod session;
mod transcript;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{Backend, BackendError, OllamaBackend};
pub use normalize::normalize;
pub use pipeline::Pipeline;
pub use prompt::build;
pub use run_tracer::RunTracer;
pub use session::{Session, State};
pub use transcript::{Transcript, View};
pub use types::{Message, PromptMessage, PromptRequest, PromptRole, Role};
