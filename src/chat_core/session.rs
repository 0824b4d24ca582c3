use tracing::debug;

use super::pipeline::Pipeline;
use super::transcript::{Transcript, View};
use super::types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    AwaitingResponse,
}

type Render = Box<dyn FnMut(&View) + Send>;

/// One user's conversation: a transcript plus the submit state machine.
/// Lives exactly as long as the host connection that created it.
pub struct Session {
    transcript: Transcript,
    state: State,
    on_render: Option<Render>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            transcript: Transcript::new(),
            state: State::Idle,
            on_render: None,
        }
    }

    /// Called with the transcript view after every completed round.
    pub fn with_renderer(mut self, render: impl FnMut(&View) + Send + 'static) -> Session {
        self.on_render = Some(Box::new(render));
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == State::AwaitingResponse
    }

    /// Accept a submission. Blank input, or input arriving while a round is
    /// in flight, is dropped and returns `None`.
    pub fn begin(&mut self, question: &str) -> Option<String> {
        if question.trim().is_empty() || self.is_awaiting() {
            return None;
        }
        self.state = State::AwaitingResponse;
        Some(question.to_string())
    }

    /// Close the round opened by `begin`. Both messages land in one call so
    /// no reader ever sees the question without its reply.
    pub fn complete(&mut self, question: String, reply: String) {
        self.transcript.append(Role::User, question);
        self.transcript.append(Role::Assistant, reply);
        self.state = State::Idle;
        debug!(messages = self.transcript.len(), "round complete");
        self.redraw();
    }

    /// Runs a whole round. Returns false when the submission was ignored.
    pub async fn submit(&mut self, pipeline: &Pipeline, question: &str) -> bool {
        let Some(question) = self.begin(question) else {
            return false;
        };
        let reply = pipeline.respond(&question).await;
        self.complete(question, reply);
        true
    }

    pub fn redraw(&mut self) {
        if let Some(render) = self.on_render.as_mut() {
            render(&self.transcript.view());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::chat_core::testing::{FailingBackend, FixedBackend};
    use crate::chat_core::Message;

    fn pipeline(backend: FixedBackend) -> Pipeline {
        Pipeline::new(Arc::new(backend), "llama3.2")
    }

    #[tokio::test]
    async fn test_round_with_answer() {
        let pipeline = pipeline(FixedBackend::new("Paris."));
        let mut session = Session::new();

        assert!(session.submit(&pipeline, "What is the capital of France?").await);
        assert_eq!(
            session.transcript().all(),
            vec![
                Message::new(Role::User, "What is the capital of France?"),
                Message::new(Role::Assistant, "Paris."),
            ]
        );
        assert_eq!(session.state(), State::Idle);
    }

    #[tokio::test]
    async fn test_round_with_backend_failure() {
        let pipeline = Pipeline::new(Arc::new(FailingBackend::new("connection refused")), "llama3.2");
        let mut session = Session::new();

        assert!(session.submit(&pipeline, "hello").await);
        assert_eq!(
            session.transcript().all(),
            vec![
                Message::new(Role::User, "hello"),
                Message::new(Role::Assistant, "⚠️ Error: connection refused"),
            ]
        );
    }

    #[tokio::test]
    async fn test_blank_submissions_are_ignored() {
        let backend = FixedBackend::new("unused");
        let pipeline = pipeline(backend.clone());
        let mut session = Session::new();
        session.submit(&pipeline, "first").await;
        let before = session.transcript().all();

        for blank in ["", " ", "\t\n", "   \r\n "] {
            assert!(!session.submit(&pipeline, blank).await);
        }
        assert_eq!(session.transcript().all(), before);
        assert_eq!(backend.calls(), 1);
        assert_eq!(session.state(), State::Idle);
    }

    #[tokio::test]
    async fn test_rounds_keep_even_length() {
        let pipeline = pipeline(FixedBackend::new("ok"));
        let mut session = Session::new();
        for (i, question) in ["a", "b", "c"].iter().enumerate() {
            session.submit(&pipeline, question).await;
            assert_eq!(session.transcript().len(), (i + 1) * 2);
        }
        let messages = session.transcript().all();
        assert_eq!(messages[4], Message::new(Role::User, "c"));
    }

    #[test]
    fn test_begin_refuses_while_awaiting() {
        let mut session = Session::new();
        assert_eq!(session.begin("  keep spaces "), Some("  keep spaces ".to_string()));
        assert!(session.is_awaiting());
        assert_eq!(session.begin("second"), None);

        session.complete("  keep spaces ".into(), "reply".into());
        assert_eq!(session.state(), State::Idle);
        assert_eq!(session.begin("second"), Some("second".to_string()));
    }

    #[test]
    fn test_renders_once_per_round() {
        let views = Arc::new(Mutex::new(Vec::new()));
        let sink = views.clone();
        let mut session = Session::new().with_renderer(move |view| sink.lock().unwrap().push(view.clone()));

        session.redraw();
        session.begin("q");
        assert_eq!(views.lock().unwrap().len(), 1);
        session.complete("q".into(), "a".into());

        let views = views.lock().unwrap();
        assert_eq!(views.len(), 2);
        assert!(matches!(views[0], View::Placeholder(_)));
        assert_eq!(
            views[1],
            View::Messages(vec![
                Message::new(Role::User, "q"),
                Message::new(Role::Assistant, "a"),
            ])
        );
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut first = Session::new();
        let second = Session::new();
        first.begin("q");
        first.complete("q".into(), "a".into());
        assert_eq!(first.transcript().len(), 2);
        assert!(second.transcript().is_empty());
    }
}
