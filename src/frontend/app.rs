use std::sync::Arc;

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use super::components::*;
use crate::chat_core::{Pipeline, Role, Session, View};

pub struct AppProps {
    pub pipeline: Arc<Pipeline>,
    pub advisories: Vec<String>,
}

/// Root of one LiveView connection. The `Session` held here is the
/// connection's whole conversation and goes away with the socket.
pub fn app(cx: Scope<AppProps>) -> Element {
    let pipeline = &cx.props.pipeline;
    let session = use_ref(cx, Session::new);
    let draft = use_ref(cx, String::new);

    let send = move |_| {
        let question = draft.read().clone();
        let Some(question) = session.write().begin(&question) else {
            return;
        };
        draft.set(String::new());

        cx.spawn({
            to_owned![session];
            let pipeline = pipeline.clone();

            async move {
                let reply = pipeline.respond(&question).await;
                session.write().complete(question, reply);
            }
        });
    };

    let send_enter = move |e: Event<KeyboardData>| {
        if let Key::Enter = e.data.key() {
            send(0);
        }
    };

    let send_button = move |_| {
        send(0);
    };

    let awaiting = session.read().is_awaiting();
    let (messages, placeholder) = match session.read().transcript().view() {
        View::Placeholder(hint) => (Vec::new(), Some(hint)),
        View::Messages(messages) => (messages, None),
    };
    let show_placeholder = placeholder.is_some() && !awaiting;
    let hint = placeholder.unwrap_or_default();

    cx.render(rsx!(
        style { include_str!("./style.css") }
        div {
            id: "header",
            h1 {"🧠 Ollama Q&A Chatbot"}
            h2 {"Ask anything and get instant answers powered by Ollama LLM!"}
        }
        for advisory in cx.props.advisories.iter() {
            Advisory { content: advisory.clone() }
        }
        div {
            id: "input-area",
            UserInput {
                draft: draft,
                onenter: send_enter,
            }
            button {
                id: "send-button",
                onclick: send_button, "Send" }
        }
        div {
            id: "chat-window",
            class: "chat-window",
            for msg in messages.iter() {
                match msg.role() {
                    Role::User => rsx!(UserMessage { content: msg.text().to_string() }),
                    Role::Assistant => rsx!(AssistantMessage { content: msg.text().to_string() }),
                }
            }
            if awaiting {
                rsx!(Loading{})
            }
            if show_placeholder {
                rsx!(Placeholder { content: hint.to_string() })
            }
        }
        div {
            id: "bottom-holder"
        }
    ))
}
