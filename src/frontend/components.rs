#![allow(non_snake_case)]

use dioxus::prelude::*;

#[derive(PartialEq, Props)]
pub struct ContentProps {
    content: String,
}

pub fn UserMessage(cx: Scope<ContentProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message user-message",
            b { "🧑 You:" }
            br {}
            "{cx.props.content}"
        }
    ))
}

pub fn AssistantMessage(cx: Scope<ContentProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message assistant-message",
            b { "🤖 Assistant:" }
            br {}
            "{cx.props.content}"
        }
    ))
}

pub fn Placeholder(cx: Scope<ContentProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "placeholder",
            "{cx.props.content}"
        }
    ))
}

pub fn Advisory(cx: Scope<ContentProps>) -> Element {
    cx.render(rsx!(
        div {
            class: "advisory",
            "{cx.props.content}"
        }
    ))
}

pub fn Loading(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            class: "chat-message assistant-message",
            div {
                class: "spinner",
            }
        }
    ))
}

/// Single-line and controlled: the box always shows `draft`, so what the
/// user sees is exactly what Send submits.
#[derive(Props)]
pub struct DraftProps<'a> {
    draft: &'a UseRef<String>,
    onenter: EventHandler<'a, Event<KeyboardData>>,
}

pub fn UserInput<'a>(cx: Scope<'a, DraftProps<'a>>) -> Element<'a> {
    let draft = cx.props.draft;
    cx.render(rsx!(input {
        id: "user-input",
        r#type: "text",
        placeholder: "Type your question here...",
        value: "{draft.read()}",
        oninput: |e| {
            draft.set(e.value.clone());
        },
        onkeydown: move |e| cx.props.onenter.call(e),
    }))
}
