use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::ws::WebSocketUpgrade, response::Html, routing::get, Router};
use indoc::formatdoc;
use tracing::{info, warn};

use super::app::{app, AppProps};
use crate::chat_core::Pipeline;
use crate::config::Config;

pub async fn start_server(config: Config) -> Result<()> {
    let pipeline = Arc::new(Pipeline::from_config(&config));
    let advisories: Vec<String> = config
        .tracing
        .advisories()
        .iter()
        .map(ToString::to_string)
        .collect();

    let addr = config.server.listen_addr;
    info!(%addr, model = %pipeline.model(), "listening on http://{addr}");
    let app = router(pipeline, advisories, &config.server.reachable_addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("server stopped unexpectedly")
}

fn router(pipeline: Arc<Pipeline>, advisories: Vec<String>, reachable_addr: &str) -> Router {
    let view = dioxus_liveview::LiveViewPool::new();
    let index = index_page(reachable_addr);

    Router::new()
        .route("/", get(move || async move { Html(index) }))
        .route(
            "/ws",
            get(move |ws: WebSocketUpgrade| async move {
                ws.on_upgrade(move |socket| async move {
                    info!("session opened");
                    let props = AppProps {
                        pipeline,
                        advisories,
                    };
                    if let Err(err) = view
                        .launch_with_props(dioxus_liveview::axum_socket(socket), app, props)
                        .await
                    {
                        warn!(?err, "session ended with an error");
                    }
                    info!("session closed");
                })
            }),
        )
}

fn index_page(reachable_addr: &str) -> String {
    formatdoc!(
        r#"
        <!DOCTYPE html>
        <html>
            <head>
                <title>Ollama Q&A Bot</title>
                <meta charset="utf-8">
                <meta name="viewport"
                content="width=device-width,
                initial-scale=1,
                minimum-scale=1,
                maximum-scale=1,
                user-scalable=no">
            </head>
            <body> <div id="main"></div> </body>
            {glue}
        </html>
        "#,
        glue = dioxus_liveview::interpreter_glue(&format!("ws://{reachable_addr}/ws"))
    )
}
