use askama::Template;
use axum::Extension;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json as ResponseJson, Response};
use tracing::{debug, error, info};

use crate::app::AppState;
use crate::models::{HealthResponse, TopicQuery};
use crate::render::markdown_to_html;

/// Instruction placed in front of every topic before it reaches the provider.
const PROMPT_PREFIX: &str =
    "Explain the topic in 200 words and provide a few links on the web for further research: ";

/// Body shown to the caller when the provider call fails. Provider detail is
/// logged, never rendered.
const GENERATION_ERROR_BODY: &str = "Error generating content.";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "algorithms.html")]
pub struct AlgorithmsTemplate;

#[derive(Template)]
#[template(path = "evaluation.html")]
pub struct EvaluationTemplate;

#[derive(Template)]
#[template(path = "future.html")]
pub struct FutureTemplate;

/// View-model for the answer page. `response` is already HTML; `topic` always
/// echoes the value used to build the prompt, on both success and failure.
#[derive(Template)]
#[template(path = "ai.html")]
pub struct AnswerTemplate {
    pub response: String,
    pub topic: String,
}

pub async fn index() -> Response {
    render_page(StatusCode::OK, IndexTemplate)
}

pub async fn algorithms() -> Response {
    render_page(StatusCode::OK, AlgorithmsTemplate)
}

pub async fn evaluation() -> Response {
    render_page(StatusCode::OK, EvaluationTemplate)
}

pub async fn future() -> Response {
    render_page(StatusCode::OK, FutureTemplate)
}

/// Health check handler
pub async fn health_check() -> ResponseJson<HealthResponse> {
    debug!("Health check endpoint called");
    ResponseJson(HealthResponse::ok())
}

/// Explain handler: forwards the requested topic to the generation provider
/// and renders the answer as a page.
///
/// Two terminal outcomes per request: provider success renders the answer as
/// HTML with status 200; provider failure renders a fixed error body with
/// status 502. Neither path propagates an unhandled fault.
pub async fn explain(
    Extension(state): Extension<AppState>,
    Query(params): Query<TopicQuery>,
) -> Response {
    let topic = params.topic_or(&state.default_topic);
    info!("Explain endpoint called with topic: {}", topic);

    let prompt = build_prompt(&topic);

    match state.generator.generate(&prompt).await {
        Ok(result) => {
            let html = markdown_to_html(&result.text);
            info!("Successfully generated answer for topic: {}", topic);
            render_page(
                StatusCode::OK,
                AnswerTemplate {
                    response: html,
                    topic,
                },
            )
        }
        Err(err) => {
            error!(status = ?err.status(), error = %err, "Content generation failed");
            render_page(
                StatusCode::BAD_GATEWAY,
                AnswerTemplate {
                    response: GENERATION_ERROR_BODY.to_string(),
                    topic,
                },
            )
        }
    }
}

/// Builds the fixed-template instruction embedding the topic verbatim.
fn build_prompt(topic: &str) -> String {
    format!("{PROMPT_PREFIX}{topic}")
}

fn render_page<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            error!("Template rendering failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
