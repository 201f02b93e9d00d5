use std::sync::Arc;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::genai::{GeminiClient, GeminiConfig, TextGenerator};
use crate::routes::create_routes;

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rs_explain_svc=info,tower_http=debug,axum::rejection=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Shared per-process state handed to request handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub default_topic: String,
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    info!("Initializing application router");

    // One provider client for the whole process; it is stateless per call and
    // safe to share across concurrent requests.
    info!("Initializing Gemini client...");
    let generator = GeminiClient::new(GeminiConfig {
        api_key: config.google_api_key.clone(),
        model: config.gemini_model.clone(),
        api_base: config.gemini_api_base.clone(),
    })?;

    let state = AppState {
        generator: Arc::new(generator),
        default_topic: config.default_topic.clone(),
    };

    Ok(Router::new()
        .merge(create_routes())
        .nest_service("/static", ServeDir::new("static"))
        .layer(Extension(state))
        .layer(CorsLayer::permissive()))
}
