//! Warden server library logic.

pub mod api_skill;
pub mod config;
pub mod dispatch;
pub mod handlers;

use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use warden_detect::DetectorClient;
use warden_speech::SpeechResponseBuilder;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Detection-service client.
    pub detector: Arc<dyn DetectorClient>,
    /// Resolved skill settings (max results, briefing regions, card image).
    pub skill: config::SkillSettings,
    /// Speech envelope builder.
    pub speech: SpeechResponseBuilder,
}

impl AppState {
    pub fn new(detector: Arc<dyn DetectorClient>, skill: config::SkillSettings) -> Self {
        let speech = SpeechResponseBuilder::with_card_image(skill.card_image.clone());
        Self {
            detector,
            skill,
            speech,
        }
    }
}

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by load balancers,
/// monitoring, and CI to verify the server is running.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/skill", post(api_skill::skill_handler))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(Arc::new(state)))
}
