//! Skill webhook handler.

use crate::dispatch::{self, DispatchError};
use crate::AppState;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;
use warden_types::turn::TurnRequest;

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    #[error("detection service failure: {0}")]
    BadGateway(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<DispatchError> for ApiError {
    fn from(error: DispatchError) -> Self {
        match error {
            DispatchError::UnknownRequestKind(_)
            | DispatchError::MissingIntent
            | DispatchError::UnknownIntent(_) => ApiError::BadRequest(error.to_string()),
            DispatchError::Detect(e) => ApiError::BadGateway(e.to_string()),
        }
    }
}

/// Handler for `POST /skill`.
///
/// A session-ended request acknowledges with an empty object: the platform
/// ignores the body of that turn.
pub async fn skill_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(turn): Json<TurnRequest>,
) -> Result<Json<Value>, ApiError> {
    match dispatch::dispatch_turn(&state, turn).await? {
        Some(response) => {
            let body = serde_json::to_value(&response)
                .map_err(|e| ApiError::InternalServerError(format!("response encoding: {e}")))?;
            Ok(Json(body))
        }
        None => Ok(Json(json!({}))),
    }
}
