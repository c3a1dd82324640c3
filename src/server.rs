//! HTTP surface for the translation pipeline.
//!
//! One hand-written route: `POST /chain/invoke` marshals the JSON envelope
//! into a [`TranslationRequest`], runs the pipeline, and returns the output
//! envelope. Errors map to failure statuses; no partial or cached result is
//! ever substituted. `GET /health` is the only auxiliary path.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::error::TranslateError;
use crate::pipeline::{TranslationPipeline, TranslationRequest};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TranslationPipeline>,
}

/// Build the axum router with all routes and layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chain/invoke", post(invoke))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Invocation envelope: the translation input wrapped in an `input` field.
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub input: TranslationRequest,
}

/// Invocation reply envelope.
#[derive(Debug, Serialize)]
pub struct InvokeResponse {
    pub output: String,
}

/// Error reply body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = match &self {
            TranslateError::ConfigurationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            TranslateError::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            TranslateError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            TranslateError::RequestFailed { .. }
            | TranslateError::AuthenticationFailed { .. }
            | TranslateError::GenerationFailed { .. }
            | TranslateError::MalformedReply { .. } => StatusCode::BAD_GATEWAY,
        };

        let body = Json(ErrorResponse {
            error: self.user_message(),
        });

        (status, body).into_response()
    }
}

/// `POST /chain/invoke` — run one request through the pipeline.
async fn invoke(
    State(state): State<AppState>,
    Json(request): Json<InvokeRequest>,
) -> Result<Json<InvokeResponse>, TranslateError> {
    let request_id = Uuid::new_v4();
    let input = request.input;

    info!(
        %request_id,
        language = %input.language,
        text_chars = input.text.chars().count(),
        "Translation request received"
    );

    let output = state.pipeline.translate(&input).await?;

    info!(
        %request_id,
        output_chars = output.chars().count(),
        "Translation request completed"
    );

    Ok(Json(InvokeResponse { output }))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "OK"
}
