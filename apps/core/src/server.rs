//! HTTP boundary.
//!
//! - `GET  /`        status message
//! - `POST /respond` `{"message": "..."}` → `{"reply": "..."}` or `{"error": "..."}`

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::responder::Responder;

const MISSING_MESSAGE: &str = "Missing 'message' in request";

#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
}

#[derive(Debug, Serialize)]
struct ReplyResponse {
    reply: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { error: self.detail() })).into_response()
    }
}

/// GET / - Status
async fn home() -> Json<Value> {
    Json(serde_json::json!({ "message": "Smart Responder API is running." }))
}

/// POST /respond - Answer one message
async fn respond(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ReplyResponse>, AppError> {
    let message = payload
        .ok()
        .and_then(|Json(body)| body.get("message").and_then(Value::as_str).map(str::to_owned))
        .ok_or_else(|| {
            warn!("Rejected request without a usable message field");
            AppError::MissingInput(MISSING_MESSAGE.to_string())
        })?;

    let responder = Arc::clone(&state.responder);
    let reply = tokio::task::spawn_blocking(move || responder.generate_and_log_response(&message))
        .await
        .map_err(|e| {
            error!("Responder task failed: {}", e);
            AppError::processing(e)
        })??;

    Ok(Json(ReplyResponse { reply }))
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/respond", post(respond))
        .layer(cors)
        .with_state(state)
}

/// Serves the boundary until the process is stopped.
pub async fn serve(addr: SocketAddr, responder: Arc<Responder>) -> Result<(), AppError> {
    let app = build_router(AppState { responder });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Smart Responder API listening on http://{}", addr);
    info!("   GET  /        - Status");
    info!("   POST /respond - Answer a message");

    axum::serve(listener, app).await?;
    Ok(())
}
