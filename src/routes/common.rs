//! Common routes: health, readiness, and version, reported through the
//! standard envelope.

use crate::error::ErrorBody;
use crate::response::success_one;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

async fn health() -> impl IntoResponse {
    success_one(serde_json::json!({ "status": "ok" }))
}

async fn version() -> impl IntoResponse {
    success_one(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// A failed database ping reports 503 through the error envelope; the
/// driver error itself is not surfaced.
async fn ready(State(state): State<AppState>) -> Response {
    if sqlx::query("SELECT 1")
        .fetch_optional(&state.pool)
        .await
        .is_err()
    {
        let body = ErrorBody {
            success: false,
            status_code: StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            error: "database unavailable".into(),
            details: None,
        };
        return (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response();
    }
    success_one(serde_json::json!({ "status": "ok", "database": "ok" })).into_response()
}

/// GET /health, GET /ready (database ping), GET /version.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
