use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service status and whether the Gemini credential is configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "gemini_configured": state.is_configured(),
        "version": env!("CARGO_PKG_VERSION"),
        "service": "echo-api"
    }))
}

/// GET / and POST /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Backend" }))
}
