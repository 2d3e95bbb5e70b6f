use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use std::sync::Arc;

pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let painted_cells = state.pixels.list().map(|keys| keys.len()).unwrap_or(0);
    Json(serde_json::json!({
        "status": "healthy",
        "painted_cells": painted_cells,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
