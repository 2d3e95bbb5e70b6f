use crate::metrics::STATE_REQUESTS;
use crate::state::AppState;
use crate::store::{KvStore, StoreError};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::error;

pub async fn state_handler(State(state): State<Arc<AppState>>) -> Response {
    STATE_REQUESTS.inc();

    match snapshot(state.pixels.as_ref()) {
        Ok(map) => Json(map).into_response(),
        Err(e) => {
            error!("state snapshot failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Store error").into_response()
        }
    }
}

// Full snapshot of every key the store currently holds. No grid-bounds
// filtering: the store is the source of truth, stale or out-of-range keys
// included. A key that vanishes between list and get (concurrent-write
// race) is skipped; a store error aborts the whole snapshot.
fn snapshot(pixels: &dyn KvStore) -> Result<serde_json::Map<String, serde_json::Value>, StoreError> {
    let mut out = serde_json::Map::new();
    for key in pixels.list()? {
        if let Some(color) = pixels.get(&key)? {
            out.insert(key, serde_json::Value::String(color));
        }
    }
    Ok(out)
}
