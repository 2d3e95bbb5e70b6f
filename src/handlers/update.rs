use crate::identity;
use crate::metrics::{PAINTS_ACCEPTED, PAINTS_REJECTED};
use crate::models::{PaintEvent, UpdateRequest};
use crate::rate_limit;
use crate::state::AppState;
use crate::store::{StoreError, cell_key};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error};

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!("malformed paint body: {}", rejection);
            return (StatusCode::BAD_REQUEST, "Invalid request body").into_response();
        }
    };

    let user_id = identity::user_id(&headers, Some(addr));

    match apply_paint(&state, &user_id, &request, rate_limit::now_ms()) {
        Ok(true) => "OK".into_response(),
        Ok(false) => (StatusCode::FORBIDDEN, "Cooldown active").into_response(),
        Err(e) => {
            error!("paint by {} failed: {}", user_id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Store error").into_response()
        }
    }
}

// Accept/reject is decided by the cooldown alone: no bounds check, no color
// format check. Cell write and rate-log write are sequential, not atomic;
// a cell-write failure returns before the timestamp is recorded.
pub(crate) fn apply_paint(
    state: &AppState,
    user_id: &str,
    request: &UpdateRequest,
    now_ms: i64,
) -> Result<bool, StoreError> {
    if !rate_limit::can_paint(state.rate_log.as_ref(), user_id, state.cooldown, now_ms)? {
        PAINTS_REJECTED.inc();
        debug!("cooldown active for {}", user_id);
        return Ok(false);
    }

    state
        .pixels
        .put(&cell_key(request.x, request.y), &request.color)?;
    rate_limit::record_paint(state.rate_log.as_ref(), user_id, now_ms)?;
    PAINTS_ACCEPTED.inc();

    match &request.name {
        Some(name) => debug!(
            "{} ({}) painted {},{} {}",
            user_id, name, request.x, request.y, request.color
        ),
        None => debug!("{} painted {},{} {}", user_id, request.x, request.y, request.color),
    }

    // Best-effort fan-out; zero subscribers is not an error
    let _ = state.events_tx.send(PaintEvent {
        x: request.x,
        y: request.y,
        color: request.color.clone(),
    });

    Ok(true)
}
