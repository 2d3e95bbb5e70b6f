mod config;
mod handlers;
mod identity;
mod metrics;
mod models;
mod rate_limit;
mod state;
mod store;

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::Args;
use crate::handlers::{
    events_handler, health_handler, metrics_handler, not_found, page_handler, state_handler,
    update_handler,
};
use crate::state::AppState;

// Any unmatched method/path pair answers 404, wrong-method requests on a
// registered path included
fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/state", get(state_handler))
        .route("/update", post(update_handler))
        .route("/events", get(events_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let args = Args::parse();
    let state = Arc::new(AppState::new(&args));
    let app = app(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Pixelboard running on http://localhost:{}", args.port);
    info!(
        "Grid {}x{}, cooldown {} ms",
        args.grid_width, args.grid_height, args.cooldown_ms
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
