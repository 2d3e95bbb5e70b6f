mod events;
mod health;
mod metrics;
mod page;
mod state;
mod update;

use axum::http::StatusCode;
use axum::response::IntoResponse;

pub use events::events_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use page::{page_handler, render_page};
pub use state::state_handler;
pub use update::update_handler;

// Router fallback for any unregistered method/path pair
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}
