use crate::state::AppState;
use axum::extract::State;
use axum::response::Html;
use std::sync::Arc;

const PAGE_TEMPLATE: &str = include_str!("../../assets/index.html");

// Grid dimensions are baked into the page once at startup; the markup is
// otherwise an opaque static asset.
pub fn render_page(grid_width: u32, grid_height: u32) -> String {
    PAGE_TEMPLATE
        .replace("{{grid_width}}", &grid_width.to_string())
        .replace("{{grid_height}}", &grid_height.to_string())
}

pub async fn page_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page_html.clone())
}
