use crate::config::Args;
use crate::handlers::render_page;
use crate::models::PaintEvent;
use crate::store::{KvStore, MemoryStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

// App's shared state
pub struct AppState {
    pub pixels: Arc<dyn KvStore>,
    pub rate_log: Arc<dyn KvStore>,
    pub cooldown: Duration,
    // Fan-out of accepted paints to live /events subscribers. Receivers
    // deregister themselves on drop; a send with no receivers is fine.
    pub events_tx: broadcast::Sender<PaintEvent>,
    pub page_html: String,
}

impl AppState {
    pub fn new(args: &Args) -> Self {
        let (events_tx, _) = broadcast::channel(args.events_capacity);
        Self {
            pixels: Arc::new(MemoryStore::new()),
            rate_log: Arc::new(MemoryStore::new()),
            cooldown: Duration::from_millis(args.cooldown_ms),
            events_tx,
            page_html: render_page(args.grid_width, args.grid_height),
        }
    }
}
