use crate::metrics::EVENT_STREAMS;
use crate::state::AppState;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};

// Live paint feed. At-most-once, best-effort: a subscriber joining after a
// paint never sees it retroactively (catch-up is GET /state), and a lagged
// receiver just drops events. Disconnect drops the receiver, which is the
// whole deregistration story.
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    EVENT_STREAMS.inc();

    let rx = state.events_tx.subscribe();
    let stream = BroadcastStream::new(rx)
        .filter_map(|paint| {
            // Lagged receivers skip; serialization of a plain struct
            // cannot realistically fail
            paint.ok().and_then(|p| Event::default().json_data(&p).ok())
        })
        .map(Ok::<Event, Infallible>);

    Sse::new(stream).keep_alive(KeepAlive::default())
}
