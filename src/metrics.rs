use lazy_static::lazy_static;
use prometheus::{Counter, register_counter};

lazy_static! {
    pub static ref PAINTS_ACCEPTED: Counter =
        register_counter!("pixelboard_paints_accepted_total", "Total accepted paints").unwrap();
    pub static ref PAINTS_REJECTED: Counter = register_counter!(
        "pixelboard_paints_rejected_total",
        "Total paints rejected by the cooldown"
    )
    .unwrap();
    pub static ref STATE_REQUESTS: Counter = register_counter!(
        "pixelboard_state_requests_total",
        "Total state snapshot requests"
    )
    .unwrap();
    pub static ref EVENT_STREAMS: Counter = register_counter!(
        "pixelboard_event_streams_total",
        "Total /events subscriptions opened"
    )
    .unwrap();
}
