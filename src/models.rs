use serde::{Deserialize, Serialize};

// Paint request body for POST /update
#[derive(Deserialize, Clone, Debug)]
pub struct UpdateRequest {
    pub x: i64,
    pub y: i64,
    pub color: String,
    // Optional display name, logged only
    #[serde(default)]
    pub name: Option<String>,
}

// Accepted paint, fanned out to /events subscribers
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PaintEvent {
    pub x: i64,
    pub y: i64,
    pub color: String,
}
