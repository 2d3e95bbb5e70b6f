use axum::http::HeaderMap;
use std::net::SocketAddr;

// Coarse client identification: "user-" + best-effort address.
// X-Forwarded-For (first hop) wins over the socket peer; "unknown" when
// neither is available. Trivially spoofable, which is a documented
// limitation of the service, not something this layer tries to fix.
pub fn user_id(headers: &HeaderMap, addr: Option<SocketAddr>) -> String {
    let ip = forwarded_ip(headers)
        .or_else(|| addr.map(|a| a.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string());
    format!("user-{}", ip)
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("x-forwarded-for")?.to_str().ok()?;
    let first = value.split(',').next()?.trim();
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}
