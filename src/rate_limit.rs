use crate::store::{KvStore, StoreError};
use std::time::Duration;

pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

// First paint is always allowed; afterwards a paint is allowed only once
// strictly more than the cooldown has elapsed since the last accepted one.
// An unparsable stored timestamp counts as no record.
pub fn can_paint(
    log: &dyn KvStore,
    user_id: &str,
    cooldown: Duration,
    now_ms: i64,
) -> Result<bool, StoreError> {
    let Some(last) = log.get(user_id)? else {
        return Ok(true);
    };
    let Ok(last_ms) = last.parse::<i64>() else {
        return Ok(true);
    };
    Ok(now_ms - last_ms > cooldown.as_millis() as i64)
}

// Called only for accepted paints
pub fn record_paint(log: &dyn KvStore, user_id: &str, now_ms: i64) -> Result<(), StoreError> {
    log.put(user_id, &now_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    const W: i64 = 1000;

    fn cooldown() -> Duration {
        Duration::from_millis(W as u64)
    }

    #[test]
    fn first_paint_always_allowed() {
        let log = MemoryStore::new();
        assert!(can_paint(&log, "user-1.2.3.4", cooldown(), 5_000).unwrap());
    }

    #[test]
    fn paint_within_window_rejected() {
        let log = MemoryStore::new();
        let t0 = 10_000;
        record_paint(&log, "user-1.2.3.4", t0).unwrap();
        assert!(!can_paint(&log, "user-1.2.3.4", cooldown(), t0 + W - 1).unwrap());
    }

    #[test]
    fn paint_at_exact_window_boundary_rejected() {
        // the contract is strictly greater-than
        let log = MemoryStore::new();
        let t0 = 10_000;
        record_paint(&log, "user-1.2.3.4", t0).unwrap();
        assert!(!can_paint(&log, "user-1.2.3.4", cooldown(), t0 + W).unwrap());
    }

    #[test]
    fn paint_after_window_allowed() {
        let log = MemoryStore::new();
        let t0 = 10_000;
        record_paint(&log, "user-1.2.3.4", t0).unwrap();
        assert!(can_paint(&log, "user-1.2.3.4", cooldown(), t0 + W + 1).unwrap());
    }

    #[test]
    fn users_are_limited_independently() {
        let log = MemoryStore::new();
        let t0 = 10_000;
        record_paint(&log, "user-1.2.3.4", t0).unwrap();
        assert!(!can_paint(&log, "user-1.2.3.4", cooldown(), t0 + 1).unwrap());
        assert!(can_paint(&log, "user-5.6.7.8", cooldown(), t0 + 1).unwrap());
    }

    #[test]
    fn garbage_timestamp_treated_as_absent() {
        let log = MemoryStore::new();
        log.put("user-1.2.3.4", "not-a-number").unwrap();
        assert!(can_paint(&log, "user-1.2.3.4", cooldown(), 10_000).unwrap());
    }

    #[test]
    fn record_overwrites_previous_timestamp() {
        let log = MemoryStore::new();
        record_paint(&log, "user-1.2.3.4", 10_000).unwrap();
        record_paint(&log, "user-1.2.3.4", 20_000).unwrap();
        assert_eq!(log.get("user-1.2.3.4").unwrap(), Some("20000".to_string()));
    }
}
