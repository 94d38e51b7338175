use chrono::{SecondsFormat, Utc};
use tokio::time::Instant;

pub fn now_u64() -> u64 {
    now_i64() as u64
}

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}

/// `2026-10-19T08:30:00.123Z`
pub fn now_rfc3339_millis() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn get_instant() -> Instant {
    Instant::now()
}
