//! Wall-clock helper.

use chrono::Utc;

/// Current Unix time in milliseconds.
pub fn now_ms() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}
