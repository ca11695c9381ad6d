//! Identity and clock helpers shared by all entities.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a fresh opaque entity id (random 128-bit UUID, hyphenated).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current instant in UTC.
pub fn current_time() -> DateTime<Utc> {
    Utc::now()
}

/// Timestamp for a mutation that must not precede `previous`.
pub(crate) fn touch_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    current_time().max(previous)
}
