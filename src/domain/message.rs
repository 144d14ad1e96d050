use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MessageRole;

/// A single entry in a conversation history.
///
/// Fields are read-only once built; a message's role cannot be reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: MessageRole,
    content: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: now_millis(),
        }
    }

    /// Builds a message stamped with `timestamp_ms` (epoch milliseconds).
    ///
    /// `None`, `0` and values outside chrono's range fall back to now.
    pub fn with_timestamp(
        role: MessageRole,
        content: impl Into<String>,
        timestamp_ms: Option<i64>,
    ) -> Self {
        let created_at = match timestamp_ms.filter(|ms| *ms != 0) {
            Some(ms) => DateTime::from_timestamp_millis(ms).unwrap_or_else(|| {
                tracing::warn!(timestamp_ms = ms, "Timestamp out of range, using current time");
                now_millis()
            }),
            None => now_millis(),
        };

        Self {
            role,
            content: content.into(),
            created_at,
        }
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn created_at_millis(&self) -> i64 {
        self.created_at.timestamp_millis()
    }
}

// Truncated so a message survives a millisecond round trip unchanged.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}
