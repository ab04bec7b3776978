use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// A persisted memo. Timestamps travel as RFC 3339 strings both on disk and over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Validated, trimmed fields of a create or update request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(input: NoteInput) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces title and content wholesale and moves `updated_at` forward.
    pub fn apply(&mut self, input: NoteInput) {
        self.title = input.title;
        self.content = input.content;
        self.updated_at = next_timestamp(self.updated_at);
    }
}

/// Current time, nudged past `previous` when the clock has not advanced.
pub fn next_timestamp(previous: OffsetDateTime) -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    if now > previous {
        now
    } else {
        previous + Duration::MICROSECOND
    }
}
