use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory entry for an external channel, keyed by its `@handle` url.
///
/// `created_at` is absent on the seeded defaults, which predate the field,
/// and is omitted from JSON when unset so the store file stays stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub category: String,
    pub official: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Channel {
    pub fn handle(&self) -> String {
        normalized_handle(&self.url)
    }
}

/// Lowercases and strips one leading `@`. Stored urls are normalized through
/// this for uniqueness checks and lookups, so `@Test` and `test` claim the
/// same handle. Lookup input is only lowercased, never stripped.
pub fn normalized_handle(raw: &str) -> String {
    raw.strip_prefix('@').unwrap_or(raw).to_lowercase()
}
