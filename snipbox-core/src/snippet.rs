//! The snippet record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of snippets returned by the "latest" listing.
pub const LATEST_LIMIT: usize = 10;

/// A titled text fragment with a bounded visibility window.
///
/// Snippets are append-only: they are created once and never mutated.
/// Expiry is a read-time filter, the row itself is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl Snippet {
    /// Whether the snippet is still retrievable at `now`.
    ///
    /// Visibility ends exactly at `expires`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires
    }
}
