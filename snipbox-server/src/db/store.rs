//! Storage contract for snippets

use async_trait::async_trait;
use snipbox_core::Snippet;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No visible snippet has the requested id. Covers both ids that never
    /// existed and snippets past their expiry.
    #[error("no matching record found")]
    NoRecord,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append-only snippet storage.
///
/// Implementations must filter on expiry at read time: a snippet whose
/// `expires` is not strictly after the current UTC time is never returned.
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Insert a snippet that expires `lifetime_days` days from now and
    /// return its id.
    async fn create(&self, title: &str, content: &str, lifetime_days: u16) -> Result<i64, StoreError>;

    /// Fetch one unexpired snippet.
    async fn get(&self, id: i64) -> Result<Snippet, StoreError>;

    /// Up to [`snipbox_core::LATEST_LIMIT`] unexpired snippets, newest id
    /// first. All rows or an error, never a partial list.
    async fn latest(&self) -> Result<Vec<Snippet>, StoreError>;
}
