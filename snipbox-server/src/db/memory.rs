//! In-memory snippet storage
//!
//! Same visibility and ordering rules as `SnippetRepo`. Used by the router
//! tests and by `snipbox serve --in-memory` when working on templates
//! without a database.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use snipbox_core::{Snippet, LATEST_LIMIT};
use tokio::sync::RwLock;

use crate::db::store::{SnippetStore, StoreError};

#[derive(Default)]
pub struct MemorySnippetStore {
    rows: RwLock<Vec<Snippet>>,
}

impl MemorySnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row with explicit timestamps, bypassing the lifetime
    /// calculation. Lets tests seed already-expired snippets.
    pub async fn insert_with_times(
        &self,
        title: &str,
        content: &str,
        created: DateTime<Utc>,
        expires: DateTime<Utc>,
    ) -> i64 {
        let mut rows = self.rows.write().await;
        // Ids are never reused because rows are never removed.
        let id = rows.len() as i64 + 1;
        rows.push(Snippet {
            id,
            title: title.to_owned(),
            content: content.to_owned(),
            created,
            expires,
        });
        id
    }
}

#[async_trait]
impl SnippetStore for MemorySnippetStore {
    async fn create(&self, title: &str, content: &str, lifetime_days: u16) -> Result<i64, StoreError> {
        let created = Utc::now();
        let expires = created + Duration::days(i64::from(lifetime_days));
        Ok(self.insert_with_times(title, content, created, expires).await)
    }

    async fn get(&self, id: i64) -> Result<Snippet, StoreError> {
        let now = Utc::now();
        self.rows
            .read()
            .await
            .iter()
            .find(|s| s.id == id && s.is_visible_at(now))
            .cloned()
            .ok_or(StoreError::NoRecord)
    }

    async fn latest(&self) -> Result<Vec<Snippet>, StoreError> {
        let now = Utc::now();
        // Rows are stored in id order.
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .rev()
            .filter(|s| s.is_visible_at(now))
            .take(LATEST_LIMIT)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_then_get() {
        let store = MemorySnippetStore::new();

        let id = store.create("Test", "Body", 7).await.unwrap();
        assert_eq!(id, 1);

        let snippet = store.get(id).await.unwrap();
        assert_eq!(snippet.title, "Test");
        assert_eq!(snippet.content, "Body");
        assert_eq!(snippet.expires - snippet.created, Duration::days(7));
    }

    #[tokio::test]
    async fn missing_id_is_no_record() {
        let store = MemorySnippetStore::new();
        assert!(matches!(store.get(999_999).await, Err(StoreError::NoRecord)));
    }

    #[tokio::test]
    async fn expired_id_is_no_record() {
        let store = MemorySnippetStore::new();
        let now = Utc::now();
        let id = store
            .insert_with_times("old", "gone", now - Duration::days(2), now - Duration::days(1))
            .await;

        assert!(matches!(store.get(id).await, Err(StoreError::NoRecord)));
    }

    #[tokio::test]
    async fn zero_day_lifetime_is_never_visible() {
        let store = MemorySnippetStore::new();
        let id = store.create("blink", "gone already", 0).await.unwrap();
        assert!(matches!(store.get(id).await, Err(StoreError::NoRecord)));
    }

    #[tokio::test]
    async fn latest_takes_newest_ten() {
        let store = MemorySnippetStore::new();
        for i in 1..=15 {
            store.create(&format!("snippet {i}"), "body", 7).await.unwrap();
        }

        let ids: Vec<i64> = store.latest().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![15, 14, 13, 12, 11, 10, 9, 8, 7, 6]);
    }

    #[tokio::test]
    async fn latest_skips_expired() {
        let store = MemorySnippetStore::new();
        let now = Utc::now();
        let live = store.create("live", "body", 1).await.unwrap();
        store
            .insert_with_times("old", "gone", now - Duration::days(2), now - Duration::days(1))
            .await;

        let ids: Vec<i64> = store.latest().await.unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![live]);
    }

    #[tokio::test]
    async fn latest_on_empty_or_expired_store_is_empty() {
        let store = MemorySnippetStore::new();
        assert!(store.latest().await.unwrap().is_empty());

        let now = Utc::now();
        store
            .insert_with_times("old", "gone", now - Duration::days(2), now - Duration::days(1))
            .await;
        assert!(store.latest().await.unwrap().is_empty());
    }
}
