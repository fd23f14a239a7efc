//! Snippet repository
//!
//! - create: INSERT ... RETURNING id, timestamps taken from the database clock
//! - get/latest: expiry filtered in the WHERE clause

use async_trait::async_trait;
use snipbox_core::{Snippet, LATEST_LIMIT};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::db::store::{SnippetStore, StoreError};

/// PostgreSQL-backed snippet storage
#[derive(Clone)]
pub struct SnippetRepo {
    pool: PgPool,
}

impl SnippetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn snippet_from_row(row: &PgRow) -> Result<Snippet, sqlx::Error> {
    Ok(Snippet {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        created: row.try_get("created")?,
        expires: row.try_get("expires")?,
    })
}

#[async_trait]
impl SnippetStore for SnippetRepo {
    async fn create(&self, title: &str, content: &str, lifetime_days: u16) -> Result<i64, StoreError> {
        // NOW() is fixed for the statement, so both columns share one instant.
        let row = sqlx::query(
            r#"
            INSERT INTO snippets (title, content, created, expires)
            VALUES ($1, $2, NOW(), NOW() + make_interval(days => $3))
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(i32::from(lifetime_days))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.try_get("id")?)
    }

    async fn get(&self, id: i64) -> Result<Snippet, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > NOW() AND id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NoRecord)?;

        Ok(snippet_from_row(&row)?)
    }

    async fn latest(&self) -> Result<Vec<Snippet>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, content, created, expires
            FROM snippets
            WHERE expires > NOW()
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(LATEST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;

        let snippets = rows
            .iter()
            .map(snippet_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(snippets)
    }
}
