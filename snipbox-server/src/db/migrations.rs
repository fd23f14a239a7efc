//! Schema for the snippets table

use sqlx::PgPool;

/// Create the snippets table and its index if they do not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running snippet migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS snippets (
            id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created TIMESTAMPTZ NOT NULL,
            expires TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets (created)")
        .execute(pool)
        .await?;

    tracing::info!("Snippet migrations complete");
    Ok(())
}
