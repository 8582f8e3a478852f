//! Idempotent schema setup for the rankings database.

use anyhow::{Context, Result};
use sqlx::SqlitePool;

/// Create both tables and the two lookup indexes. Safe to call on every
/// start; existing data is left untouched.
pub async fn create_tables(db: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL,
            country TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .context("creating players table")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rankings (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            player_id INTEGER NOT NULL,
            ranking   INTEGER NOT NULL,
            points    INTEGER NOT NULL,
            FOREIGN KEY (player_id) REFERENCES players (id)
        )
        "#,
    )
    .execute(db)
    .await
    .context("creating rankings table")?;

    // The two dominant lookups: by date, and by (player, date).
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_rankings_date ON rankings(date)")
        .execute(db)
        .await
        .context("creating date index")?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_rankings_player_date ON rankings(player_id, date)",
    )
    .execute(db)
    .await
    .context("creating player/date index")?;

    Ok(())
}
