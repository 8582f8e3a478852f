use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::db::models::Player;

/// Every player, in insertion order.
pub async fn list_players(db: &SqlitePool) -> Result<Vec<Player>> {
    sqlx::query_as::<_, Player>("SELECT id, name, country FROM players ORDER BY id")
        .fetch_all(db)
        .await
        .context("listing players")
}
