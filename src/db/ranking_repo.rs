use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::db::models::RankingRow;

/// Rankings for a single date, or for an inclusive date range when
/// `end_date` is given.
///
/// Single date: ascending ranking, at most `limit` rows. Range: ascending
/// (date, ranking), with `limit` bounding the rows kept for each distinct
/// date so a long range is never cut down to one date's worth.
pub async fn list_rankings(
    db: &SqlitePool,
    date: NaiveDate,
    limit: i64,
    end_date: Option<NaiveDate>,
) -> Result<Vec<RankingRow>> {
    if let Some(end) = end_date {
        sqlx::query_as::<_, RankingRow>(
            r#"
            SELECT date, player_id, player_name, ranking, points, country
              FROM (
                    SELECT r.date      AS date,
                           r.player_id AS player_id,
                           p.name      AS player_name,
                           r.ranking   AS ranking,
                           r.points    AS points,
                           p.country   AS country,
                           ROW_NUMBER() OVER (PARTITION BY r.date ORDER BY r.ranking) AS pos
                      FROM rankings r
                      JOIN players p ON p.id = r.player_id
                     WHERE r.date >= ? AND r.date <= ?
                   )
             WHERE pos <= ?
             ORDER BY date, ranking
            "#,
        )
        .bind(date)
        .bind(end)
        .bind(limit)
        .fetch_all(db)
        .await
        .context("fetching rankings for date range")
    } else {
        sqlx::query_as::<_, RankingRow>(
            r#"
            SELECT r.date      AS date,
                   r.player_id AS player_id,
                   p.name      AS player_name,
                   r.ranking   AS ranking,
                   r.points    AS points,
                   p.country   AS country
              FROM rankings r
              JOIN players p ON p.id = r.player_id
             WHERE r.date = ?
             ORDER BY r.ranking
             LIMIT ?
            "#,
        )
        .bind(date)
        .bind(limit)
        .fetch_all(db)
        .await
        .context("fetching rankings for date")
    }
}

/// Total ranking snapshots across all dates.
pub async fn count_rankings(db: &SqlitePool) -> Result<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM rankings")
        .fetch_one(db)
        .await
        .context("counting rankings")
}

/// Full ranking history for one player, oldest snapshot first. Unknown ids
/// simply produce an empty Vec.
pub async fn player_history(db: &SqlitePool, player_id: i64) -> Result<Vec<RankingRow>> {
    sqlx::query_as::<_, RankingRow>(
        r#"
        SELECT r.date      AS date,
               r.player_id AS player_id,
               p.name      AS player_name,
               r.ranking   AS ranking,
               r.points    AS points,
               p.country   AS country
          FROM rankings r
          JOIN players p ON p.id = r.player_id
         WHERE r.player_id = ?
         ORDER BY r.date
        "#,
    )
    .bind(player_id)
    .fetch_all(db)
    .await
    .context("fetching player history")
}
