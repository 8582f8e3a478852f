use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// One ranking snapshot joined with the player it belongs to.
#[derive(Debug, Serialize, FromRow)]
pub struct RankingRow {
    pub date: NaiveDate,
    pub player_id: i64,
    pub player_name: String,
    pub ranking: i64,
    pub points: i64,
    pub country: String,
}
