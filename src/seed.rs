//! One-time synthetic ranking data for demo deployments.
//!
//! Generates a year of weekly ATP-style snapshots for a fixed 15-player
//! field. Values drift around each player's baseline so charts look
//! plausible; none of it is authoritative.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use sqlx::SqlitePool;

/// Seed field, best baseline first. Index order doubles as the base ranking.
pub const SEED_PLAYERS: [(&str, &str); 15] = [
    ("Novak Djokovic", "SRB"),
    ("Carlos Alcaraz", "ESP"),
    ("Daniil Medvedev", "RUS"),
    ("Jannik Sinner", "ITA"),
    ("Andrey Rublev", "RUS"),
    ("Stefanos Tsitsipas", "GRE"),
    ("Alexander Zverev", "GER"),
    ("Holger Rune", "DEN"),
    ("Taylor Fritz", "USA"),
    ("Casper Ruud", "NOR"),
    ("Hubert Hurkacz", "POL"),
    ("Alex de Minaur", "AUS"),
    ("Tommy Paul", "USA"),
    ("Cameron Norrie", "GBR"),
    ("Lorenzo Musetti", "ITA"),
];

/// Baseline points per seed index, roughly the real-world distribution.
pub const INITIAL_POINTS: [i64; 15] = [
    9800, 8400, 7600, 6900, 5800, 5400, 4800, 4200, 3800, 3400, 3000, 2800, 2600, 2400, 2200,
];

const HISTORY_DAYS: i64 = 365;
const LOWEST_RANK: i64 = 15;
// Baseline for indexes past the fixture table.
const FALLBACK_POINTS: i64 = 2000;

/// Weekly snapshot dates: one year back from `today`, stepping 7 days while
/// still on or before `today`.
pub fn weekly_dates(today: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = today - Duration::days(HISTORY_DAYS);
    while current <= today {
        dates.push(current);
        current += Duration::weeks(1);
    }
    dates
}

/// One simulated (ranking, points) pair for the player at `index`.
///
/// Top-10 seeds move at most two places per week, the rest five; point
/// swings are tighter for the top 5. Ranking stays inside [1, 15] and
/// points never go negative. Indexes past the fixture table start from a
/// 2000-point baseline.
pub fn simulate_entry(rng: &mut impl Rng, index: usize) -> (i64, i64) {
    let base_ranking = index as i64 + 1;
    let base_points = INITIAL_POINTS.get(index).copied().unwrap_or(FALLBACK_POINTS);

    let ranking_variance = if index < 10 {
        rng.random_range(-2..=2)
    } else {
        rng.random_range(-5..=5)
    };
    let points_variance = if index < 5 {
        rng.random_range(-200..=200)
    } else {
        rng.random_range(-400..=400)
    };
    let weekly_jitter = rng.random_range(-100..=100);

    let ranking = (base_ranking + ranking_variance).clamp(1, LOWEST_RANK);
    let points = (base_points + points_variance + weekly_jitter).max(0);
    (ranking, points)
}

/// Insert the seed players plus a year of weekly rankings, but only when
/// the players table is empty. Runs inside a single transaction so a
/// concurrent second starter re-checks the count and skips. Returns whether
/// anything was inserted.
pub async fn seed_if_empty(db: &SqlitePool) -> Result<bool> {
    let mut tx = db.begin().await.context("opening seed transaction")?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players")
        .fetch_one(&mut *tx)
        .await
        .context("counting players")?;
    if existing > 0 {
        return Ok(false);
    }

    let mut player_ids = Vec::with_capacity(SEED_PLAYERS.len());
    for (name, country) in SEED_PLAYERS {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO players (name, country) VALUES (?, ?) RETURNING id")
                .bind(name)
                .bind(country)
                .fetch_one(&mut *tx)
                .await
                .context("inserting seed player")?;
        player_ids.push(id);
    }

    let mut rng = rand::rng();
    let today = Utc::now().date_naive();
    for date in weekly_dates(today) {
        for (index, player_id) in player_ids.iter().copied().enumerate() {
            let (ranking, points) = simulate_entry(&mut rng, index);
            sqlx::query(
                "INSERT INTO rankings (date, player_id, ranking, points) VALUES (?, ?, ?, ?)",
            )
            .bind(date)
            .bind(player_id)
            .bind(ranking)
            .bind(points)
            .execute(&mut *tx)
            .await
            .context("inserting seed ranking")?;
        }
    }

    tx.commit().await.context("committing seed data")?;
    Ok(true)
}
