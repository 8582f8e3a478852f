//! Player listing and per-player ranking history.

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db::{player_repo, ranking_repo};

/// GET /players
#[get("/players")]
pub async fn list_players(db: web::Data<SqlitePool>) -> impl Responder {
    match player_repo::list_players(db.get_ref()).await {
        Ok(players) => HttpResponse::Ok().json(players),
        Err(e) => {
            log::error!("player listing failed: {e:?}");
            HttpResponse::InternalServerError().json(json!({ "detail": "internal server error" }))
        }
    }
}

/// GET /players/{player_id}/history
///
/// The storage layer cannot tell an unknown id from a player without
/// entries; both come back empty and map to 404 here.
#[get("/players/{player_id}/history")]
pub async fn player_history(path: web::Path<i64>, db: web::Data<SqlitePool>) -> impl Responder {
    let player_id = path.into_inner();

    match ranking_repo::player_history(db.get_ref(), player_id).await {
        Ok(rows) if rows.is_empty() => {
            HttpResponse::NotFound().json(json!({ "detail": "No history found for this player" }))
        }
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("history lookup for player {player_id} failed: {e:?}");
            HttpResponse::InternalServerError().json(json!({ "detail": "internal server error" }))
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_players).service(player_history);
}
