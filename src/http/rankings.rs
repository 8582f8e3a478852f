//! Ranking snapshots by date and by date range.

use actix_web::{get, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::db::ranking_repo;

#[derive(Deserialize)]
pub struct RankingParams {
    /// Maximum number of entries to return (per date on the range route).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

fn bad_limit() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "detail": "limit must be a positive integer" }))
}

/// GET /rankings/{date}?limit=N
#[get("/rankings/{date}")]
pub async fn rankings_by_date(
    path: web::Path<NaiveDate>,
    web::Query(params): web::Query<RankingParams>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let date = path.into_inner();
    if params.limit < 1 {
        return bad_limit();
    }

    match ranking_repo::list_rankings(db.get_ref(), date, params.limit, None).await {
        Ok(rows) if rows.is_empty() => {
            HttpResponse::NotFound().json(json!({ "detail": "No rankings found for this date" }))
        }
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("rankings lookup for {date} failed: {e:?}");
            HttpResponse::InternalServerError().json(json!({ "detail": "internal server error" }))
        }
    }
}

/// GET /rankings/range/{start}/{end}?limit=N
///
/// A window that falls between two weekly snapshots is a legitimate empty
/// result, so this route returns 200 with an empty list rather than 404.
#[get("/rankings/range/{start}/{end}")]
pub async fn rankings_by_range(
    path: web::Path<(NaiveDate, NaiveDate)>,
    web::Query(params): web::Query<RankingParams>,
    db: web::Data<SqlitePool>,
) -> impl Responder {
    let (start, end) = path.into_inner();
    if params.limit < 1 {
        return bad_limit();
    }

    match ranking_repo::list_rankings(db.get_ref(), start, params.limit, Some(end)).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => {
            log::error!("rankings lookup for {start}..{end} failed: {e:?}");
            HttpResponse::InternalServerError().json(json!({ "detail": "internal server error" }))
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(rankings_by_date).service(rankings_by_range);
}
