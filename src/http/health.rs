//! Root banner + liveness probe.

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::SqlitePool;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Tennis ATP Rankings API" }))
}

#[get("/healthz")]
pub async fn healthz(db: web::Data<SqlitePool>) -> impl Responder {
    if sqlx::query("SELECT 1").execute(db.get_ref()).await.is_err() {
        return HttpResponse::ServiceUnavailable().body("db");
    }
    HttpResponse::Ok().body("ok")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(healthz);
}
