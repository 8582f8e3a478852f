use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::sqlite::SqlitePoolOptions;
use std::env;
use tennis_rankings_server::{db, http, metrics, seed};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://tennis_rankings.db?mode=rwc".into());
    let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".into());

    // SQLite pool
    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to open rankings database");

    // Schema + one-shot seed, finished before the first request is served
    db::schema::create_tables(&db_pool)
        .await
        .expect("Failed to create schema");
    let seeded = seed::seed_if_empty(&db_pool)
        .await
        .expect("Failed to seed rankings database");
    if seeded {
        log::info!("seeded one year of weekly dummy rankings");
    }

    let rows = db::ranking_repo::count_rankings(&db_pool)
        .await
        .expect("Failed to count rankings");
    metrics::RANKING_ROWS.set(rows);

    log::info!("listening on {server_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .app_data(web::Data::new(db_pool.clone()))
            .configure(http::routes::init_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
