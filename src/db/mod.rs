pub mod models;
pub mod player_repo;
pub mod ranking_repo;
pub mod schema;
