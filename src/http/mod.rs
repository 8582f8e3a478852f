pub mod health;
pub mod players;
pub mod rankings;
pub mod routes;
