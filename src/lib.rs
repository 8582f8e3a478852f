pub mod db;
pub mod http;
pub mod metrics;
pub mod seed;
