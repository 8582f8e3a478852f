use crate::http;
use actix_web::web;

/// Mount every HTTP sub-module. Routes live at the root scope; the four
/// data endpoints are read-only.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(http::players::init_routes)
        .configure(http::rankings::init_routes)
        .configure(http::health::init_routes);
}
