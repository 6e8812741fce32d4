// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calculate", web::post().to(handlers::calculate))
        .route("/ping", web::get().to(handlers::ping));
}
