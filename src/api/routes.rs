// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis", web::get().to(handlers::generator::analyze_password_query))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
    );

    // System
    cfg.route("/health", web::get().to(handlers::system::health));
}
