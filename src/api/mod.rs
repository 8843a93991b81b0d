// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::generators::PasswordGenerator;
use crate::models::GenerationConfig;

/// Shared, read-only state for every worker.
pub struct AppState {
    pub generator: PasswordGenerator,
    /// Values used for fields a request leaves out
    pub defaults: GenerationConfig,
}

impl AppState {
    pub fn new(generator: PasswordGenerator, defaults: GenerationConfig) -> Self {
        Self { generator, defaults }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::generator::analyze_password_query,

        // System endpoints
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::HealthResponse,
            crate::generators::StrengthLevel,
            crate::generators::StrengthCriteria,
            crate::models::GenerationConfig
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength analysis"),
        (name = "System", description = "Service status")
    ),
    info(
        title = "passforge API",
        version = "0.1.0",
        description = "Random password generator with strength scoring",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: AppState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting passforge API server on {}:{}", address, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
