// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::api::AppState;
use crate::api::types::{
    AnalysisQuery, PasswordGenerationRequest, PasswordGenerationResponse,
    PasswordAnalysisResponse
};
use crate::generators;
use crate::models::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};
use log::{debug, error};

/// Generate a password
///
/// Generates a random password from the requested character classes.
/// Lowercase letters are always included.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse),
        (status = 500, description = "Server error", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let defaults = &state.defaults;
    let length = generation_req.length.unwrap_or(defaults.length);

    // Validate options
    if !GenerationConfig::is_within_bounds(length) {
        debug!("Rejecting generation request with length {}", length);
        return Ok(HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(
            format!("Password length must be between {} and {} characters", MIN_LENGTH, MAX_LENGTH),
        )));
    }

    // Create options with defaults or provided values
    let config = GenerationConfig {
        length,
        include_uppercase: generation_req.include_uppercase.unwrap_or(defaults.include_uppercase),
        include_numbers: generation_req.include_numbers.unwrap_or(defaults.include_numbers),
        include_symbols: generation_req.include_symbols.unwrap_or(defaults.include_symbols),
    };

    let password = match state.generator.generate(&config) {
        Ok(pwd) => pwd,
        Err(e) => {
            error!("Failed to generate password: {}", e);
            return Ok(HttpResponse::InternalServerError().json(
                PasswordGenerationResponse::failure(format!("Failed to generate password: {}", e)),
            ));
        }
    };

    let strength = generators::score(password.as_str());

    Ok(HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password.into_string()),
        strength: Some(strength),
        error: None,
    }))
}

/// Analyze password strength
///
/// Classifies a password and lists the criteria it misses.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze (URL-encoded)")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    let password = path.into_inner();

    // actix leaves %2F, %2B and %25 encoded in path segments
    let decoded_password = match urlencoding::decode(&password) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => password,
    };

    analysis_response(&decoded_password)
}

/// Analyze password strength from a query parameter
///
/// Same result as the path form. Also accepts the empty password, which
/// has no path-segment spelling.
#[utoipa::path(
    get,
    path = "/generator/analysis",
    tag = "Generator",
    params(AnalysisQuery),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse),
        (status = 400, description = "Missing pwd parameter")
    )
)]
pub async fn analyze_password_query(query: web::Query<AnalysisQuery>) -> impl Responder {
    analysis_response(&query.pwd)
}

fn analysis_response(password: &str) -> HttpResponse {
    let report = generators::analyze(password);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: report.level,
        criteria: report.criteria,
        feedback: report.feedback(),
    })
}
