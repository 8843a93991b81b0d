use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use passforge::api::{routes, AppState};
use passforge::crypto::RandomSource;
use passforge::generators::{Charset, PasswordGenerator};
use passforge::models::GenerationConfig;

fn state() -> web::Data<AppState> {
    web::Data::new(AppState::new(
        PasswordGenerator::new(RandomSource::Seeded(42)),
        GenerationConfig::default(),
    ))
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(state())
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn generate_with_defaults() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["error"].is_null());

    let password = body["password"].as_str().unwrap();
    assert_eq!(password.chars().count(), 12);
    assert_eq!(body["strength"], passforge::score(password).label());
}

#[actix_web::test]
async fn generate_honours_flags() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({
            "length": 32,
            "include_uppercase": false,
            "include_numbers": false,
            "include_symbols": false
        }))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    let password = body["password"].as_str().unwrap();
    assert_eq!(password.len(), 32);
    assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    // 32 lowercase characters meet only the length criterion
    assert_eq!(body["strength"], "Medium");

    let charset = Charset::for_config(&GenerationConfig::new(32, false, false, false));
    assert!(password.chars().all(|c| charset.contains(c)));
}

#[actix_web::test]
async fn generate_rejects_out_of_bounds_lengths() {
    let app = app!();

    for length in [0, 7, 33, 1000] {
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({ "length": length }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "length {}", length);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["password"].is_null());
        assert!(body["error"].as_str().unwrap().contains("between 8 and 32"));
    }
}

#[actix_web::test]
async fn analysis_reports_level_criteria_and_feedback() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/generator/analysis/Abcdefghijk1%21")
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["strength"], "Very Strong");
    assert_eq!(body["criteria"]["has_symbol"], true);
    assert_eq!(body["feedback"], json!(["Excellent password strength!"]));
}

#[actix_web::test]
async fn analysis_decodes_slash_and_does_not_count_it() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/generator/analysis/abcdefghijkl%2F")
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["strength"], "Medium");
    assert_eq!(body["criteria"]["length_ok"], true);
    assert_eq!(body["criteria"]["has_symbol"], false);
}

#[actix_web::test]
async fn analysis_of_twelve_lowercase_is_weak() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/generator/analysis/abcdefghijkl")
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["strength"], "Weak");
    assert_eq!(body["feedback"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn analysis_by_query_accepts_empty_password() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/generator/analysis?pwd=")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["strength"], "Weak");
    assert_eq!(body["criteria"]["length_ok"], false);
    assert_eq!(body["feedback"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn analysis_by_query_matches_path_form() {
    let app = app!();
    let by_query: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/generator/analysis?pwd=Abcdefghijk1%21%2F")
            .to_request(),
    )
    .await;
    let by_path: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/generator/analysis/Abcdefghijk1%21%2F")
            .to_request(),
    )
    .await;

    assert_eq!(by_query["strength"], "Very Strong");
    assert_eq!(by_query, by_path);
}

#[actix_web::test]
async fn analysis_by_query_requires_pwd() {
    let app = app!();
    let req = test::TestRequest::get().uri("/generator/analysis").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn health_reports_random_source() {
    let app = app!();
    let req = test::TestRequest::get().uri("/health").to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["random_source"], "seeded:42");
    assert_eq!(body["secure"], false);
}
