use crate::helpers::{get_json, make_test_app};
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use serial_test::serial;
use tower::ServiceExt;
use util::config::AppConfig;

async fn preflight(app: &Router, origin: &str) -> Response<Body> {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/health")
        .header("Origin", origin)
        .header("Access-Control-Request-Method", "GET")
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(req).await.unwrap()
}

#[tokio::test]
#[serial]
async fn health_check_returns_ok_json() {
    let (app, _db) = make_test_app("development").await;

    let (status, json) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
    assert_eq!(json["message"], "Health check passed");
}

#[tokio::test]
#[serial]
async fn cors_preflight_is_allowed() {
    AppConfig::set_cors_allowed_origins(Vec::new());
    let (app, _db) = make_test_app("development").await;

    let response = preflight(&app, "http://localhost:5173").await;
    assert!(response.status().is_success());
    assert!(
        response
            .headers()
            .contains_key("access-control-allow-origin")
    );
}

#[tokio::test]
#[serial]
async fn cors_allow_list_rejects_unlisted_origins() {
    AppConfig::set_cors_allowed_origins(vec!["http://allowed.test".into()]);
    let (app, _db) = make_test_app("development").await;

    let response = preflight(&app, "http://allowed.test").await;
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://allowed.test"
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");

    let response = preflight(&app, "http://elsewhere.test").await;
    assert!(
        !response
            .headers()
            .contains_key("access-control-allow-origin")
    );

    AppConfig::reset();
}
