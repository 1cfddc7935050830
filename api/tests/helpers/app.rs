use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use db::test_utils::setup_test_db;
use sea_orm::DatabaseConnection;
use seeder::{SeedConfig, Seeder};
use serde_json::Value;
use tower::ServiceExt;
use util::{config::AppConfig, state::AppState};

/// App over a fresh, migrated, empty in-memory database.
pub async fn make_test_app(env: &str) -> (Router, DatabaseConnection) {
    AppConfig::set_env(env);
    let db = setup_test_db().await;
    (api::app(AppState::new(db.clone())), db)
}

/// App over a database seeded with a fixed RNG seed.
pub async fn make_seeded_app() -> (Router, DatabaseConnection) {
    let (app, db) = make_test_app("development").await;
    Seeder::new(SeedConfig::default().with_rng_seed(99))
        .seed(&db)
        .await
        .expect("seeding failed");
    (app, db)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}
