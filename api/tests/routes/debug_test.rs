use crate::helpers::{get_json, make_seeded_app, make_test_app};
use axum::http::StatusCode;
use serial_test::serial;
use util::config::AppConfig;

#[tokio::test]
#[serial]
async fn migrations_are_listed_in_development() {
    let (app, _db) = make_test_app("development").await;

    let (status, json) = get_json(&app, "/api/debug/migrations").await;
    assert_eq!(status, StatusCode::OK);

    let applied = json["data"]["applied"].as_array().unwrap();
    assert_eq!(applied.len(), 11);
    assert_eq!(applied[0], "m202506100001_create_roles");
    assert_eq!(json["data"]["pending"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[serial]
async fn raw_dumps_return_every_row() {
    let (app, _db) = make_seeded_app().await;

    let (status, json) = get_json(&app, "/api/debug/users-raw").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 24);

    let (_, json) = get_json(&app, "/api/debug/groups-raw").await;
    assert_eq!(json["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
#[serial]
async fn debug_routes_are_absent_in_production() {
    let (app, _db) = make_test_app("production").await;

    let (status, _) = get_json(&app, "/api/debug/migrations").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_json(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);

    AppConfig::reset();
}
