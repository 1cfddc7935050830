use crate::helpers::{get_json, make_seeded_app, make_test_app};
use axum::http::StatusCode;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn empty_collection_lists_nothing() {
    let (app, _db) = make_test_app("development").await;

    let (status, json) = get_json(&app, "/api/roles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 0);
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["page"], 1);
    assert_eq!(json["data"]["per_page"], 20);
}

#[tokio::test]
#[serial]
async fn seeded_collections_paginate() {
    let (app, _db) = make_seeded_app().await;

    let (status, json) = get_json(&app, "/api/users?page=2&per_page=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 24);
    assert_eq!(json["data"]["page"], 2);
    assert_eq!(json["data"]["per_page"], 10);
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert!(items.iter().all(|u| u.get("password_hash").is_none()));

    let (_, json) = get_json(&app, "/api/users?page=3&per_page=10").await;
    assert_eq!(json["data"]["items"].as_array().unwrap().len(), 4);

    let (_, json) = get_json(&app, "/api/semesters").await;
    assert_eq!(json["data"]["total"], 4);

    let (_, json) = get_json(&app, "/api/teaching-assignments?per_page=100").await;
    assert_eq!(json["data"]["total"], 20);
}

#[tokio::test]
#[serial]
async fn single_row_lookup_and_missing_id() {
    let (app, _db) = make_seeded_app().await;

    let (status, json) = get_json(&app, "/api/roles/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["name"], "Admin");

    let (status, json) = get_json(&app, "/api/groups/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
#[serial]
async fn invalid_pagination_is_rejected() {
    let (app, _db) = make_test_app("development").await;

    let (status, json) = get_json(&app, "/api/grades?page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);

    let (status, _) = get_json(&app, "/api/grades?per_page=101").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn enums_serialize_as_text() {
    let (app, _db) = make_seeded_app().await;

    let (_, json) = get_json(&app, "/api/assignments/1").await;
    let kind = json["data"]["assignment_type"].as_str().unwrap();
    assert!(["Quiz", "Homework", "Project", "Exam"].contains(&kind));

    let (_, json) = get_json(&app, "/api/attendances/1").await;
    let status = json["data"]["status"].as_str().unwrap();
    assert!(["Present", "Absent", "Late", "Excused"].contains(&status));
}
