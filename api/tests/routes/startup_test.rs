use crate::helpers::{get_json, make_test_app};
use api::startup;
use axum::http::StatusCode;
use chrono::Utc;
use db::models::{role, role::RoleName, user};
use db::repository::Repository;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serial_test::serial;
use util::config::AppConfig;

#[tokio::test]
#[serial]
async fn seeding_failure_is_swallowed_and_data_still_served() {
    let (app, db) = make_test_app("development").await;
    AppConfig::set_seed_on_startup(true);
    AppConfig::set_seed_rng_seed(Some(5));

    // No Student role, so the users stage cannot complete.
    for name in [RoleName::Admin, RoleName::Teacher] {
        role::ActiveModel {
            name: Set(name.to_string()),
            description: Set(None),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
    }

    startup::seed_on_startup(&db).await;

    let (status, json) = get_json(&app, "/api/roles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 2);

    let (_, json) = get_json(&app, "/api/users").await;
    assert_eq!(json["data"]["total"], 0);

    AppConfig::reset();
}

#[tokio::test]
#[serial]
async fn disabled_startup_seeding_inserts_nothing() {
    let (_app, db) = make_test_app("development").await;
    AppConfig::set_seed_on_startup(false);

    startup::seed_on_startup(&db).await;

    assert_eq!(Repository::<role::Entity>::count(&db).await.unwrap(), 0);
    assert_eq!(Repository::<user::Entity>::count(&db).await.unwrap(), 0);

    AppConfig::reset();
}

#[tokio::test]
#[serial]
async fn prepare_database_migrates_and_seeds() {
    AppConfig::set_database_path("sqlite::memory:");
    AppConfig::set_seed_on_startup(true);
    AppConfig::set_seed_rng_seed(Some(6));

    let db = startup::prepare_database().await.unwrap();

    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
    assert_eq!(Repository::<role::Entity>::count(&db).await.unwrap(), 3);
    assert_eq!(Repository::<user::Entity>::count(&db).await.unwrap(), 24);

    AppConfig::reset();
}
