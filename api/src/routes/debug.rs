//! Inspection endpoints, mounted under `/api/debug` outside production only.
//!
//! - GET `/api/debug/migrations` – applied and pending migration names
//! - GET `/api/debug/users-raw`  – every user row (hash omitted)
//! - GET `/api/debug/groups-raw` – every group row

use crate::response::{ApiResponse, error_response};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use db::models::{group, user};
use db::repository::Repository;
use migration::{Migrator, MigratorTrait};
use serde::Serialize;
use util::state::AppState;

pub fn debug_routes() -> Router<AppState> {
    Router::new()
        .route("/migrations", get(list_migrations))
        .route("/users-raw", get(users_raw))
        .route("/groups-raw", get(groups_raw))
}

#[derive(Debug, Serialize)]
pub struct MigrationStatus {
    pub applied: Vec<String>,
    pub pending: Vec<String>,
}

async fn migration_status(app_state: &AppState) -> Result<MigrationStatus, sea_orm::DbErr> {
    let db = app_state.db();
    let applied = Migrator::get_applied_migrations(db).await?;
    let pending = Migrator::get_pending_migrations(db).await?;
    Ok(MigrationStatus {
        applied: applied.iter().map(|m| m.name().to_string()).collect(),
        pending: pending.iter().map(|m| m.name().to_string()).collect(),
    })
}

async fn list_migrations(State(app_state): State<AppState>) -> Response {
    match migration_status(&app_state).await {
        Ok(status) => Json(ApiResponse::success(status, "Migration status retrieved")).into_response(),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An error occurred: {e}"),
        ),
    }
}

async fn users_raw(State(app_state): State<AppState>) -> Response {
    match Repository::<user::Entity>::list_all(app_state.db()).await {
        Ok(rows) => Json(ApiResponse::success(rows, "Users retrieved")).into_response(),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An error occurred fetching raw users: {e}"),
        ),
    }
}

async fn groups_raw(State(app_state): State<AppState>) -> Response {
    match Repository::<group::Entity>::list_all(app_state.db()).await {
        Ok(rows) => Json(ApiResponse::success(rows, "Groups retrieved")).into_response(),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An error occurred fetching raw groups: {e}"),
        ),
    }
}
