//! Read-only listing endpoints, one collection per table.
//!
//! Every collection exposes the same two routes:
//! - `GET /api/{collection}?page=&per_page=` → `{ items, page, per_page, total }`
//! - `GET /api/{collection}/{id}` → the row, or `404`

use crate::response::{ApiResponse, error_response};
use crate::routes::common::{ListQuery, PageResponse, format_validation_errors};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use db::models::{
    assignment, attendance, grade, group, role, semester, student, subject, teacher,
    teacher_subject_group_assignment, user,
};
use db::repository::Repository;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityName, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use serde::Serialize;
use util::state::AppState;
use validator::Validate;

/// GET /{collection}
///
/// - `200 OK` with one page of rows ordered by id
/// - `400 Bad Request` when `page < 1` or `per_page` is outside `1..=100`
/// - `500 Internal Server Error` on a database error
pub async fn list<E>(State(app_state): State<AppState>, Query(query): Query<ListQuery>) -> Response
where
    E: EntityTrait + Send + Sync + 'static,
    E::Model: Serialize + IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    if let Err(e) = query.validate() {
        return error_response(StatusCode::BAD_REQUEST, format_validation_errors(&e));
    }

    let entity = E::default();
    let table = entity.table_name();
    let (page, per_page) = (query.page(), query.per_page());
    match Repository::<E>::page(app_state.db(), page, per_page).await {
        Ok((items, total)) => {
            let body = PageResponse {
                items,
                page,
                per_page,
                total,
            };
            let message = format!("{table} retrieved successfully");
            (StatusCode::OK, Json(ApiResponse::success(body, message))).into_response()
        }
        Err(e) => {
            tracing::error!(table, error = %e, "list query failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

/// GET /{collection}/{id}
///
/// - `200 OK` with the row
/// - `404 Not Found` when no row has that id
/// - `500 Internal Server Error` on a database error
pub async fn get_one<E>(State(app_state): State<AppState>, Path(id): Path<i32>) -> Response
where
    E: EntityTrait + Send + Sync + 'static,
    E::Model: Serialize + IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let entity = E::default();
    let table = entity.table_name();
    match Repository::<E>::find_by_id(app_state.db(), id).await {
        Ok(Some(row)) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, format!("{table} row {id} retrieved"))),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("No {table} row with id {id}")),
        Err(e) => {
            tracing::error!(table, id, error = %e, "lookup failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
        }
    }
}

fn collection<E>() -> Router<AppState>
where
    E: EntityTrait + Send + Sync + 'static,
    E::Model: Serialize + IntoActiveModel<E::ActiveModel> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    Router::new()
        .route("/", get(list::<E>))
        .route("/{id}", get(get_one::<E>))
}

/// Mounts every table under its collection path.
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .nest("/roles", collection::<role::Entity>())
        .nest("/users", collection::<user::Entity>())
        .nest("/groups", collection::<group::Entity>())
        .nest("/subjects", collection::<subject::Entity>())
        .nest("/semesters", collection::<semester::Entity>())
        .nest("/students", collection::<student::Entity>())
        .nest("/teachers", collection::<teacher::Entity>())
        .nest(
            "/teaching-assignments",
            collection::<teacher_subject_group_assignment::Entity>(),
        )
        .nest("/assignments", collection::<assignment::Entity>())
        .nest("/attendances", collection::<attendance::Entity>())
        .nest("/grades", collection::<grade::Entity>())
}
