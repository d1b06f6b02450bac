use axum::{extract::State, response::Response};
use tracing::instrument;

use isitcancelled_core::{AppError, ErrorResponse};

use crate::modules::metadata::service::MetadataService;
use crate::state::AppState;
use crate::utils::response::raw_json;

#[utoipa::path(
    get,
    path = "/semesters",
    responses(
        (status = 200, description = "All semesters as stored in the metadata document", body = serde_json::Value),
        (status = 404, description = "Metadata not cached or cache unavailable", body = ErrorResponse)
    ),
    tag = "Metadata"
)]
#[instrument(skip(state))]
pub async fn get_semesters(State(state): State<AppState>) -> Result<Response, AppError> {
    let meta = MetadataService::fetch_metadata(state.cache.as_ref()).await?;

    Ok(raw_json(meta.semesters))
}

// The semester id only has to match the route: every semester resolves to the
// same metadata document, so it is never extracted.

#[utoipa::path(
    get,
    path = "/semesters/{semester_id}/timeSlots",
    params(
        ("semester_id" = String, Path, description = "Semester ID (does not scope the lookup)")
    ),
    responses(
        (status = 200, description = "Time slots of the school day", body = serde_json::Value),
        (status = 404, description = "Metadata not cached or cache unavailable", body = ErrorResponse)
    ),
    tag = "Metadata"
)]
#[instrument(skip(state))]
pub async fn get_time_slots(State(state): State<AppState>) -> Result<Response, AppError> {
    let meta = MetadataService::fetch_metadata(state.cache.as_ref()).await?;

    Ok(raw_json(meta.time_slots))
}

#[utoipa::path(
    get,
    path = "/semesters/{semester_id}/weeks",
    params(
        ("semester_id" = String, Path, description = "Semester ID (does not scope the lookup)")
    ),
    responses(
        (status = 200, description = "Weeks of the current semester", body = serde_json::Value),
        (status = 404, description = "Metadata not cached or cache unavailable", body = ErrorResponse)
    ),
    tag = "Metadata"
)]
#[instrument(skip(state))]
pub async fn get_weeks(State(state): State<AppState>) -> Result<Response, AppError> {
    let meta = MetadataService::fetch_metadata(state.cache.as_ref()).await?;

    Ok(raw_json(meta.weeks))
}

#[utoipa::path(
    get,
    path = "/semesters/{semester_id}/classes",
    params(
        ("semester_id" = String, Path, description = "Semester ID (does not scope the lookup)")
    ),
    responses(
        (status = 200, description = "Classes of the current semester", body = serde_json::Value),
        (status = 404, description = "Metadata not cached or cache unavailable", body = ErrorResponse)
    ),
    tag = "Metadata"
)]
#[instrument(skip(state))]
pub async fn get_classes(State(state): State<AppState>) -> Result<Response, AppError> {
    let meta = MetadataService::fetch_metadata(state.cache.as_ref()).await?;

    Ok(raw_json(meta.classes))
}
