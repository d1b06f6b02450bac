use axum::{
    extract::{Path, Query, State, rejection::PathRejection},
    response::Response,
};
use tracing::{debug, instrument};

use isitcancelled_core::{AppError, ErrorResponse};

use crate::modules::timetables::model::{CLASS_ID_REQUIRED, ClassWeekQuery};
use crate::modules::timetables::service::TimetableService;
use crate::state::AppState;
use crate::utils::response::raw_json;

/// Get a class's lessons for one week
///
/// Returns the cached record unchanged. Clients use it to tell whether a
/// lesson is cancelled that week.
#[utoipa::path(
    get,
    path = "/semesters/{semester_id}/weeks/{week_id}",
    params(
        ("semester_id" = String, Path, description = "Semester ID"),
        ("week_id" = String, Path, description = "Week ID within the semester"),
        ClassWeekQuery
    ),
    responses(
        (status = 200, description = "Weekly record for the class", body = serde_json::Value),
        (status = 400, description = "class_id query parameter missing", body = ErrorResponse),
        (status = 404, description = "Record not cached or cache unavailable", body = ErrorResponse)
    ),
    tag = "Timetables"
)]
#[instrument(skip(state))]
pub async fn get_class_week(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let class_id = ClassWeekQuery::from_pairs(pairs)
        .class_id
        .ok_or_else(|| AppError::bad_request(anyhow::anyhow!(CLASS_ID_REQUIRED)))?;

    // Ids that do not decode to UTF-8 cannot name a cached record.
    let Path((semester_id, week_id)) = path.map_err(|e| {
        debug!(error = %e, "Undecodable path segment");
        AppError::resource_not_found()
    })?;

    let record =
        TimetableService::get_class_week(state.cache.as_ref(), &semester_id, &week_id, &class_id)
            .await?;

    Ok(raw_json(record))
}
