use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_classes, get_semesters, get_time_slots, get_weeks};

pub fn init_metadata_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_semesters))
        .route("/{semester_id}/timeSlots", get(get_time_slots))
        .route("/{semester_id}/weeks", get(get_weeks))
        .route("/{semester_id}/classes", get(get_classes))
}
