use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_class_week;

pub fn init_timetables_router() -> Router<AppState> {
    Router::new().route("/{semester_id}/weeks/{week_id}", get(get_class_week))
}
