use utoipa::OpenApi;

use isitcancelled_core::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::metadata::controller::get_semesters,
        crate::modules::metadata::controller::get_time_slots,
        crate::modules::metadata::controller::get_weeks,
        crate::modules::metadata::controller::get_classes,
        crate::modules::timetables::controller::get_class_week,
    ),
    components(schemas(ErrorResponse)),
    tags(
        (name = "Metadata", description = "Semesters, time slots, weeks and classes"),
        (name = "Timetables", description = "Per-class weekly records")
    ),
    info(
        title = "IsItCancelled API",
        version = "3.0.0",
        description = "Read-only access to cached timetable data: is class X cancelled this week?",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
