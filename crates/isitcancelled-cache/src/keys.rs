//! Cache key generation.
//!
//! Keys mirror the paths the ingestion job writes: path segments joined with `:`.

/// Key of the aggregate metadata document.
pub const META: &str = "meta";

/// Builds a cache key from its path segments.
fn build_key(parts: &[&str]) -> String {
    parts.join(":")
}

/// Cache keys for scheduling metadata.
pub mod metadata {
    use super::*;

    /// Key for the single metadata document shared by every semester.
    pub fn document() -> String {
        build_key(&[META])
    }
}

/// Cache keys for per-class weekly records.
pub mod timetables {
    use super::*;

    /// Key for one class's record in one week of one semester.
    pub fn class_week(semester_id: &str, week_id: &str, class_id: &str) -> String {
        build_key(&[
            "semesters",
            semester_id,
            "weeks",
            week_id,
            "classes",
            class_id,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_key() {
        assert_eq!(metadata::document(), "meta");
    }

    #[test]
    fn test_class_week_key() {
        assert_eq!(
            timetables::class_week("2024", "3", "CS101"),
            "semesters:2024:weeks:3:classes:CS101"
        );
    }

    #[test]
    fn test_class_week_key_keeps_empty_segments() {
        assert_eq!(
            timetables::class_week("2024", "3", ""),
            "semesters:2024:weeks:3:classes:"
        );
    }
}
