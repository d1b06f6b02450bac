use serde_json::{Map, Value};

use isitcancelled_cache::CacheError;

/// Field names of the aggregate metadata document.
pub mod fields {
    pub const CLASSES: &str = "classes";
    pub const SEMESTERS: &str = "semesters";
    pub const TIME_SLOTS: &str = "timeSlots";
    pub const WEEKS: &str = "weeks";
}

/// The metadata document split into its four independently served parts.
///
/// Each fragment is the re-encoded JSON of one top-level field. A field that
/// is absent from the document is encoded as `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFragments {
    pub classes: Vec<u8>,
    pub semesters: Vec<u8>,
    pub time_slots: Vec<u8>,
    pub weeks: Vec<u8>,
}

impl MetadataFragments {
    /// Parses the raw cached document and re-encodes each field.
    ///
    /// # Errors
    ///
    /// `CacheError::Decode` when the document is not a JSON object.
    pub fn decompose(raw: &str) -> Result<Self, CacheError> {
        let document: Map<String, Value> = serde_json::from_str(raw)?;

        let encode = |name: &str| serde_json::to_vec(document.get(name).unwrap_or(&Value::Null));

        Ok(Self {
            classes: encode(fields::CLASSES)?,
            semesters: encode(fields::SEMESTERS)?,
            time_slots: encode(fields::TIME_SLOTS)?,
            weeks: encode(fields::WEEKS)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decompose_full_document() {
        let raw = json!({
            "classes": [{ "id": 7, "name": "3a" }],
            "semesters": [{ "id": 61, "name": "HS 2024" }],
            "timeSlots": [{ "start": "07:45" }],
            "weeks": [{ "id": 0 }, { "id": 1 }],
        })
        .to_string();

        let fragments = MetadataFragments::decompose(&raw).unwrap();

        assert_eq!(fragments.classes, br#"[{"id":7,"name":"3a"}]"#);
        assert_eq!(fragments.semesters, br#"[{"id":61,"name":"HS 2024"}]"#);
        assert_eq!(fragments.time_slots, br#"[{"start":"07:45"}]"#);
        assert_eq!(fragments.weeks, br#"[{"id":0},{"id":1}]"#);
    }

    #[test]
    fn test_missing_field_is_null() {
        let fragments = MetadataFragments::decompose(r#"{"semesters":[]}"#).unwrap();

        assert_eq!(fragments.semesters, b"[]");
        assert_eq!(fragments.classes, b"null");
        assert_eq!(fragments.time_slots, b"null");
        assert_eq!(fragments.weeks, b"null");
    }

    #[test]
    fn test_object_fields_are_kept() {
        let fragments = MetadataFragments::decompose(r#"{"weeks":{"0":{"id":0}}}"#).unwrap();
        assert_eq!(fragments.weeks, br#"{"0":{"id":0}}"#);
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = MetadataFragments::decompose("{not json").unwrap_err();
        assert!(matches!(err, CacheError::Decode(_)));
    }

    #[test]
    fn test_non_object_document_is_decode_error() {
        let err = MetadataFragments::decompose("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, CacheError::Decode(_)));
    }
}
