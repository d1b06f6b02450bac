pub mod metadata;
pub mod timetables;

pub use self::metadata::MetadataFragments;
pub use self::timetables::ClassWeekQuery;
