use tracing::{debug, instrument};

use isitcancelled_cache::{CacheStore, keys};
use isitcancelled_core::AppError;

pub struct TimetableService;

impl TimetableService {
    /// Reads one class's weekly record, returned exactly as stored.
    #[instrument(skip(cache), fields(cache.backend = cache.backend()))]
    pub async fn get_class_week(
        cache: &dyn CacheStore,
        semester_id: &str,
        week_id: &str,
        class_id: &str,
    ) -> Result<String, AppError> {
        let key = keys::timetables::class_week(semester_id, week_id, class_id);

        cache.get_raw(&key).await.map_err(|e| {
            debug!(cache.key = %key, error = %e, "Weekly class record unavailable");
            AppError::resource_not_found()
        })
    }
}
