use tracing::{debug, instrument, warn};

use isitcancelled_cache::{CacheError, CacheStore, keys};
use isitcancelled_core::AppError;

use crate::modules::metadata::model::MetadataFragments;

pub struct MetadataService;

impl MetadataService {
    /// Reads the metadata document and splits it into its fragments.
    ///
    /// The document is fetched and parsed on every call. Any failure maps to
    /// the uniform 404.
    #[instrument(skip(cache), fields(cache.backend = cache.backend()))]
    pub async fn fetch_metadata(cache: &dyn CacheStore) -> Result<MetadataFragments, AppError> {
        let raw = cache
            .get_raw(&keys::metadata::document())
            .await
            .map_err(|e| {
                debug!(error = %e, "Metadata document unavailable");
                AppError::resource_not_found()
            })?;

        MetadataFragments::decompose(&raw).map_err(|e: CacheError| {
            warn!(error = %e, "Cached metadata document is not a JSON object");
            AppError::resource_not_found()
        })
    }
}
