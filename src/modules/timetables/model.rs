use serde::Deserialize;
use utoipa::IntoParams;

/// Name of the required query parameter on the weekly record route.
pub const CLASS_ID_PARAM: &str = "class_id";

/// Message returned when `class_id` is absent.
pub const CLASS_ID_REQUIRED: &str = "class_id is required";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClassWeekQuery {
    /// Class to look up. When given more than once, the first value wins.
    pub class_id: Option<String>,
}

impl ClassWeekQuery {
    /// Builds the query from raw key/value pairs in request order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let class_id = pairs
            .into_iter()
            .find(|(key, _)| key == CLASS_ID_PARAM)
            .map(|(_, value)| value);

        Self { class_id }
    }
}
