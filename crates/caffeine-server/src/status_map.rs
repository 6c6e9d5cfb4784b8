use caffeine_error_handler::{Json, StatusCodeMap};

/// List the layer/kind -> status table so clients can see how exceptions
/// surface over HTTP
pub async fn status_map_handler() -> Json<&'static StatusCodeMap> {
    Json(StatusCodeMap::standard())
}
