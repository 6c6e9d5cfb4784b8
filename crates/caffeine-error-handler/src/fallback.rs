use http::{Method, Uri};

use crate::ApiError;
use crate::framework::{FrameworkCode, FrameworkError};

/// Handler for requests no route matched
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    FrameworkError::new(FrameworkCode::NotFound, format!("no route matches {method} {}", uri.path())).into()
}

/// Handler for requests whose path matched but whose method did not
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    FrameworkError::new(
        FrameworkCode::MethodNotAllowed,
        format!("method {method} is not allowed on {}", uri.path()),
    )
    .into()
}
