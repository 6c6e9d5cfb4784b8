use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::framework::{FrameworkCode, FrameworkError};
use crate::translate::Translation;

/// Turn a caught handler panic into an `INTERNAL_SERVER_ERROR` response
///
/// The panic payload is logged but never sent to the client.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    tracing::error!(panic = detail, "handler panicked");

    let error = FrameworkError::new(FrameworkCode::InternalServerError, "internal server error");
    Translation::of(&error).into_response()
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::{Value, json};

    use super::*;

    #[tokio::test]
    async fn payload_is_not_exposed() {
        let response = panic_response(Box::new(String::from("db password is hunter2")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "InternalServerError",
                "message": "internal server error",
                "code": "INTERNAL_SERVER_ERROR",
            })
        );
    }

    #[test]
    fn non_string_payload_is_handled() {
        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
