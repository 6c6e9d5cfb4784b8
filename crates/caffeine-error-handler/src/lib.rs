//! Global API error handler for caffeine services on axum
//!
//! Translates every error that reaches the HTTP boundary into a status code
//! and a JSON body. Structured [`CoreException`]s are classified by layer
//! and kind through the [`StatusCodeMap`]; anything else keeps its name and
//! message and is tagged with the framework's own code.
//!
//! ```ignore
//! use caffeine_error_handler::{ApiError, ErrorHandler, RouterExt};
//!
//! async fn find_user() -> Result<String, ApiError> {
//!     Err(CoreException::new(ApplicationKind::ResourceNotFound, "UserService", "user 42 not found"))?
//! }
//!
//! let app = Router::new()
//!     .route("/users/42", get(find_user))
//!     .with_error_handler(ErrorHandler::new());
//! ```

#![allow(clippy::must_use_candidate)]

mod error;
pub mod extract;
pub mod fallback;
mod framework;
pub mod panic;
mod status_map;
mod translate;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;

pub use caffeine_errors::CoreException;
pub use error::ApiError;
pub use extract::{Json, Path, Query};
pub use framework::{FrameworkCode, FrameworkError};
pub use status_map::{FALLBACK_STATUS, StatusCodeMap};
pub use translate::{ErrorBody, HttpError, Translation, translate};

/// Router plugin that funnels framework failures through the translator
///
/// Install it after every route has been added: axum only applies layers
/// and fallbacks to what the router already holds.
#[derive(Debug, Clone, Copy)]
pub struct ErrorHandler {
    catch_panics: bool,
}

impl Default for ErrorHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorHandler {
    pub const fn new() -> Self {
        Self { catch_panics: true }
    }

    /// Convert handler panics into 500 responses (enabled by default)
    #[must_use]
    pub const fn catch_panics(mut self, enabled: bool) -> Self {
        self.catch_panics = enabled;
        self
    }

    /// Register fallbacks and layers on `router`
    pub fn install<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let router = router
            .fallback(fallback::not_found)
            .method_not_allowed_fallback(fallback::method_not_allowed);

        if self.catch_panics {
            router.layer(CatchPanicLayer::custom(panic::panic_response))
        } else {
            router
        }
    }
}

/// Extension for installing the error handler fluently
pub trait RouterExt {
    #[must_use]
    fn with_error_handler(self, handler: ErrorHandler) -> Self;
}

impl<S> RouterExt for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_error_handler(self, handler: ErrorHandler) -> Self {
        handler.install(self)
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::routing::get;
    use caffeine_errors::{DomainKind, Layer};
    use http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    async fn invalid_email() -> Result<&'static str, ApiError> {
        Err(CoreException::new(DomainKind::InvalidProperty, "Email", "missing @"))?
    }

    async fn unmapped() -> Result<&'static str, ApiError> {
        Err(CoreException::custom(Layer::Domain, "MysteryException", "Oracle", "unclear"))?
    }

    #[allow(clippy::unused_async)]
    async fn explode() -> &'static str {
        panic!("kaboom")
    }

    fn app(handler: ErrorHandler) -> Router {
        Router::new()
            .route("/email", get(invalid_email))
            .route("/mystery", get(unmapped))
            .route("/explode", get(explode))
            .with_error_handler(handler)
    }

    async fn call(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn get_request(path: &str) -> Request<Body> {
        Request::get(path).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn handler_exception_is_translated() {
        let (status, body) = call(app(ErrorHandler::new()), get_request("/email")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "message": "missing @",
                "name": "InvalidPropertyException",
                "source": "Email",
                "layer": "domain",
            })
        );
    }

    #[tokio::test]
    async fn unmapped_exception_is_500() {
        let (status, body) = call(app(ErrorHandler::new()), get_request("/mystery")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["name"], "MysteryException");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let (status, body) = call(app(ErrorHandler::new()), get_request("/nowhere")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "name": "NotFoundError",
                "message": "no route matches GET /nowhere",
                "code": "NOT_FOUND",
            })
        );
    }

    #[tokio::test]
    async fn wrong_method_is_method_not_allowed() {
        let request = Request::delete("/email").body(Body::empty()).unwrap();
        let (status, body) = call(app(ErrorHandler::new()), request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
    }

    #[tokio::test]
    async fn panic_is_caught() {
        let (status, body) = call(app(ErrorHandler::new()), get_request("/explode")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    }
}
