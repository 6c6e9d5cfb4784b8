use axum::Json;
use axum::response::{IntoResponse, Response};
use caffeine_errors::{CoreException, Layer};
use http::StatusCode;
use serde::Serialize;

use crate::framework::{FrameworkCode, FrameworkError};
use crate::status_map::StatusCodeMap;

/// Errors that know which HTTP status and body they translate to
///
/// Kept free of axum so it can be implemented and tested without a router.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// JSON body sent to API consumers
    fn body(&self) -> ErrorBody;
}

impl HttpError for CoreException {
    fn status_code(&self) -> StatusCode {
        StatusCodeMap::standard().status_for(self.layer(), self.kind())
    }

    fn body(&self) -> ErrorBody {
        ErrorBody::Exception {
            message: self.message().to_owned(),
            name: self.name().to_owned(),
            source: self.origin().to_owned(),
            layer: self.layer(),
        }
    }
}

impl HttpError for FrameworkError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn body(&self) -> ErrorBody {
        ErrorBody::Framework {
            name: self.name().to_owned(),
            message: self.message().to_owned(),
            code: self.code(),
        }
    }
}

/// Normalized error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    /// Structured exception raised by a caffeine service
    Exception {
        message: String,
        name: String,
        source: String,
        layer: Layer,
    },
    /// Anything else, passed through with the framework code
    Framework {
        name: String,
        message: String,
        code: FrameworkCode,
    },
}

/// Outcome of translating one error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl Translation {
    pub fn of<E: HttpError + ?Sized>(error: &E) -> Self {
        Self {
            status: error.status_code(),
            body: error.body(),
        }
    }
}

impl IntoResponse for Translation {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Translate any error value
///
/// Structured exceptions are looked up in the status table. Everything
/// else keeps its message and is reported as an unknown framework error
/// unless it already is a [`FrameworkError`].
pub fn translate(error: &(dyn std::error::Error + 'static)) -> Translation {
    if let Some(exception) = error.downcast_ref::<CoreException>() {
        return Translation::of(exception);
    }

    if let Some(framework) = error.downcast_ref::<FrameworkError>() {
        return Translation::of(framework);
    }

    Translation::of(&FrameworkError::unknown(error.to_string()))
}
