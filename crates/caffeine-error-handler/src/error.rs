use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use caffeine_errors::CoreException;
use thiserror::Error;

use crate::framework::{FrameworkCode, FrameworkError};
use crate::translate::Translation;

/// Error type for handlers behind the caffeine error handler
///
/// Handlers return `Result<T, ApiError>`; `?` accepts structured
/// exceptions, framework errors, extractor rejections and `anyhow` errors.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Exception(#[from] CoreException),

    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl ApiError {
    pub fn translate(&self) -> Translation {
        match self {
            Self::Exception(exception) => Translation::of(exception),
            Self::Framework(error) => Translation::of(error),
        }
    }

    fn log(&self, translation: &Translation) {
        let status = translation.status.as_u16();

        match self {
            Self::Exception(exception) if translation.status.is_server_error() => tracing::error!(
                status,
                layer = %exception.layer(),
                kind = exception.kind(),
                source = exception.origin(),
                detail = exception.message(),
                "request failed"
            ),
            Self::Exception(exception) => tracing::warn!(
                status,
                layer = %exception.layer(),
                kind = exception.kind(),
                source = exception.origin(),
                detail = exception.message(),
                "request rejected"
            ),
            Self::Framework(error) if translation.status.is_server_error() => tracing::error!(
                status,
                code = %error.code(),
                name = error.name(),
                detail = error.message(),
                "request failed"
            ),
            Self::Framework(error) => tracing::debug!(
                status,
                code = %error.code(),
                name = error.name(),
                detail = error.message(),
                "request rejected"
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let translation = self.translate();
        self.log(&translation);
        translation.into_response()
    }
}

/// Recovers a structured exception wrapped in an `anyhow` chain
impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<CoreException>() {
            Ok(exception) => Self::Exception(exception),
            Err(error) => Self::Framework(FrameworkError::unknown(format!("{error:#}"))),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ApiError {
    fn from(error: Box<dyn std::error::Error + Send + Sync>) -> Self {
        match error.downcast::<CoreException>() {
            Ok(exception) => Self::Exception(*exception),
            Err(error) => match error.downcast::<FrameworkError>() {
                Ok(framework) => Self::Framework(*framework),
                Err(error) => Self::Framework(FrameworkError::unknown(error.to_string())),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let code = match rejection {
            JsonRejection::JsonDataError(_) => FrameworkCode::Validation,
            _ => FrameworkCode::Parse,
        };

        FrameworkError::new(code, rejection.body_text())
            .with_status(rejection.status())
            .into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        FrameworkError::new(FrameworkCode::Validation, rejection.body_text())
            .with_status(rejection.status())
            .into()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        FrameworkError::new(FrameworkCode::Validation, rejection.body_text())
            .with_status(rejection.status())
            .into()
    }
}
