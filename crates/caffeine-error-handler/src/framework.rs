use http::StatusCode;
use serde::Serialize;
use strum::Display;
use thiserror::Error;

/// Machine code for failures raised by the host framework rather than by
/// a caffeine service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameworkCode {
    /// No route matched the request path
    NotFound,
    /// The path matched but not the method
    MethodNotAllowed,
    /// Request body could not be parsed
    Parse,
    /// Request data parsed but did not fit the expected shape
    Validation,
    /// A handler panicked
    InternalServerError,
    /// Anything else
    Unknown,
}

impl FrameworkCode {
    /// Status the host assigns when nothing more specific is known
    pub const fn default_status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Parse => StatusCode::BAD_REQUEST,
            Self::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InternalServerError | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error name reported when the failure carries none of its own
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::NotFound => "NotFoundError",
            Self::MethodNotAllowed => "MethodNotAllowedError",
            Self::Parse => "ParseError",
            Self::Validation => "ValidationError",
            Self::InternalServerError => "InternalServerError",
            Self::Unknown => "Error",
        }
    }
}

/// Unstructured error: a name and a message plus whatever code and status
/// the host framework attached
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {message}")]
pub struct FrameworkError {
    code: FrameworkCode,
    status: StatusCode,
    name: String,
    message: String,
}

impl FrameworkError {
    pub fn new(code: FrameworkCode, message: impl Into<String>) -> Self {
        Self {
            code,
            status: code.default_status(),
            name: code.default_name().to_owned(),
            message: message.into(),
        }
    }

    /// Shorthand for an opaque error with no framework classification
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(FrameworkCode::Unknown, message)
    }

    /// Keep the status the framework itself chose
    #[must_use]
    pub const fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub const fn code(&self) -> FrameworkCode {
        self.code
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Name as reported, `Error` when blank
    pub fn name(&self) -> &str {
        if self.name.is_empty() { "Error" } else { &self.name }
    }

    /// Message as reported, the status reason phrase when blank
    pub fn message(&self) -> &str {
        if self.message.is_empty() {
            self.status.canonical_reason().unwrap_or("Unknown Error")
        } else {
            &self.message
        }
    }
}
