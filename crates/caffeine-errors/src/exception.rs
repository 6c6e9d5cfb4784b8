use std::borrow::Cow;

use thiserror::Error;

use crate::{ExceptionKind, Layer};

/// Structured exception raised by a caffeine service
///
/// Carries the layer it was raised from and the kind name the HTTP status
/// is looked up by. `name` starts out equal to the kind and can be replaced
/// for presentation without affecting the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {message}")]
pub struct CoreException {
    layer: Layer,
    kind: Cow<'static, str>,
    name: String,
    message: String,
    origin: String,
}

impl CoreException {
    /// Raise a known exception kind
    ///
    /// `source` names the component that raised it (a service, adapter or
    /// entity) and is echoed back to API consumers.
    pub fn new<K: ExceptionKind>(kind: K, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::custom(K::LAYER, kind.name(), source, message)
    }

    /// Raise an exception of a kind the shared catalogue does not know about
    ///
    /// Such kinds are never found in the status table and end up as 500.
    pub fn custom(
        layer: Layer,
        kind: impl Into<Cow<'static, str>>,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let kind = kind.into();

        Self {
            layer,
            name: kind.to_string(),
            kind,
            message: message.into(),
            origin: source.into(),
        }
    }

    /// Replace the presented name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub const fn layer(&self) -> Layer {
        self.layer
    }

    /// Kind name the status lookup is keyed on
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Component that raised the exception, exposed as `source` in responses
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApplicationKind, DomainKind};

    #[test]
    fn typed_kind_sets_layer_and_name() {
        let exception = CoreException::new(ApplicationKind::ResourceNotFound, "UserService", "user 42 not found");

        assert_eq!(exception.layer(), Layer::Application);
        assert_eq!(exception.kind(), "ResourceNotFoundException");
        assert_eq!(exception.name(), "ResourceNotFoundException");
        assert_eq!(exception.message(), "user 42 not found");
        assert_eq!(exception.origin(), "UserService");
    }

    #[test]
    fn renaming_keeps_kind() {
        let exception =
            CoreException::new(DomainKind::InvalidProperty, "Email", "missing @").with_name("InvalidEmailException");

        assert_eq!(exception.kind(), "InvalidPropertyException");
        assert_eq!(exception.name(), "InvalidEmailException");
    }

    #[test]
    fn custom_kind_is_kept_verbatim() {
        let exception = CoreException::custom(Layer::Infra, format!("Queue{}Exception", "Full"), "Broker", "full");

        assert_eq!(exception.kind(), "QueueFullException");
        assert_eq!(exception.layer(), Layer::Infra);
    }

    #[test]
    fn display_joins_name_and_message() {
        let exception = CoreException::new(ApplicationKind::Unauthorized, "AuthService", "token expired");
        assert_eq!(exception.to_string(), "UnauthorizedException: token expired");
    }
}
