//! Exception kinds known to every caffeine service, grouped by layer
//!
//! The rendered name of a kind is what the status map is keyed on, so the
//! names here must stay in sync with the HTTP status table.

use strum::{EnumIter, IntoStaticStr};

use crate::Layer;

/// A typed exception kind bound to a single layer
pub trait ExceptionKind: Copy + Into<&'static str> {
    /// Layer every exception of this kind is raised from
    const LAYER: Layer;

    /// Kind name used as the lookup key
    fn name(self) -> &'static str {
        self.into()
    }
}

/// Exceptions raised by entities and domain rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
pub enum DomainKind {
    #[strum(to_string = "InvalidDomainDataException")]
    InvalidDomainData,
    #[strum(to_string = "InvalidPropertyException")]
    InvalidProperty,
    #[strum(to_string = "OperationFailedException")]
    OperationFailed,
}

impl ExceptionKind for DomainKind {
    const LAYER: Layer = Layer::Domain;
}

/// Exceptions raised by use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
pub enum ApplicationKind {
    #[strum(to_string = "UnauthorizedException")]
    Unauthorized,
    #[strum(to_string = "BadRequestException")]
    BadRequest,
    #[strum(to_string = "InvalidJWTException")]
    InvalidJwt,
    #[strum(to_string = "InvalidOperationException")]
    InvalidOperation,
    #[strum(to_string = "ResourceAlreadyExistsException")]
    ResourceAlreadyExists,
    #[strum(to_string = "ResourceNotFoundException")]
    ResourceNotFound,
    #[strum(to_string = "UnableToSignPayloadException")]
    UnableToSignPayload,
}

impl ExceptionKind for ApplicationKind {
    const LAYER: Layer = Layer::Application;
}

/// Exceptions raised by adapters talking to the outside world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
pub enum InfraKind {
    #[strum(to_string = "ConflictException")]
    Conflict,
    #[strum(to_string = "DatabaseUnavailableException")]
    DatabaseUnavailable,
    #[strum(to_string = "ForeignDependencyConstraintException")]
    ForeignDependencyConstraint,
    #[strum(to_string = "OperationNotAllowedException")]
    OperationNotAllowed,
    #[strum(to_string = "ResourceNotFoundException")]
    ResourceNotFound,
    #[strum(to_string = "UnexpectedCacheValueException")]
    UnexpectedCacheValue,
    #[strum(to_string = "MissingPluginDependencyException")]
    MissingPluginDependency,
    #[strum(to_string = "InvalidEnvironmentException")]
    InvalidEnvironment,
}

impl ExceptionKind for InfraKind {
    const LAYER: Layer = Layer::Infra;
}

/// Broken invariants inside the framework itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumIter)]
pub enum InternalKind {
    #[strum(to_string = "InvalidEntityData")]
    InvalidEntityData,
    #[strum(to_string = "InvalidObjectValueException")]
    InvalidObjectValue,
    #[strum(to_string = "UnknownException")]
    Unknown,
}

impl ExceptionKind for InternalKind {
    const LAYER: Layer = Layer::Internal;
}
