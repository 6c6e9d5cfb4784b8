//! Layered exception model shared by caffeine services
//!
//! Every structured exception records the architectural layer it was
//! raised from and a kind name. The API error handler turns the pair into
//! an HTTP status.

#![allow(clippy::must_use_candidate)]

mod exception;
mod kind;
mod layer;

pub use exception::CoreException;
pub use kind::{ApplicationKind, DomainKind, ExceptionKind, InfraKind, InternalKind};
pub use layer::Layer;
