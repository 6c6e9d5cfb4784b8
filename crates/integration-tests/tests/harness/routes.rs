//! Demo application routes raising every flavour of error

use std::str::FromStr;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use caffeine_error_handler::{ApiError, CoreException, FrameworkCode, FrameworkError, Json, Path};
use caffeine_errors::{ApplicationKind, Layer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct NewUser {
    pub email: String,
    pub age: u8,
}

/// Router with the demo handlers mounted
pub fn app() -> Router {
    Router::new()
        .route("/raise/{layer}/{kind}", get(raise))
        .route("/users/{id}", get(find_user))
        .route("/users", post(create_user))
        .route("/opaque", get(opaque))
        .route("/panic", get(panicking))
}

/// Raise an arbitrary layer/kind pair
async fn raise(Path((layer, kind)): Path<(String, String)>) -> Result<(), ApiError> {
    let layer = Layer::from_str(&layer)
        .map_err(|_| FrameworkError::new(FrameworkCode::Validation, format!("unknown layer `{layer}`")))?;

    Err(CoreException::custom(layer, kind, "DemoController", "raised on request"))?
}

async fn find_user(Path(id): Path<u64>) -> Result<String, ApiError> {
    if id == 1 {
        return Ok("ada".to_owned());
    }

    Err(CoreException::new(
        ApplicationKind::ResourceNotFound,
        "FindUserUseCase",
        format!("user {id} not found"),
    ))?
}

async fn create_user(Json(user): Json<NewUser>) -> Result<Json<NewUser>, ApiError> {
    if user.email == "taken@example.com" {
        return Err(CoreException::new(
            ApplicationKind::ResourceAlreadyExists,
            "CreateUserUseCase",
            "email already registered",
        )
        .into());
    }

    Ok(Json(user))
}

async fn opaque() -> Result<(), ApiError> {
    let _port: u16 = "not-a-port".parse().context("reading upstream port")?;
    Ok(())
}

#[allow(clippy::unused_async)]
async fn panicking() -> &'static str {
    panic!("handler exploded")
}
