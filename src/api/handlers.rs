//! API request handlers

use std::any::Any;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::routes::AppState;
use crate::error::{Error, GENERIC_FAILURE};
use crate::types::{validate_name, Item};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Items API! Use /items endpoint to manage items.";

// Request bodies

/// Body accepted by create and update. Any `id` member is ignored.
///
/// Schema only: handlers read the raw JSON so that a mistyped `name` is
/// answered with 400 instead of an extractor rejection.
#[allow(dead_code)]
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemPayload {
    /// New item name, a non-empty string
    pub name: String,
}

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Convert a store error into a response, logging internal faults
fn api_error(err: Error) -> ApiError {
    if err.is_client_error() {
        tracing::debug!("Request rejected: {:?}", err);
    } else {
        tracing::error!("Request failed: {}", err);
    }
    error_body(err.status_code(), err.client_message())
}

/// Body as parsed JSON.
///
/// A request without a JSON content type carries no body (`None`), which
/// validation then rejects as a missing name. A JSON body that cannot be
/// parsed, or whose top level is neither an object nor an array, is a
/// `MalformedBody` fault.
fn request_body(payload: &Result<Json<Value>, JsonRejection>) -> Result<Option<&Value>, Error> {
    match payload {
        Ok(Json(body)) if body.is_object() || body.is_array() => Ok(Some(body)),
        Ok(Json(_)) => Err(Error::MalformedBody(
            "top-level JSON value is not an object or array".into(),
        )),
        Err(JsonRejection::MissingJsonContentType(rejection)) => {
            tracing::debug!("Request body ignored: {}", rejection);
            Ok(None)
        }
        Err(rejection) => Err(Error::MalformedBody(rejection.body_text())),
    }
}

/// Last-resort response for a handler that panicked
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    error_body(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE).into_response()
}

// Handlers

/// Plain-text landing message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// List all items in creation order
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items", body = [Item])
    ),
    tag = "items"
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.list().await)
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Invalid or missing name", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let body = request_body(&payload).map_err(api_error)?;
    let name = validate_name(body).map_err(api_error)?;
    let item = state.store.create(name).await.map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Get a single item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item UUID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = state.store.get(&id).await.map_err(api_error)?;
    Ok(Json(item))
}

/// Rename an existing item
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item UUID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid or missing name", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    // Name is validated before the lookup, so a bad body wins over a bad id
    let body = request_body(&payload).map_err(api_error)?;
    let name = validate_name(body).map_err(api_error)?;
    let item = state.store.update(&id, name).await.map_err(api_error)?;

    Ok(Json(item))
}

/// Delete an item, returning the removed value
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item UUID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = state.store.delete(&id).await.map_err(api_error)?;
    Ok(Json(item))
}
