//! API route definitions

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, ErrorResponse, HealthResponse, ItemPayload};
use crate::config::Config;
use crate::store::ItemStore;
use crate::types::Item;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "CRUD operations over an in-memory item collection"
    ),
    tags(
        (name = "items", description = "Item management"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::welcome,
        handlers::health,
        handlers::list_items,
        handlers::create_item,
        handlers::get_item,
        handlers::update_item,
        handlers::delete_item,
    ),
    components(schemas(Item, ItemPayload, HealthResponse, ErrorResponse))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub store: ItemStore,
}

impl AppState {
    pub fn new(store: ItemStore) -> Self {
        Self { store }
    }
}

/// Create the API router
pub fn create_router(state: AppState, config: &Config) -> Router {
    create_router_with_routes(state, config, Router::new())
}

/// Create the API router with additional routes mounted behind the same
/// layers as the item endpoints
pub fn create_router_with_routes(
    state: AppState,
    config: &Config,
    extra: Router<AppState>,
) -> Router {
    let router = Router::new()
        .route("/", get(handlers::welcome))

        // Items CRUD
        .route("/items", get(handlers::list_items).post(handlers::create_item))
        .route(
            "/items/{id}",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )

        // Health
        .route("/health", get(handlers::health))

        // OpenAPI spec and Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))

        .merge(extra)

        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .with_state(state);

    let router = if config.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
