//! HTTP API layer

mod routes;
mod handlers;

pub use handlers::{ErrorResponse, WELCOME_MESSAGE};
pub use routes::{create_router, create_router_with_routes, ApiDoc, AppState};
