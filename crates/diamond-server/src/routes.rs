//! Route definitions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;

/// Create the API router.
///
/// The service is stateless; the multiplier tables live in `diamond-core`
/// as process-wide constants, so there is no shared application state.
pub fn create_router() -> Router {
    Router::new()
        // Welcome
        .route("/", get(handlers::root))
        // Health
        .route("/health", get(handlers::health))
        // Pricing
        .route("/calculate", post(handlers::calculate_prices))
}
