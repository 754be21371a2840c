//! # Routes
//!
//! Route registration and the shared middleware stack.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod health;
pub mod inquiry;
pub mod price;
pub mod sales;

/// Build a router with all routes registered (no middleware, no state).
pub fn build_router() -> Router<AppState> {
    Router::new()
        // Health - public probe
        .merge(health::router())
        // Lead routing - the core endpoint
        .merge(sales::router())
        // Price quotes
        .merge(price::router())
        // Inquiry intake
        .merge(inquiry::router())
}

/// Build the fully configured application with middleware and state.
pub fn build_app(state: AppState) -> Router {
    build_router()
        // CORS - the storefront frontend calls from the browser
        .layer(CorsLayer::permissive())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
