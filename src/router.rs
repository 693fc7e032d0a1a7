use axum::{
    routing::{delete, get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::handlers::{self, customer};
use crate::state::AppState;

/// Full application router with its middleware stack
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(customer_routes())
        .fallback(handlers::fallback)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
        // Global middleware, outermost first
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}

fn customer_routes() -> Router<AppState> {
    // OPTIONS never reaches these routes: CorsLayer answers it
    Router::new()
        .route("/api/customer", get(customer::list))
        .route("/api/customer/:id", get(customer::get).put(customer::update))
        .route("/api/newcustomer", post(customer::create))
        .route("/api/deletecustomer/:id", delete(customer::delete))
        .route("/api/searchcustomer", post(customer::search))
}
