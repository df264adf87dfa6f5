//! REST API router

use crate::{middleware::RequestIdLayer, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/register", post(super::handlers::auth::register))
        .route("/login", post(super::handlers::auth::login))
        .route("/state/:user_email", get(super::handlers::state::get_state))
        .route("/state/:user_email/transition", post(super::handlers::state::transition))
        .route("/health", get(super::handlers::health::health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(RequestIdLayer))
        .with_state(app_state)
}
