//! Rutas HTTP

pub mod route_display_routes;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::controllers::render_controller;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/test", get(render_controller::test_endpoint))
        .nest("/api/route-display", route_display_routes::create_route_display_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
