//! Rutas del visor de rutas

use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::render_controller;
use crate::state::AppState;

/// Crear el router para las rutas del visor
pub fn create_route_display_router() -> Router<AppState> {
    Router::new()
        .route("/render", post(render_controller::render_route))
        .route("/preview", post(render_controller::preview_route))
        .route("/health", get(render_controller::health_check))
}
