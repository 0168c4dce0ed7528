//! Controlador HTTP del visor de rutas
//!
//! Recibe los datos de la página, ejecuta el render contra una superficie
//! en memoria y devuelve la escena resultante.

use axum::{extract::State, response::Json};
use serde_json::json;

use crate::display::controller::RouteDisplayController;
use crate::display::map_surface::RecordingSurface;
use crate::display::scene::RenderedScene;
use crate::models::page_data::PageData;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Render completo: marcadores y ruta por calles
pub async fn render_route(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<RenderedScene>, AppError> {
    let routing = state.routing.clone().ok_or_else(|| {
        AppError::ServiceUnavailable("GOOGLE_MAPS_API_KEY no configurada".to_string())
    })?;

    let page = PageData::from_page_json(&body);
    log::info!("🎯 Render solicitado para {} puntos de entrega", page.delivery_points.len());

    let (controller, report) = RouteDisplayController::init_map(
        page,
        state.config.display_settings(),
        RecordingSurface::default(),
        Some(routing),
    )
    .await;

    Ok(Json(RenderedScene::capture(
        controller.view(),
        &report,
        &state.config.fuel_settings(),
    )))
}

/// Sólo marcadores y el request de ruta que se enviaría
pub async fn preview_route(State(state): State<AppState>, body: String) -> Json<RenderedScene> {
    let page = PageData::from_page_json(&body);
    log::info!("👀 Preview solicitado para {} puntos de entrega", page.delivery_points.len());

    let (controller, report) = RouteDisplayController::init_map(
        page,
        state.config.display_settings(),
        RecordingSurface::default(),
        None,
    )
    .await;

    Json(RenderedScene::capture(
        controller.view(),
        &report,
        &state.config.fuel_settings(),
    ))
}

/// Health check del visor
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "route_display",
        "directions_configured": state.routing.is_some(),
        "route_closure": state.config.route_closure,
    }))
}

/// Endpoint de prueba simple
pub async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Visor de rutas funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
