//! Controlador del mapa de rutas
//!
//! Inicializa la vista, dibuja origen, puntos de entrega y destino, y pide
//! la ruta por calles al servicio de direcciones. El orden de visita viene
//! decidido aguas arriba; aquí sólo se respeta.

use serde::Serialize;
use std::sync::Arc;

use crate::models::coordinate::{Coordinate, LatLngBounds, DEFAULT_CENTER};
use crate::models::delivery_point::sort_for_display;
use crate::models::map_view::{MapOptions, MarkerSpec, MarkerKind, DEFAULT_ZOOM};
use crate::models::page_data::PageData;
use crate::models::route::{RouteClosure, RouteRequest};
use crate::services::routing_service::RoutingService;

use super::map_surface::MapSurface;
use super::view_state::MapViewState;

/// Parámetros de despliegue del mapa
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub default_center: Coordinate,
    pub zoom: u8,
    pub closure: RouteClosure,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            closure: RouteClosure::default(),
        }
    }
}

/// Resultado de la petición de ruta
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Menos de 2 puntos en el camino
    NotRequested,
    /// No hay servicio de direcciones configurado
    Skipped,
    Drawn,
    Failed { reason: String },
}

/// Lo que produjo un render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderReport {
    pub markers_placed: usize,
    pub path: Vec<Coordinate>,
    pub route: RouteOutcome,
}

/// Marcadores y camino calculados a partir de los datos de la página
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub markers: Vec<MarkerSpec>,
    pub path: Vec<Coordinate>,
}

impl RenderPlan {
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::enclosing(self.markers.iter().map(|m| &m.position))
    }
}

/// Centro inicial: origen → primer punto de entrega → centro por defecto
pub fn choose_center(page: &PageData, default_center: Coordinate) -> Coordinate {
    if let Some(origin) = page.usable_origin() {
        return origin;
    }
    match page.delivery_points.first().map(|p| p.position()) {
        Some(first) if first.is_valid() => first,
        _ => default_center,
    }
}

/// Calcular marcadores y camino: ORIGEN → puntos → DESTINO (u ORIGEN)
pub fn plan_render(page: &PageData, closure: RouteClosure) -> RenderPlan {
    let mut markers = Vec::new();
    let mut path = Vec::new();

    let origin = page.usable_origin();
    if let Some(origin) = origin {
        markers.push(MarkerSpec::origin(origin));
        path.push(origin);
    }

    for (index, point) in sort_for_display(&page.delivery_points).into_iter().enumerate() {
        let label = match point.visit_order {
            Some(order) => order.to_string(),
            None => (index + 1).to_string(),
        };
        let position = point.position();

        markers.push(MarkerSpec {
            kind: MarkerKind::DeliveryPoint,
            position,
            label,
            title: point.marker_title(),
        });
        path.push(position);
    }

    if let Some(destination) = page.usable_destination() {
        markers.push(MarkerSpec::destination(destination));
        path.push(destination);
    } else if let (RouteClosure::ReturnToOrigin, Some(origin)) = (closure, origin) {
        if !page.delivery_points.is_empty() {
            // vuelta al origen, sin marcador extra
            path.push(origin);
        }
    }

    RenderPlan { markers, path }
}

pub struct RouteDisplayController<S: MapSurface> {
    page: PageData,
    settings: DisplaySettings,
    view: MapViewState<S>,
    routing: Option<Arc<dyn RoutingService>>,
}

impl<S: MapSurface> RouteDisplayController<S> {
    /// Crear la vista del mapa sin dibujar todavía
    pub fn new(
        page: PageData,
        settings: DisplaySettings,
        surface: S,
        routing: Option<Arc<dyn RoutingService>>,
    ) -> Self {
        let center = choose_center(&page, settings.default_center);
        log::info!("🗺️ initMap: centro ({}, {}), zoom {}", center.lat, center.lng, settings.zoom);

        let view = MapViewState::new(
            surface,
            MapOptions {
                center,
                zoom: settings.zoom,
            },
        );

        Self {
            page,
            settings,
            view,
            routing,
        }
    }

    /// Crear la vista y hacer el primer render
    pub async fn init_map(
        page: PageData,
        settings: DisplaySettings,
        surface: S,
        routing: Option<Arc<dyn RoutingService>>,
    ) -> (Self, RenderReport) {
        let mut controller = Self::new(page, settings, surface, routing);
        let report = controller.render().await;
        (controller, report)
    }

    pub fn page(&self) -> &PageData {
        &self.page
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    pub fn view(&self) -> &MapViewState<S> {
        &self.view
    }

    /// Reemplazar los datos de la página; el siguiente render los usa
    pub fn set_page(&mut self, page: PageData) {
        self.page = page;
    }

    /// Limpiar y colocar los marcadores; devuelve el camino a recorrer
    pub fn render_markers(&mut self) -> Vec<Coordinate> {
        self.clear_map();

        let plan = plan_render(&self.page, self.settings.closure);
        let bounds = plan.bounds();

        for marker in plan.markers {
            self.view.place_marker(marker);
        }

        if let Some(bounds) = bounds {
            self.view.fit_bounds(&bounds);
        }

        log::info!(
            "📍 {} marcadores colocados, camino de {} puntos",
            self.view.markers().len(),
            plan.path.len()
        );
        plan.path
    }

    /// Dibujar marcadores y pedir la ruta si hay al menos 2 puntos
    pub async fn render(&mut self) -> RenderReport {
        let path = self.render_markers();
        let route = self.draw_route(&path).await;

        RenderReport {
            markers_placed: self.view.markers().len(),
            path,
            route,
        }
    }

    /// Pedir la ruta para `path` y dibujarla
    ///
    /// Un fallo del servicio deja los marcadores visibles y no dibuja ruta.
    pub async fn draw_route(&mut self, path: &[Coordinate]) -> RouteOutcome {
        let Some(request) = RouteRequest::from_path(path) else {
            return RouteOutcome::NotRequested;
        };

        let Some(routing) = self.routing.clone() else {
            log::warn!("⚠️ Sin servicio de direcciones, sólo se muestran marcadores");
            return RouteOutcome::Skipped;
        };

        match routing.route(&request).await {
            Ok(route) => {
                log::info!("✅ Directions OK: {} tramos", route.legs.len());
                self.view.show_route(route);
                RouteOutcome::Drawn
            }
            Err(e) => {
                log::error!("❌ Error en Directions API: {}", e);
                RouteOutcome::Failed { reason: e.to_string() }
            }
        }
    }

    /// Quitar marcadores y ruta, dejando el mapa creado
    pub fn clear_map(&mut self) {
        self.view.clear();
    }
}
