//! Escena renderizada
//!
//! Foto de lo que hay en el mapa tras un render: vista, marcadores, ruta y
//! resumen del recorrido. Es lo que devuelve el endpoint HTTP.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::coordinate::LatLngBounds;
use crate::models::map_view::{MapOptions, MarkerSpec};
use crate::models::route::{DirectionsRoute, RouteRequest};
use crate::models::trip_summary::{FuelSettings, TripSummary};

use super::controller::{RenderReport, RouteOutcome};
use super::map_surface::RecordingSurface;
use super::view_state::MapViewState;

#[derive(Debug, Clone, Serialize)]
pub struct RenderedScene {
    pub view: MapOptions,
    pub markers: Vec<MarkerSpec>,
    pub bounds: Option<LatLngBounds>,
    pub route_request: Option<RouteRequest>,
    pub route_status: RouteOutcome,
    pub route: Option<DirectionsRoute>,
    pub trip_summary: Option<TripSummary>,
    pub rendered_at: DateTime<Utc>,
}

impl RenderedScene {
    pub fn capture(
        view: &MapViewState<RecordingSurface>,
        report: &RenderReport,
        fuel: &FuelSettings,
    ) -> Self {
        let surface = view.surface();
        let route = surface.route().cloned();
        let trip_summary = route.as_ref().map(|r| TripSummary::from_route(r, fuel));

        Self {
            view: *view.options(),
            markers: surface.markers().into_iter().cloned().collect(),
            bounds: surface.fitted_bounds().copied(),
            route_request: RouteRequest::from_path(&report.path),
            route_status: report.route.clone(),
            route,
            trip_summary,
            rendered_at: Utc::now(),
        }
    }
}
