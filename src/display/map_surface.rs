//! Superficie del mapa
//!
//! Operaciones de bajo nivel que el SDK de mapas ofrece (crear la vista,
//! colocar y quitar marcadores, ajustar el viewport, dibujar la ruta).
//! `RecordingSurface` es una implementación en memoria que registra la
//! escena; la usa el endpoint HTTP para devolver lo que habría en pantalla.

use std::collections::BTreeMap;

use crate::models::coordinate::LatLngBounds;
use crate::models::map_view::{MapOptions, MarkerId, MarkerSpec, OverlayOptions};
use crate::models::route::DirectionsRoute;

pub trait MapSurface: Send {
    /// Crear la vista del mapa en el contenedor
    fn create_view(&mut self, options: &MapOptions);

    /// Enlazar el overlay de direcciones a la vista
    fn attach_route_overlay(&mut self, options: &OverlayOptions);

    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerId;

    fn remove_marker(&mut self, id: MarkerId);

    fn fit_bounds(&mut self, bounds: &LatLngBounds);

    /// Mostrar una ruta en el overlay, o vaciarlo con `None`
    fn set_route(&mut self, route: Option<&DirectionsRoute>);
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    options: Option<MapOptions>,
    overlay: Option<OverlayOptions>,
    markers: BTreeMap<MarkerId, MarkerSpec>,
    next_marker_id: u64,
    fitted_bounds: Option<LatLngBounds>,
    route: Option<DirectionsRoute>,
}

impl RecordingSurface {
    pub fn options(&self) -> Option<&MapOptions> {
        self.options.as_ref()
    }

    pub fn overlay(&self) -> Option<&OverlayOptions> {
        self.overlay.as_ref()
    }

    /// Marcadores visibles en orden de colocación
    pub fn markers(&self) -> Vec<&MarkerSpec> {
        self.markers.values().collect()
    }

    pub fn fitted_bounds(&self) -> Option<&LatLngBounds> {
        self.fitted_bounds.as_ref()
    }

    pub fn route(&self) -> Option<&DirectionsRoute> {
        self.route.as_ref()
    }
}

impl MapSurface for RecordingSurface {
    fn create_view(&mut self, options: &MapOptions) {
        self.options = Some(*options);
    }

    fn attach_route_overlay(&mut self, options: &OverlayOptions) {
        self.overlay = Some(*options);
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerId {
        let id = MarkerId(self.next_marker_id);
        self.next_marker_id += 1;
        self.markers.insert(id, marker.clone());
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.remove(&id);
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.fitted_bounds = Some(*bounds);
    }

    fn set_route(&mut self, route: Option<&DirectionsRoute>) {
        self.route = route.cloned();
    }
}
