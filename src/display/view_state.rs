//! Estado de la vista del mapa
//!
//! Dueño exclusivo de los marcadores visibles y del overlay de ruta. Todo
//! marcador colocado pasa por aquí, así `clear` puede retirarlos todos antes
//! de cada nuevo render.

use crate::models::coordinate::LatLngBounds;
use crate::models::map_view::{MapOptions, MarkerId, MarkerSpec, OverlayOptions};
use crate::models::route::DirectionsRoute;

use super::map_surface::MapSurface;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub spec: MarkerSpec,
}

pub struct MapViewState<S: MapSurface> {
    surface: S,
    options: MapOptions,
    markers: Vec<PlacedMarker>,
    route: Option<DirectionsRoute>,
}

impl<S: MapSurface> MapViewState<S> {
    /// Crear la vista y enlazar un único overlay de direcciones
    pub fn new(mut surface: S, options: MapOptions) -> Self {
        surface.create_view(&options);
        surface.attach_route_overlay(&OverlayOptions::default());

        Self {
            surface,
            options,
            markers: Vec::new(),
            route: None,
        }
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn route(&self) -> Option<&DirectionsRoute> {
        self.route.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn place_marker(&mut self, spec: MarkerSpec) -> MarkerId {
        let id = self.surface.add_marker(&spec);
        self.markers.push(PlacedMarker { id, spec });
        id
    }

    pub fn fit_bounds(&mut self, bounds: &LatLngBounds) {
        self.surface.fit_bounds(bounds);
    }

    /// Reemplazar la ruta visible
    pub fn show_route(&mut self, route: DirectionsRoute) {
        self.surface.set_route(Some(&route));
        self.route = Some(route);
    }

    /// Quitar marcadores y ruta, dejando la vista creada
    pub fn clear(&mut self) {
        for marker in self.markers.drain(..) {
            self.surface.remove_marker(marker.id);
        }
        if self.route.take().is_some() {
            log::debug!("🧹 Overlay de ruta retirado");
        }
        self.surface.set_route(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::map_surface::RecordingSurface;
    use crate::models::coordinate::{Coordinate, DEFAULT_CENTER};
    use crate::models::map_view::DEFAULT_ZOOM;

    fn view() -> MapViewState<RecordingSurface> {
        MapViewState::new(
            RecordingSurface::default(),
            MapOptions {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
        )
    }

    #[test]
    fn test_new_creates_view_and_overlay() {
        let view = view();
        assert_eq!(view.surface().options().unwrap().zoom, 12);
        assert!(view.surface().overlay().unwrap().suppress_markers);
    }

    #[test]
    fn test_clear_removes_every_marker() {
        let mut view = view();
        view.place_marker(MarkerSpec::origin(DEFAULT_CENTER));
        view.place_marker(MarkerSpec::destination(Coordinate::new(-36.9, -73.1)));
        assert_eq!(view.surface().markers().len(), 2);

        view.clear();

        assert!(view.markers().is_empty());
        assert!(view.surface().markers().is_empty());
        assert!(view.surface().options().is_some());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut view = view();
        view.clear();
        view.clear();
        assert!(view.markers().is_empty());
        assert!(view.route().is_none());
    }
}
