//! Modelos del visor de rutas
//!
//! Datos de la página, coordenadas, marcadores, rutas y resumen del recorrido.

pub mod coordinate;
pub mod delivery_point;
pub mod map_view;
pub mod page_data;
pub mod polyline;
pub mod route;
pub mod trip_summary;

pub use coordinate::*;
pub use delivery_point::*;
pub use map_view::*;
pub use page_data::*;
pub use route::*;
pub use trip_summary::*;
