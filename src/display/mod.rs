//! Visor de rutas
//!
//! Núcleo del mapa: superficie, estado de la vista, controlador de render,
//! selección de dirección personalizada y escena renderizada.

pub mod controller;
pub mod custom_address;
pub mod map_surface;
pub mod scene;
pub mod view_state;

pub use controller::{DisplaySettings, RenderReport, RouteDisplayController, RouteOutcome};
pub use map_surface::{MapSurface, RecordingSurface};
pub use scene::RenderedScene;
pub use view_state::MapViewState;
