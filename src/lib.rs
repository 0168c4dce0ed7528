//! Visor de rutas de reparto
//!
//! Dibuja origen, puntos de entrega y destino en un mapa, pide la ruta por
//! calles a un servicio de direcciones externo respetando el orden de visita
//! ya calculado, y ofrece el borrado de puntos y la selección de dirección
//! personalizada de la página.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod display;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

// Puntos de entrada que la página invoca
pub use display::controller::RouteDisplayController;
pub use display::custom_address::{toggle_destination_custom, toggle_origin_custom};
pub use services::delete_point_service::DeletePointService;
