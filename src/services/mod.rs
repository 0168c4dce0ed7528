//! Services module
//!
//! Lógica de las operaciones que hablan con servicios externos: el cálculo
//! de rutas y el borrado de puntos de entrega.

pub mod delete_point_service;
pub mod routing_service;

pub use delete_point_service::*;
pub use routing_service::*;
