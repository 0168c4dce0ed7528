//! DTOs de servicios externos
//!
//! Formatos de intercambio con la API de direcciones y con el endpoint
//! de borrado de puntos.

pub mod delete_point_dto;
pub mod directions_dto;
