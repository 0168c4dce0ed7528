//! Servicio de cálculo de rutas
//!
//! Interfaz hacia el proveedor externo de direcciones. El controlador del
//! mapa sólo conoce este trait, lo que permite sustituir el proveedor real
//! por uno simulado en los tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::route::{DirectionsRoute, RouteRequest};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Directions status {status}: {message}")]
    Status { status: String, message: String },

    #[error("Directions transport error: {0}")]
    Transport(String),

    #[error("Directions decode error: {0}")]
    Decode(String),

    #[error("Directions returned no routes")]
    NoRoute,
}

impl From<reqwest::Error> for RoutingError {
    fn from(e: reqwest::Error) -> Self {
        RoutingError::Transport(e.to_string())
    }
}

#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Calcular una ruta en auto que respete el orden de `request`
    async fn route(&self, request: &RouteRequest) -> Result<DirectionsRoute, RoutingError>;
}
