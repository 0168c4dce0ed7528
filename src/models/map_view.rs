//! Tipos del mapa: opciones de la vista, marcadores y overlay de ruta.

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// Zoom fijo de la vista inicial
pub const DEFAULT_ZOOM: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub center: Coordinate,
    pub zoom: u8,
}

/// Opciones del overlay de direcciones
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayOptions {
    /// Usamos nuestros propios marcadores
    pub suppress_markers: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self { suppress_markers: true }
    }
}

/// Qué representa un marcador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Origin,
    DeliveryPoint,
    Destination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub kind: MarkerKind,
    pub position: Coordinate,
    pub label: String,
    pub title: String,
}

impl MarkerSpec {
    pub fn origin(position: Coordinate) -> Self {
        Self {
            kind: MarkerKind::Origin,
            position,
            label: "O".to_string(),
            title: "Origen del recorrido".to_string(),
        }
    }

    pub fn destination(position: Coordinate) -> Self {
        Self {
            kind: MarkerKind::Destination,
            position,
            label: "D".to_string(),
            title: "Destino del recorrido".to_string(),
        }
    }
}

/// Identificador opaco que entrega la superficie del mapa al colocar un marcador
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub u64);
