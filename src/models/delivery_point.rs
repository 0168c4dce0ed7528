//! Modelo de punto de entrega
//!
//! Registro de solo lectura inyectado por la página. Los nombres en el
//! JSON son los que escribe el backend de la página (`nombre`, `latitud`...).

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPoint {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "direccion", default)]
    pub address: String,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
    /// Orden de visita calculado aguas arriba; `None` = sin secuenciar
    #[serde(rename = "orden_optimo", default)]
    pub visit_order: Option<i32>,
}

impl DeliveryPoint {
    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Texto del tooltip del marcador
    pub fn marker_title(&self) -> String {
        format!("{} - {}", self.name, self.address)
    }
}

/// Ordenar puntos para dibujar
///
/// Si algún punto trae `visit_order`, orden ascendente con los `None` al
/// final (orden estable); si ninguno lo trae, se respeta el orden de entrada.
pub fn sort_for_display(points: &[DeliveryPoint]) -> Vec<&DeliveryPoint> {
    let mut sorted: Vec<&DeliveryPoint> = points.iter().collect();
    if points.iter().any(|p| p.visit_order.is_some()) {
        sorted.sort_by_key(|p| (p.visit_order.is_none(), p.visit_order));
    }
    sorted
}
