//! Datos inyectados por la página
//!
//! Configuración tipada que reemplaza las variables globales de la página
//! (`origen_coords`, `destino_coords`, `puntos_entrega_data`). Todo campo es
//! opcional y los datos mal formados se degradan a valores por defecto.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coordinate::Coordinate;
use super::delivery_point::DeliveryPoint;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(rename = "origen", default)]
    pub origin: Option<Coordinate>,
    #[serde(rename = "destino", default)]
    pub destination: Option<Coordinate>,
    #[serde(rename = "puntos_entrega", default)]
    pub delivery_points: Vec<DeliveryPoint>,
}

impl PageData {
    /// Leer los datos de la página sin fallar nunca
    ///
    /// Un documento que no es un objeto JSON produce datos vacíos; un punto
    /// mal formado se descarta y el resto se conserva.
    pub fn from_page_json(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                if !raw.trim().is_empty() {
                    log::warn!(
                        "⚠️ Datos de página no son JSON válido, usando valores por defecto: {}",
                        e
                    );
                }
                return Self::default();
            }
        };

        let Some(object) = value.as_object() else {
            log::warn!("⚠️ Datos de página no son un objeto JSON, usando valores por defecto");
            return Self::default();
        };

        let origin = object.get("origen").and_then(parse_coordinate);
        let destination = object.get("destino").and_then(parse_coordinate);

        let mut delivery_points = Vec::new();
        if let Some(entries) = object.get("puntos_entrega").and_then(Value::as_array) {
            for (index, entry) in entries.iter().enumerate() {
                match serde_json::from_value::<DeliveryPoint>(entry.clone()) {
                    Ok(point) => delivery_points.push(point),
                    Err(e) => log::warn!("⚠️ Punto de entrega {} descartado: {}", index, e),
                }
            }
        }

        log::debug!(
            "📥 Datos de página: origen={:?}, destino={:?}, {} puntos",
            origin,
            destination,
            delivery_points.len()
        );

        Self {
            origin,
            destination,
            delivery_points,
        }
    }

    pub fn usable_origin(&self) -> Option<Coordinate> {
        self.origin.filter(Coordinate::is_usable)
    }

    pub fn usable_destination(&self) -> Option<Coordinate> {
        self.destination.filter(Coordinate::is_usable)
    }
}

fn parse_coordinate(value: &Value) -> Option<Coordinate> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value::<Coordinate>(value.clone()) {
        Ok(coordinate) => Some(coordinate),
        Err(e) => {
            log::warn!("⚠️ Coordenada ignorada: {}", e);
            None
        }
    }
}
