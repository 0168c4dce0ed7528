//! Coordenadas geográficas
//!
//! Par latitud/longitud usado para el origen, el destino, los puntos de
//! entrega y los límites del mapa.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_finite, validate_non_zero};

/// Centro por defecto: Concepción
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: -36.827,
    lng: -73.050,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Coordenada finita y dentro de rango
    pub fn is_valid(&self) -> bool {
        validate_finite(self.lat).is_ok()
            && validate_finite(self.lng).is_ok()
            && self.validate().is_ok()
    }

    /// Origen/destino utilizable: válido y con ambos componentes distintos de cero
    pub fn is_usable(&self) -> bool {
        self.is_valid()
            && validate_non_zero(self.lat).is_ok()
            && validate_non_zero(self.lng).is_ok()
    }

    /// Formato `lat,lng` que esperan los servicios web de mapas
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

/// Rectángulo que encierra un conjunto de coordenadas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    pub fn from_point(point: Coordinate) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    pub fn extend(&mut self, point: Coordinate) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    /// Límites de todos los puntos, `None` si no hay ninguno
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Coordinate>) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for point in points {
            match bounds.as_mut() {
                Some(b) => b.extend(*point),
                None => bounds = Some(Self::from_point(*point)),
            }
        }
        bounds
    }

    pub fn contains(&self, point: &Coordinate) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_rejects_zero_and_out_of_range() {
        assert!(DEFAULT_CENTER.is_usable());
        assert!(!Coordinate::new(0.0, -73.05).is_usable());
        assert!(!Coordinate::new(-36.8, 0.0).is_usable());
        assert!(!Coordinate::new(91.0, -73.05).is_usable());
        assert!(!Coordinate::new(-36.8, 181.0).is_usable());
        assert!(!Coordinate::new(f64::NAN, -73.05).is_usable());
    }

    #[test]
    fn test_zero_is_valid_but_not_usable() {
        let equator = Coordinate::new(0.0, 0.0);
        assert!(equator.is_valid());
        assert!(!equator.is_usable());
    }

    #[test]
    fn test_bounds_enclose_all_points() {
        let points = vec![
            Coordinate::new(-36.8, -73.0),
            Coordinate::new(-36.9, -73.1),
            Coordinate::new(-36.827, -73.05),
        ];
        let bounds = LatLngBounds::enclosing(&points).unwrap();

        assert_eq!(bounds.south, -36.9);
        assert_eq!(bounds.north, -36.8);
        assert_eq!(bounds.west, -73.1);
        assert_eq!(bounds.east, -73.0);
        assert!(points.iter().all(|p| bounds.contains(p)));
    }

    #[test]
    fn test_bounds_empty() {
        let points: Vec<Coordinate> = vec![];
        assert!(LatLngBounds::enclosing(&points).is_none());
    }

    #[test]
    fn test_query_value() {
        assert_eq!(Coordinate::new(-36.8, -73.0).to_query_value(), "-36.8,-73");
    }
}
