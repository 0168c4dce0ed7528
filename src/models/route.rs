//! Modelo de ruta
//!
//! Request de ruta hacia el servicio de direcciones, la ruta devuelta y la
//! política de cierre del recorrido.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::coordinate::Coordinate;

/// Qué hacer al final del recorrido cuando no hay destino explícito
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClosure {
    /// ORIGEN → puntos → ORIGEN
    #[default]
    ReturnToOrigin,
    /// ORIGEN → puntos, termina en la última parada
    EndAtLastStop,
}

impl FromStr for RouteClosure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "round_trip" | "return_to_origin" => Ok(Self::ReturnToOrigin),
            "open" | "end_at_last_stop" => Ok(Self::EndAtLastStop),
            other => Err(format!("política de cierre desconocida: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Driving,
}

/// Parada intermedia
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: Coordinate,
    pub stopover: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub waypoints: Vec<Waypoint>,
    pub travel_mode: TravelMode,
    /// Siempre `false`: el orden ya viene optimizado del backend
    pub optimize_waypoints: bool,
}

impl RouteRequest {
    /// Construir el request desde un camino ordenado
    ///
    /// El primer punto es el origen, el último el destino y los intermedios
    /// son paradas en el mismo orden. `None` si el camino tiene menos de 2 puntos.
    pub fn from_path(path: &[Coordinate]) -> Option<Self> {
        if path.len() < 2 {
            return None;
        }

        let origin = path[0];
        let destination = path[path.len() - 1];
        let waypoints = path[1..path.len() - 1]
            .iter()
            .map(|location| Waypoint {
                location: *location,
                stopover: true,
            })
            .collect();

        Some(Self {
            origin,
            destination,
            waypoints,
            travel_mode: TravelMode::Driving,
            optimize_waypoints: false,
        })
    }

    /// Todos los puntos del request en orden de visita
    pub fn ordered_points(&self) -> Vec<Coordinate> {
        let mut points = Vec::with_capacity(self.waypoints.len() + 2);
        points.push(self.origin);
        points.extend(self.waypoints.iter().map(|w| w.location));
        points.push(self.destination);
        points
    }
}

/// Tramo entre dos paradas consecutivas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance_meters: u64,
    pub duration_seconds: u64,
    pub start_address: String,
    pub end_address: String,
}

/// Ruta calculada por el servicio externo, lista para dibujar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    pub summary: String,
    pub legs: Vec<RouteLeg>,
    pub overview_path: Vec<Coordinate>,
    pub waypoint_order: Vec<usize>,
}

impl DirectionsRoute {
    pub fn total_distance_meters(&self) -> u64 {
        self.legs.iter().map(|leg| leg.distance_meters).sum()
    }

    pub fn total_duration_seconds(&self) -> u64 {
        self.legs.iter().map(|leg| leg.duration_seconds).sum()
    }
}
