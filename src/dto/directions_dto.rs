//! DTOs para la API de Directions de Google
//!
//! Estructuras de la respuesta JSON del servicio web y su conversión a
//! nuestro modelo de ruta.

use serde::Deserialize;

use crate::models::coordinate::Coordinate;
use crate::models::polyline::decode_polyline;
use crate::models::route::{DirectionsRoute, RouteLeg};

/// Status de éxito de la API
pub const STATUS_OK: &str = "OK";

/// Response de la API de Directions
#[derive(Debug, Deserialize)]
pub struct GoogleDirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<GoogleRoute>,
}

/// Ruta en la respuesta
#[derive(Debug, Deserialize)]
pub struct GoogleRoute {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<GoogleLeg>,
    #[serde(default)]
    pub overview_polyline: Option<GooglePolyline>,
    #[serde(default)]
    pub waypoint_order: Vec<usize>,
}

/// Tramo entre dos paradas
#[derive(Debug, Deserialize)]
pub struct GoogleLeg {
    #[serde(default)]
    pub distance: Option<GoogleTextValue>,
    #[serde(default)]
    pub duration: Option<GoogleTextValue>,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

/// Par texto/valor (metros o segundos)
#[derive(Debug, Deserialize)]
pub struct GoogleTextValue {
    #[serde(default)]
    pub text: String,
    pub value: u64,
}

#[derive(Debug, Deserialize)]
pub struct GooglePolyline {
    pub points: String,
}

impl GoogleRoute {
    /// Convertir a nuestro modelo, decodificando la geometría
    pub fn into_route(self) -> Result<DirectionsRoute, String> {
        let overview_path: Vec<Coordinate> = match &self.overview_polyline {
            Some(polyline) => decode_polyline(&polyline.points)
                .map_err(|e| format!("overview_polyline: {}", e))?,
            None => Vec::new(),
        };

        let legs = self
            .legs
            .into_iter()
            .map(|leg| RouteLeg {
                distance_meters: leg.distance.map(|d| d.value).unwrap_or(0),
                duration_seconds: leg.duration.map(|d| d.value).unwrap_or(0),
                start_address: leg.start_address,
                end_address: leg.end_address,
            })
            .collect();

        Ok(DirectionsRoute {
            summary: self.summary,
            legs,
            overview_path,
            waypoint_order: self.waypoint_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ok_response() {
        let raw = r#"{
            "status": "OK",
            "geocoded_waypoints": [],
            "routes": [{
                "summary": "Av. Pedro de Valdivia",
                "legs": [
                    {"distance": {"text": "5,2 km", "value": 5200},
                     "duration": {"text": "12 min", "value": 720},
                     "start_address": "Concepción", "end_address": "Chiguayante"}
                ],
                "overview_polyline": {"points": "_p~iF~ps|U_ulLnnqC"},
                "waypoint_order": []
            }]
        }"#;
        let response: GoogleDirectionsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.status, STATUS_OK);

        let route = response.routes.into_iter().next().unwrap().into_route().unwrap();
        assert_eq!(route.summary, "Av. Pedro de Valdivia");
        assert_eq!(route.total_distance_meters(), 5200);
        assert_eq!(route.legs[0].end_address, "Chiguayante");
        assert_eq!(route.overview_path.len(), 2);
    }

    #[test]
    fn test_parse_error_response() {
        let raw = r#"{
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "routes": []
        }"#;
        let response: GoogleDirectionsResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response.status, "REQUEST_DENIED");
        assert_eq!(response.error_message.as_deref(), Some("The provided API key is invalid."));
        assert!(response.routes.is_empty());
    }

    #[test]
    fn test_bad_polyline_is_decode_error() {
        let route = GoogleRoute {
            summary: String::new(),
            legs: vec![],
            overview_polyline: Some(GooglePolyline { points: "_p~iF".to_string() }),
            waypoint_order: vec![],
        };
        assert!(route.into_route().unwrap_err().contains("overview_polyline"));
    }
}
