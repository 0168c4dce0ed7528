//! Cliente HTTP para la API de Directions de Google
//!
//! Implementación real de `RoutingService`. Pide rutas en auto con las
//! paradas en el orden recibido (nunca con `optimize:true`).

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::dto::directions_dto::{GoogleDirectionsResponse, STATUS_OK};
use crate::models::route::{DirectionsRoute, RouteRequest, TravelMode};
use crate::services::routing_service::{RoutingError, RoutingService};

pub const DEFAULT_DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

pub struct GoogleDirectionsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleDirectionsClient {
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, RoutingError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL completa del request, con los parámetros codificados
    pub fn directions_url(&self, request: &RouteRequest) -> String {
        let mode = match request.travel_mode {
            TravelMode::Driving => "driving",
        };

        let mut url = format!(
            "{}/directions/json?origin={}&destination={}&mode={}",
            self.base_url,
            urlencoding::encode(&request.origin.to_query_value()),
            urlencoding::encode(&request.destination.to_query_value()),
            mode
        );

        if !request.waypoints.is_empty() {
            let stops: Vec<String> = request
                .waypoints
                .iter()
                .map(|w| {
                    let value = w.location.to_query_value();
                    if w.stopover {
                        value
                    } else {
                        format!("via:{}", value)
                    }
                })
                .collect();
            let mut waypoints = stops.join("|");
            if request.optimize_waypoints {
                waypoints = format!("optimize:true|{}", waypoints);
            }
            url.push_str("&waypoints=");
            url.push_str(&urlencoding::encode(&waypoints));
        }

        url.push_str("&key=");
        url.push_str(&urlencoding::encode(&self.api_key));
        url
    }
}

#[async_trait]
impl RoutingService for GoogleDirectionsClient {
    async fn route(&self, request: &RouteRequest) -> Result<DirectionsRoute, RoutingError> {
        log::info!(
            "🧭 Solicitando ruta: {} paradas intermedias (optimizeWaypoints={})",
            request.waypoints.len(),
            request.optimize_waypoints
        );

        let url = self.directions_url(request);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", "RouteDisplay/1.0")
            .send()
            .await?;

        let http_status = response.status();
        let body = response.text().await?;

        log::info!("📡 Directions response status: {}", http_status);
        log::debug!("📄 Directions response body: {}", body);

        if !http_status.is_success() {
            return Err(RoutingError::Status {
                status: format!("HTTP {}", http_status.as_u16()),
                message: body,
            });
        }

        let parsed: GoogleDirectionsResponse =
            serde_json::from_str(&body).map_err(|e| RoutingError::Decode(e.to_string()))?;

        if parsed.status != STATUS_OK {
            return Err(RoutingError::Status {
                status: parsed.status,
                message: parsed.error_message.unwrap_or_default(),
            });
        }

        let route = parsed.routes.into_iter().next().ok_or(RoutingError::NoRoute)?;
        route.into_route().map_err(RoutingError::Decode)
    }
}
