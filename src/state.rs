//! Shared application state
//!
//! Estado compartido que se pasa a través del router de Axum. Cada render
//! construye su propia vista del mapa; aquí sólo viven la configuración y
//! el cliente de direcciones.

use std::sync::Arc;

use crate::clients::google_directions_client::GoogleDirectionsClient;
use crate::config::environment::EnvironmentConfig;
use crate::services::routing_service::RoutingService;
use crate::utils::errors::{AppError, AppResult};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub routing: Option<Arc<dyn RoutingService>>,
}

impl AppState {
    /// Crear el estado con el cliente de Google si hay API key
    pub fn new(config: EnvironmentConfig) -> AppResult<Self> {
        let routing: Option<Arc<dyn RoutingService>> = match &config.google_maps_api_key {
            Some(key) => Some(Arc::new(GoogleDirectionsClient::new(
                key.clone(),
                config.directions_base_url.clone(),
                config.http_timeout(),
            )
            .map_err(|e| AppError::Internal(format!("cliente de direcciones: {}", e)))?)),
            None => {
                log::warn!("⚠️ GOOGLE_MAPS_API_KEY no configurada, /render responderá 503");
                None
            }
        };

        Ok(Self { config, routing })
    }

    /// Estado con un servicio de direcciones arbitrario
    pub fn with_routing(
        config: EnvironmentConfig,
        routing: Option<Arc<dyn RoutingService>>,
    ) -> Self {
        Self { config, routing }
    }
}
