//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Las variables ausentes
//! toman su valor por defecto; una variable presente con un valor que no se
//! puede interpretar es un error.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::clients::delete_point_client::DEFAULT_CSRF_COOKIE_NAME;
use crate::clients::google_directions_client::DEFAULT_DIRECTIONS_BASE_URL;
use crate::display::controller::DisplaySettings;
use crate::models::coordinate::{Coordinate, DEFAULT_CENTER};
use crate::models::map_view::DEFAULT_ZOOM;
use crate::models::route::RouteClosure;
use crate::models::trip_summary::{FuelSettings, DEFAULT_FUEL_PRICE_CLP, DEFAULT_KM_PER_LITER};
use crate::utils::errors::ConfigError;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub google_maps_api_key: Option<String>,
    pub directions_base_url: String,
    pub default_center: Coordinate,
    pub map_zoom: u8,
    pub route_closure: RouteClosure,
    pub csrf_cookie_name: String,
    pub http_timeout_secs: u64,
    pub vehicle_km_per_liter: f64,
    pub fuel_price_clp: f64,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            google_maps_api_key: None,
            directions_base_url: DEFAULT_DIRECTIONS_BASE_URL.to_string(),
            default_center: DEFAULT_CENTER,
            map_zoom: DEFAULT_ZOOM,
            route_closure: RouteClosure::default(),
            csrf_cookie_name: DEFAULT_CSRF_COOKIE_NAME.to_string(),
            http_timeout_secs: 30,
            vehicle_km_per_liter: DEFAULT_KM_PER_LITER,
            fuel_price_clp: DEFAULT_FUEL_PRICE_CLP,
            cors_origins: Vec::new(),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Leer la configuración desde cualquier fuente clave/valor
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let default_center = Coordinate::new(
            parse_or(&get, "MAP_DEFAULT_LAT", defaults.default_center.lat)?,
            parse_or(&get, "MAP_DEFAULT_LNG", defaults.default_center.lng)?,
        );
        if !default_center.is_valid() {
            return Err(ConfigError::InvalidValue {
                key: "MAP_DEFAULT_LAT/MAP_DEFAULT_LNG".to_string(),
                value: format!("{},{}", default_center.lat, default_center.lng),
            });
        }

        let route_closure = match get("ROUTE_CLOSURE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "ROUTE_CLOSURE".to_string(),
                value: raw,
            })?,
            None => defaults.route_closure,
        };

        Ok(Self {
            environment: get("ENVIRONMENT").unwrap_or(defaults.environment),
            host: get("HOST").unwrap_or(defaults.host),
            port: parse_or(&get, "PORT", defaults.port)?,
            google_maps_api_key: get("GOOGLE_MAPS_API_KEY"),
            directions_base_url: get("DIRECTIONS_BASE_URL").unwrap_or(defaults.directions_base_url),
            default_center,
            map_zoom: parse_or(&get, "MAP_ZOOM", defaults.map_zoom)?,
            route_closure,
            csrf_cookie_name: get("CSRF_COOKIE_NAME").unwrap_or(defaults.csrf_cookie_name),
            http_timeout_secs: parse_or(&get, "HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            vehicle_km_per_liter: parse_or(
                &get,
                "VEHICLE_KM_PER_LITER",
                defaults.vehicle_km_per_liter,
            )?,
            fuel_price_clp: parse_or(&get, "FUEL_PRICE_CLP", defaults.fuel_price_clp)?,
            cors_origins: get("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings {
            default_center: self.default_center,
            zoom: self.map_zoom,
            closure: self.route_closure,
        }
    }

    pub fn fuel_settings(&self) -> FuelSettings {
        FuelSettings {
            km_per_liter: self.vehicle_km_per_liter,
            price_per_liter_clp: self.fuel_price_clp,
        }
    }
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}
