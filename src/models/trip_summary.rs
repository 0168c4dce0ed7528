//! Resumen del recorrido dibujado: distancia, duración, consumo y costo.

use serde::{Deserialize, Serialize};

use super::route::DirectionsRoute;

/// Rendimiento por defecto del vehículo (km/L)
pub const DEFAULT_KM_PER_LITER: f64 = 12.0;

/// Precio por defecto de la bencina (CLP/L)
pub const DEFAULT_FUEL_PRICE_CLP: f64 = 1250.0;

/// Parámetros de consumo del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelSettings {
    pub km_per_liter: f64,
    pub price_per_liter_clp: f64,
}

impl Default for FuelSettings {
    fn default() -> Self {
        Self {
            km_per_liter: DEFAULT_KM_PER_LITER,
            price_per_liter_clp: DEFAULT_FUEL_PRICE_CLP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub fuel_liters: f64,
    pub fuel_cost_clp: f64,
}

impl TripSummary {
    pub fn from_route(route: &DirectionsRoute, fuel: &FuelSettings) -> Self {
        let km_per_liter = if fuel.km_per_liter.is_finite() && fuel.km_per_liter > 0.0 {
            fuel.km_per_liter
        } else {
            log::warn!(
                "⚠️ Rendimiento inválido ({}), usando {} km/L",
                fuel.km_per_liter,
                DEFAULT_KM_PER_LITER
            );
            DEFAULT_KM_PER_LITER
        };

        let distance_km = route.total_distance_meters() as f64 / 1000.0;
        let fuel_liters = distance_km / km_per_liter;
        let fuel_cost = fuel_liters * fuel.price_per_liter_clp;

        Self {
            distance_km: round_to(distance_km, 2),
            duration_minutes: round_to(route.total_duration_seconds() as f64 / 60.0, 2),
            fuel_liters: round_to(fuel_liters, 2),
            fuel_cost_clp: round_to(fuel_cost, 0),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
