//! Utilidades de validación
//!
//! Validadores custom para `validator` usados por los modelos de coordenadas.

use validator::ValidationError;

/// Validar que un número sea finito (ni NaN ni infinito)
pub fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        let mut error = ValidationError::new("finite");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un número no sea cero
///
/// La página escribe `0` cuando no hay origen o destino seleccionado.
pub fn validate_non_zero(value: f64) -> Result<(), ValidationError> {
    if value == 0.0 {
        let mut error = ValidationError::new("non_zero");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}
