//! Decodificación de polilíneas codificadas
//!
//! El servicio de direcciones devuelve la geometría de la ruta en el formato
//! de polilínea codificada (precisión 1e5). Se decodifica en el borde, al
//! recibir la respuesta, para que el overlay trabaje con coordenadas.

use thiserror::Error;

use super::coordinate::Coordinate;

const PRECISION: f64 = 1e5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolylineError {
    #[error("carácter inválido en la posición {0}")]
    InvalidCharacter(usize),

    #[error("polilínea truncada en la posición {0}")]
    Truncated(usize),

    #[error("valor demasiado largo en la posición {0}")]
    Overflow(usize),
}

pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;
    let mut points = Vec::new();

    while index < bytes.len() {
        let start = index;
        lat = lat
            .checked_add(next_delta(bytes, &mut index)?)
            .ok_or(PolylineError::Overflow(start))?;
        lng = lng
            .checked_add(next_delta(bytes, &mut index)?)
            .ok_or(PolylineError::Overflow(start))?;
        points.push(Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
    }

    Ok(points)
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let Some(&byte) = bytes.get(*index) else {
            return Err(PolylineError::Truncated(*index));
        };
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter(*index));
        }
        if shift > 60 {
            return Err(PolylineError::Overflow(*index));
        }

        let chunk = (byte - 63) as i64;
        *index += 1;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}
