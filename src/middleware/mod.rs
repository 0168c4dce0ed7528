//! Middleware del sistema
//!
//! Este módulo contiene el middleware HTTP (CORS).

pub mod cors;

pub use cors::*;
