//! Clients - HTTP Clients for External APIs
//!
//! This module contains HTTP clients for the directions web service and
//! the delivery point deletion endpoint.

pub mod delete_point_client;
pub mod google_directions_client;

// Re-export main types for convenience
pub use delete_point_client::HttpDeletionTransport;
pub use google_directions_client::GoogleDirectionsClient;
