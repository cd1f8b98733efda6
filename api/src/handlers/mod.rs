//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod shipments;

pub use shipments::{delete_shipment, get_shipment, submit_shipment, update_shipment};
