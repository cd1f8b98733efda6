//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod shipment_policy;
pub mod shipment_service;

pub use shipment_policy::ShipmentPolicy;
pub use shipment_service::{ShipmentService, SubmitShipment};
