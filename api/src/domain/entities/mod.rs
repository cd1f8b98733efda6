//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod shipment;

pub use shipment::{NewShipment, Shipment, ShipmentId, ShipmentPatch, ShipmentStatus};
