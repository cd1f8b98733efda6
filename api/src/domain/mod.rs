//! Domain layer
//!
//! Shipment model and lifecycle rules, independent of storage and transport.
//! - `entities`: Domain models and the status transition table
//! - `ports`: Trait definitions for the storage the domain relies on

pub mod entities;
pub mod ports;
