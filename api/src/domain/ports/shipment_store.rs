//! Shipment store port
//!
//! The capability interface for durable shipment storage.
//! Implementations are provided by adapters (e.g., SeaORM over SQLite or PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewShipment, Shipment, ShipmentId, ShipmentPatch};
use crate::error::DomainError;

/// Durable CRUD over shipments.
///
/// Every mutation is committed before the call returns.
#[async_trait]
pub trait ShipmentStore: Send + Sync {
    /// Insert a new shipment with status `placed`, returning its assigned id
    async fn create(&self, shipment: &NewShipment) -> Result<ShipmentId, DomainError>;

    /// Fetch a shipment by id, or `DomainError::NotFound`
    async fn get(&self, id: ShipmentId) -> Result<Shipment, DomainError>;

    /// Apply the present fields of `patch` and return the committed record.
    ///
    /// The status change is checked against the record's status at write time;
    /// a backward move is `DomainError::InvalidTransition` and changes nothing.
    async fn update(&self, id: ShipmentId, patch: &ShipmentPatch)
        -> Result<Shipment, DomainError>;

    /// Remove a shipment permanently, or `DomainError::NotFound`
    async fn delete(&self, id: ShipmentId) -> Result<(), DomainError>;
}
