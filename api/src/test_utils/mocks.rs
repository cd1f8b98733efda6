//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewShipment, Shipment, ShipmentId, ShipmentPatch, ShipmentStatus};
use crate::domain::ports::ShipmentStore;
use crate::error::DomainError;

// ============================================================================
// In-Memory Shipment Store
// ============================================================================

#[derive(Default)]
struct ShipmentTable {
    rows: BTreeMap<ShipmentId, Shipment>,
    last_id: i32,
}

/// Enforces the status lifecycle under its write lock, like the SQL store.
#[derive(Default)]
pub struct InMemoryShipmentStore {
    table: Arc<RwLock<ShipmentTable>>,
}

impl InMemoryShipmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a shipment for testing
    pub fn with_shipment(self, shipment: Shipment) -> Self {
        {
            let mut table = self.table.write().unwrap();
            table.last_id = table.last_id.max(shipment.id.0);
            table.rows.insert(shipment.id, shipment);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().unwrap().rows.is_empty()
    }
}

fn not_found(id: ShipmentId) -> DomainError {
    DomainError::NotFound(format!("Shipment {} not found", id))
}

#[async_trait]
impl ShipmentStore for InMemoryShipmentStore {
    async fn create(&self, shipment: &NewShipment) -> Result<ShipmentId, DomainError> {
        let mut table = self.table.write().unwrap();
        table.last_id += 1;
        let id = ShipmentId(table.last_id);

        table.rows.insert(
            id,
            Shipment {
                id,
                content: shipment.content.clone(),
                weight: shipment.weight,
                destination: shipment.destination,
                status: ShipmentStatus::Placed,
                estimated_delivery: shipment.estimated_delivery,
            },
        );

        Ok(id)
    }

    async fn get(&self, id: ShipmentId) -> Result<Shipment, DomainError> {
        let table = self.table.read().unwrap();
        table.rows.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn update(
        &self,
        id: ShipmentId,
        patch: &ShipmentPatch,
    ) -> Result<Shipment, DomainError> {
        let mut table = self.table.write().unwrap();
        let shipment = table.rows.get_mut(&id).ok_or_else(|| not_found(id))?;

        let mut updated = shipment.clone();
        updated.apply(patch)?;
        *shipment = updated.clone();

        Ok(updated)
    }

    async fn delete(&self, id: ShipmentId) -> Result<(), DomainError> {
        let mut table = self.table.write().unwrap();
        table.rows.remove(&id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}

// ============================================================================
// Failing Shipment Store
// ============================================================================

/// Store whose backing engine is always unavailable
pub struct FailingShipmentStore;

fn unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

#[async_trait]
impl ShipmentStore for FailingShipmentStore {
    async fn create(&self, _shipment: &NewShipment) -> Result<ShipmentId, DomainError> {
        Err(unavailable())
    }

    async fn get(&self, _id: ShipmentId) -> Result<Shipment, DomainError> {
        Err(unavailable())
    }

    async fn update(
        &self,
        _id: ShipmentId,
        _patch: &ShipmentPatch,
    ) -> Result<Shipment, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: ShipmentId) -> Result<(), DomainError> {
        Err(unavailable())
    }
}
