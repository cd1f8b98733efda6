//! Shipment service
//!
//! Validates requests and fills defaults before anything reaches the store,
//! then shapes store outcomes into application results.

use std::sync::Arc;

use chrono::Utc;

use crate::app::shipment_policy::{validate_content, validate_weight, ShipmentPolicy};
use crate::domain::entities::{NewShipment, Shipment, ShipmentId, ShipmentPatch};
use crate::domain::ports::ShipmentStore;
use crate::error::{AppError, DomainError};

/// A shipment submission as received from a caller
#[derive(Debug, Clone)]
pub struct SubmitShipment {
    pub content: String,
    pub weight: f64,
    pub destination: Option<i32>,
}

/// Service for the shipment lifecycle
pub struct ShipmentService<S>
where
    S: ShipmentStore,
{
    store: Arc<S>,
    policy: ShipmentPolicy,
}

impl<S> ShipmentService<S>
where
    S: ShipmentStore,
{
    pub fn new(store: Arc<S>, policy: ShipmentPolicy) -> Self {
        Self { store, policy }
    }

    /// Submit a new shipment
    ///
    /// Status is always `placed`. The destination and delivery estimate are
    /// filled according to the policy so the store only sees complete records.
    pub async fn submit(&self, request: SubmitShipment) -> Result<ShipmentId, AppError> {
        validate_content(&request.content)?;
        validate_weight(request.weight)?;
        let destination = self.policy.destination(request.destination)?;

        let new_shipment = NewShipment {
            content: request.content,
            weight: request.weight,
            destination,
            estimated_delivery: self.policy.estimated_delivery(Utc::now()),
        };

        let id = self.store.create(&new_shipment).await?;
        tracing::info!(shipment_id = %id, destination, "Shipment placed");

        Ok(id)
    }

    /// Fetch a shipment by id
    pub async fn fetch(&self, id: ShipmentId) -> Result<Shipment, AppError> {
        tracing::debug!(shipment_id = %id, "Fetching shipment");
        Ok(self.store.get(id).await?)
    }

    /// Apply a partial update
    ///
    /// Empty patches are a validation error. Status changes must follow the
    /// lifecycle ordering; the store checks that against the current record.
    pub async fn amend(&self, id: ShipmentId, patch: ShipmentPatch) -> Result<Shipment, AppError> {
        if patch.is_empty() {
            return Err(AppError::Domain(DomainError::Validation(
                "update must contain at least one of status or estimated_delivery".to_string(),
            )));
        }

        let updated = match self.store.update(id, &patch).await {
            Ok(updated) => updated,
            Err(e @ DomainError::InvalidTransition { .. }) => {
                tracing::warn!(shipment_id = %id, "Rejected shipment update: {}", e);
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(status) = patch.status {
            tracing::info!(
                shipment_id = %id,
                status = %status,
                terminal = status.is_terminal(),
                "Shipment status set"
            );
        }

        Ok(updated)
    }

    /// Delete a shipment, returning a confirmation message
    pub async fn withdraw(&self, id: ShipmentId) -> Result<String, AppError> {
        self.store.delete(id).await?;
        tracing::info!(shipment_id = %id, "Shipment deleted");

        Ok(format!("Shipment id #{} was deleted", id))
    }
}
