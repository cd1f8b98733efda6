//! SeaORM adapter for ShipmentStore

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use crate::domain::entities::{NewShipment, Shipment, ShipmentId, ShipmentPatch, ShipmentStatus};
use crate::domain::ports::ShipmentStore;
use crate::entity::shipments;
use crate::error::DomainError;

/// SQL implementation of ShipmentStore
pub struct SqlShipmentStore {
    db: DatabaseConnection,
}

impl SqlShipmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn not_found(id: ShipmentId) -> DomainError {
    DomainError::NotFound(format!("Shipment {} not found", id))
}

#[async_trait]
impl ShipmentStore for SqlShipmentStore {
    async fn create(&self, shipment: &NewShipment) -> Result<ShipmentId, DomainError> {
        let model = shipments::ActiveModel {
            id: NotSet,
            content: Set(shipment.content.clone()),
            weight: Set(shipment.weight),
            destination: Set(shipment.destination),
            status: Set(ShipmentStatus::Placed.to_string()),
            estimated_delivery: Set(shipment.estimated_delivery.map(|dt| dt.fixed_offset())),
        };

        let result = shipments::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(ShipmentId(result.last_insert_id))
    }

    async fn get(&self, id: ShipmentId) -> Result<Shipment, DomainError> {
        let model = shipments::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .ok_or_else(|| not_found(id))?;

        model.try_into()
    }

    async fn update(
        &self,
        id: ShipmentId,
        patch: &ShipmentPatch,
    ) -> Result<Shipment, DomainError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        // Status only moves forward, so a lost race is retried at most a few times
        loop {
            let current = self.get(id).await?;
            current.clone().apply(patch)?;

            let mut query = shipments::Entity::update_many()
                .filter(shipments::Column::Id.eq(id.0))
                .filter(shipments::Column::Status.eq(current.status.to_string()));
            if let Some(status) = patch.status {
                query = query.col_expr(shipments::Column::Status, Expr::value(status.to_string()));
            }
            if let Some(eta) = patch.estimated_delivery {
                query = query.col_expr(
                    shipments::Column::EstimatedDelivery,
                    Expr::value(eta.fixed_offset()),
                );
            }

            let result = query
                .exec(&self.db)
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;

            if result.rows_affected > 0 {
                return self.get(id).await;
            }

            tracing::debug!(shipment_id = %id, "Shipment changed during update, retrying");
        }
    }

    async fn delete(&self, id: ShipmentId) -> Result<(), DomainError> {
        let result = shipments::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<shipments::Model> for Shipment {
    type Error = DomainError;

    fn try_from(model: shipments::Model) -> Result<Self, Self::Error> {
        let status = model.status.parse().map_err(|e: String| {
            DomainError::Database(format!("shipment {}: {}", model.id, e))
        })?;

        Ok(Shipment {
            id: ShipmentId(model.id),
            content: model.content,
            weight: model.weight,
            destination: model.destination,
            status,
            estimated_delivery: model.estimated_delivery.map(|dt| dt.with_timezone(&Utc)),
        })
    }
}
