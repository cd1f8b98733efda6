//! Shipment handlers
//!
//! Endpoints for submitting, tracking, updating and deleting shipments.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::SubmitShipment;
use crate::domain::entities::{Shipment, ShipmentId, ShipmentPatch, ShipmentStatus};
use crate::error::{AppError, DomainError};
use crate::AppState;

/// Query parameters identifying a shipment
#[derive(Debug, Deserialize)]
pub struct ShipmentQuery {
    pub id: i32,
}

impl ShipmentQuery {
    fn shipment_id(&self) -> Result<ShipmentId, AppError> {
        if self.id < 1 {
            return Err(AppError::BadRequest(
                "id must be a positive integer".to_string(),
            ));
        }
        Ok(ShipmentId(self.id))
    }
}

/// Request body for submitting a shipment
#[derive(Debug, Deserialize)]
pub struct CreateShipmentRequest {
    pub content: String,
    pub weight: f64,
    /// Postal/zone code; may be generated when omitted
    #[serde(default)]
    pub destination: Option<i32>,
}

/// Response body for a submitted shipment
#[derive(Debug, Serialize)]
pub struct CreateShipmentResponse {
    pub id: i32,
}

/// Partial update body; omitted fields are left untouched
#[derive(Debug, Default, Deserialize)]
pub struct UpdateShipmentRequest {
    /// One of placed, in_transit, out_for_delivery, delivered
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub estimated_delivery: Option<DateTime<Utc>>,
}

impl TryFrom<UpdateShipmentRequest> for ShipmentPatch {
    type Error = DomainError;

    fn try_from(request: UpdateShipmentRequest) -> Result<Self, Self::Error> {
        let status = request
            .status
            .map(|s| s.parse::<ShipmentStatus>())
            .transpose()
            .map_err(DomainError::Validation)?;

        Ok(ShipmentPatch {
            status,
            estimated_delivery: request.estimated_delivery,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ShipmentResponse {
    pub id: i32,
    pub content: String,
    pub weight: f64,
    pub destination: i32,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
}

impl From<Shipment> for ShipmentResponse {
    fn from(shipment: Shipment) -> Self {
        ShipmentResponse {
            id: shipment.id.0,
            content: shipment.content,
            weight: shipment.weight,
            destination: shipment.destination,
            status: shipment.status.to_string(),
            estimated_delivery: shipment.estimated_delivery.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteShipmentResponse {
    pub detail: String,
}

/// GET /shipment?id=
///
/// Get a shipment by id.
pub async fn get_shipment(
    State(state): State<AppState>,
    query: Result<Query<ShipmentQuery>, QueryRejection>,
) -> Result<Json<ShipmentResponse>, AppError> {
    let Query(query) = query?;
    let shipment = state.shipment_service.fetch(query.shipment_id()?).await?;

    Ok(Json(shipment.into()))
}

/// POST /shipment
///
/// Submit a new shipment. Status starts as `placed`.
pub async fn submit_shipment(
    State(state): State<AppState>,
    request: Result<Json<CreateShipmentRequest>, JsonRejection>,
) -> Result<Json<CreateShipmentResponse>, AppError> {
    let Json(request) = request?;
    let id = state
        .shipment_service
        .submit(SubmitShipment {
            content: request.content,
            weight: request.weight,
            destination: request.destination,
        })
        .await?;

    Ok(Json(CreateShipmentResponse { id: id.0 }))
}

/// PATCH /shipment?id=
///
/// Update status and/or estimated delivery.
pub async fn update_shipment(
    State(state): State<AppState>,
    query: Result<Query<ShipmentQuery>, QueryRejection>,
    request: Result<Json<UpdateShipmentRequest>, JsonRejection>,
) -> Result<Json<ShipmentResponse>, AppError> {
    let Query(query) = query?;
    let Json(request) = request?;
    let id = query.shipment_id()?;
    let patch = ShipmentPatch::try_from(request)?;

    let shipment = state.shipment_service.amend(id, patch).await?;

    Ok(Json(shipment.into()))
}

/// DELETE /shipment?id=
///
/// Delete a shipment permanently.
pub async fn delete_shipment(
    State(state): State<AppState>,
    query: Result<Query<ShipmentQuery>, QueryRejection>,
) -> Result<Json<DeleteShipmentResponse>, AppError> {
    let Query(query) = query?;
    let detail = state
        .shipment_service
        .withdraw(query.shipment_id()?)
        .await?;

    Ok(Json(DeleteShipmentResponse { detail }))
}
