//! Shipment domain entity
//!
//! A tracked cargo record moving through the delivery lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Store-assigned identifier for a shipment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShipmentId(pub i32);

impl From<i32> for ShipmentId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shipment lifecycle status, declared in lifecycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Placed,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl ShipmentStatus {
    pub const ALL: [ShipmentStatus; 4] = [
        ShipmentStatus::Placed,
        ShipmentStatus::InTransit,
        ShipmentStatus::OutForDelivery,
        ShipmentStatus::Delivered,
    ];

    /// Statuses a shipment may move to from `self`, itself included.
    ///
    /// Forward moves may skip stages; nothing moves backwards.
    pub fn allowed_transitions(&self) -> &'static [ShipmentStatus] {
        use ShipmentStatus::*;
        match self {
            Placed => &[Placed, InTransit, OutForDelivery, Delivered],
            InTransit => &[InTransit, OutForDelivery, Delivered],
            OutForDelivery => &[OutForDelivery, Delivered],
            Delivered => &[Delivered],
        }
    }

    /// Whether no further transitions are possible
    pub fn is_terminal(&self) -> bool {
        *self == ShipmentStatus::Delivered
    }

    pub fn can_transition_to(&self, next: ShipmentStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Like [`can_transition_to`](Self::can_transition_to), as a domain result
    pub fn transition_to(&self, next: ShipmentStatus) -> Result<ShipmentStatus, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::InvalidTransition {
                from: *self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShipmentStatus::Placed => write!(f, "placed"),
            ShipmentStatus::InTransit => write!(f, "in_transit"),
            ShipmentStatus::OutForDelivery => write!(f, "out_for_delivery"),
            ShipmentStatus::Delivered => write!(f, "delivered"),
        }
    }
}

impl std::str::FromStr for ShipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(ShipmentStatus::Placed),
            "in_transit" => Ok(ShipmentStatus::InTransit),
            "out_for_delivery" => Ok(ShipmentStatus::OutForDelivery),
            "delivered" => Ok(ShipmentStatus::Delivered),
            _ => {
                let allowed: Vec<String> = Self::ALL.iter().map(|s| s.to_string()).collect();
                Err(format!(
                    "Unknown shipment status: {} (expected one of {})",
                    s,
                    allowed.join(", ")
                ))
            }
        }
    }
}

/// A persisted shipment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub content: String,
    pub weight: f64,
    /// Postal/zone code
    pub destination: i32,
    pub status: ShipmentStatus,
    pub estimated_delivery: Option<DateTime<Utc>>,
}

impl Shipment {
    /// Apply a patch in memory, enforcing the status lifecycle
    pub fn apply(&mut self, patch: &ShipmentPatch) -> Result<(), DomainError> {
        if let Some(status) = patch.status {
            self.status = self.status.transition_to(status)?;
        }
        if let Some(eta) = patch.estimated_delivery {
            self.estimated_delivery = Some(eta);
        }
        Ok(())
    }
}

/// Data needed to create a new shipment.
///
/// Every field is already defaulted and validated; status is always `placed`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShipment {
    pub content: String,
    pub weight: f64,
    pub destination: i32,
    pub estimated_delivery: Option<DateTime<Utc>>,
}

/// Partial update: only the fields that are present change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentPatch {
    pub status: Option<ShipmentStatus>,
    pub estimated_delivery: Option<DateTime<Utc>>,
}

impl ShipmentPatch {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.estimated_delivery.is_none()
    }
}
