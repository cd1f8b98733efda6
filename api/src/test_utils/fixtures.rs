//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{Duration, Utc};

use crate::app::SubmitShipment;
use crate::domain::entities::{NewShipment, Shipment, ShipmentId, ShipmentStatus};

/// Create a placed shipment with the given id
pub fn test_shipment(id: i32) -> Shipment {
    Shipment {
        id: ShipmentId(id),
        content: "books".to_string(),
        weight: 2.5,
        destination: 11423,
        status: ShipmentStatus::Placed,
        estimated_delivery: Some(Utc::now() + Duration::days(3)),
    }
}

/// Store-level input matching [`test_shipment`]
pub fn new_test_shipment() -> NewShipment {
    NewShipment {
        content: "books".to_string(),
        weight: 2.5,
        destination: 11423,
        estimated_delivery: Some(Utc::now() + Duration::days(3)),
    }
}

/// The `books` submission used throughout the service tests
pub fn books_submission() -> SubmitShipment {
    SubmitShipment {
        content: "books".to_string(),
        weight: 2.5,
        destination: Some(11423),
    }
}
