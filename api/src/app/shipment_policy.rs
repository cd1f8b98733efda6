//! Shipment policy
//!
//! Validation limits and default-value rules applied before a shipment
//! reaches the store.

use std::ops::RangeInclusive;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::error::DomainError;

/// Heaviest accepted shipment (mass units, inclusive)
pub const MAX_WEIGHT: f64 = 25.0;

/// Range used when a destination has to be generated
pub const RANDOM_DESTINATION_RANGE: RangeInclusive<i32> = 11000..=11999;

/// Default offset from creation time for the delivery estimate
pub const DEFAULT_DELIVERY_ESTIMATE_DAYS: i64 = 3;

/// Default-value policy for new shipments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipmentPolicy {
    /// Reject submissions without a destination instead of generating one
    pub require_destination: bool,
    /// Estimate offset in days; `None` leaves `estimated_delivery` unset
    pub delivery_estimate_days: Option<i64>,
}

impl Default for ShipmentPolicy {
    fn default() -> Self {
        Self {
            require_destination: true,
            delivery_estimate_days: Some(DEFAULT_DELIVERY_ESTIMATE_DAYS),
        }
    }
}

impl ShipmentPolicy {
    /// Resolve the destination for a submission
    pub fn destination(&self, requested: Option<i32>) -> Result<i32, DomainError> {
        match requested {
            Some(destination) => Ok(destination),
            None if self.require_destination => Err(DomainError::Validation(
                "destination is required".to_string(),
            )),
            None => Ok(random_destination()),
        }
    }

    /// Delivery estimate for a shipment created at `now`
    pub fn estimated_delivery(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.delivery_estimate_days
            .map(|days| now + Duration::days(days))
    }
}

/// Check a submitted weight
pub fn validate_weight(weight: f64) -> Result<(), DomainError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(DomainError::Validation(
            "weight must be a non-negative number".to_string(),
        ));
    }
    if weight > MAX_WEIGHT {
        return Err(DomainError::Validation(format!(
            "weight must be less than or equal to {}",
            MAX_WEIGHT
        )));
    }
    Ok(())
}

/// Check submitted cargo content
pub fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::Validation(
            "content must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn random_destination() -> i32 {
    rand::thread_rng().gen_range(RANDOM_DESTINATION_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_boundary() {
        assert!(validate_weight(25.0).is_ok());
        assert!(validate_weight(0.0).is_ok());
        assert!(validate_weight(2.5).is_ok());
        assert!(validate_weight(25.0001).is_err());
        assert!(validate_weight(-1.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn content_must_not_be_blank() {
        assert!(validate_content("books").is_ok());
        assert!(validate_content("").is_err());
        assert!(validate_content("   ").is_err());
    }

    #[test]
    fn explicit_destination_is_kept() {
        let policy = ShipmentPolicy::default();
        assert_eq!(policy.destination(Some(11423)).unwrap(), 11423);

        let lenient = ShipmentPolicy {
            require_destination: false,
            ..ShipmentPolicy::default()
        };
        assert_eq!(lenient.destination(Some(42)).unwrap(), 42);
    }

    #[test]
    fn missing_destination_rejected_when_required() {
        let err = ShipmentPolicy::default().destination(None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn missing_destination_randomized_in_range() {
        let policy = ShipmentPolicy {
            require_destination: false,
            delivery_estimate_days: None,
        };
        for _ in 0..200 {
            let destination = policy.destination(None).unwrap();
            assert!(RANDOM_DESTINATION_RANGE.contains(&destination));
        }
    }

    #[test]
    fn estimate_is_offset_from_now() {
        let now = Utc::now();
        let policy = ShipmentPolicy::default();
        assert_eq!(policy.estimated_delivery(now), Some(now + Duration::days(3)));

        let disabled = ShipmentPolicy {
            delivery_estimate_days: None,
            ..policy
        };
        assert_eq!(disabled.estimated_delivery(now), None);
    }
}
