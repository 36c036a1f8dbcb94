//! Delivery fee calculation.
//!
//! Delivery inside the free radius costs nothing, every mile past it is
//! charged per mile, and any address past the service radius is refused
//! outright rather than priced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::DeliveryPolicy;

use super::round_cents;

/// Note attached to a quote whose delivery distance is not yet known.
pub const DELIVERY_PENDING_NOTE: &str =
    "Delivery fee will be calculated once the event address is confirmed";

/// The outcome of pricing delivery for a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFee {
    /// The fee, or `None` when no distance was supplied.
    pub fee: Option<Decimal>,
    /// Explanation when the fee is not yet known.
    pub note: Option<String>,
}

/// Calculates the delivery fee for a distance under a delivery policy.
///
/// # Arguments
///
/// * `distance_miles` - Distance to the event, or `None` if not yet geocoded
/// * `policy` - The free radius, service radius and per-mile rate
///
/// # Returns
///
/// - A pending fee with [`DELIVERY_PENDING_NOTE`] when `distance_miles` is `None`
/// - A zero fee within the free radius
/// - `(distance - free radius) * per-mile rate`, rounded to cents, beyond it
///
/// # Errors
///
/// - [`EngineError::OutsideServiceArea`] when the distance exceeds the service radius
/// - [`EngineError::InvalidDistance`] when the distance is negative
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::calculate_delivery_fee;
/// use trailer_booking_engine::models::DeliveryPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = DeliveryPolicy {
///     free_radius_miles: Decimal::from(50),
///     max_radius_miles: Decimal::from(150),
///     per_mile_rate: Decimal::from(2),
/// };
///
/// let delivery = calculate_delivery_fee(Some(Decimal::from(75)), &policy).unwrap();
/// assert_eq!(delivery.fee, Some(Decimal::from(50)));
/// ```
pub fn calculate_delivery_fee(
    distance_miles: Option<Decimal>,
    policy: &DeliveryPolicy,
) -> EngineResult<DeliveryFee> {
    let Some(distance_miles) = distance_miles else {
        return Ok(DeliveryFee {
            fee: None,
            note: Some(DELIVERY_PENDING_NOTE.to_string()),
        });
    };

    if distance_miles < Decimal::ZERO {
        return Err(EngineError::InvalidDistance {
            distance_miles,
            message: "distance must not be negative".to_string(),
        });
    }

    if distance_miles > policy.max_radius_miles {
        return Err(EngineError::OutsideServiceArea {
            distance_miles,
            max_radius_miles: policy.max_radius_miles,
        });
    }

    let fee = if distance_miles <= policy.free_radius_miles {
        Decimal::ZERO
    } else {
        round_cents((distance_miles - policy.free_radius_miles) * policy.per_mile_rate)
    };

    Ok(DeliveryFee {
        fee: Some(fee),
        note: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_policy() -> DeliveryPolicy {
        DeliveryPolicy {
            free_radius_miles: dec("50"),
            max_radius_miles: dec("150"),
            per_mile_rate: dec("2"),
        }
    }

    #[test]
    fn test_missing_distance_leaves_fee_pending() {
        let delivery = calculate_delivery_fee(None, &create_test_policy()).unwrap();
        assert_eq!(delivery.fee, None);
        assert_eq!(delivery.note.as_deref(), Some(DELIVERY_PENDING_NOTE));
    }

    #[test]
    fn test_inside_free_radius_is_free() {
        let delivery = calculate_delivery_fee(Some(dec("12.4")), &create_test_policy()).unwrap();
        assert_eq!(delivery.fee, Some(Decimal::ZERO));
        assert!(delivery.note.is_none());
    }

    #[test]
    fn test_exactly_free_radius_is_free() {
        let delivery = calculate_delivery_fee(Some(dec("50")), &create_test_policy()).unwrap();
        assert_eq!(delivery.fee, Some(Decimal::ZERO));
    }

    #[test]
    fn test_beyond_free_radius_charges_per_mile() {
        let delivery = calculate_delivery_fee(Some(dec("75")), &create_test_policy()).unwrap();
        assert_eq!(delivery.fee, Some(dec("50")));
    }

    #[test]
    fn test_fractional_miles_round_to_cents() {
        let policy = DeliveryPolicy {
            per_mile_rate: dec("1.75"),
            ..create_test_policy()
        };
        // 10.333 miles * $1.75 = $18.08275
        let delivery = calculate_delivery_fee(Some(dec("60.333")), &policy).unwrap();
        assert_eq!(delivery.fee, Some(dec("18.08")));
    }

    #[test]
    fn test_exactly_max_radius_is_priced() {
        let delivery = calculate_delivery_fee(Some(dec("150")), &create_test_policy()).unwrap();
        assert_eq!(delivery.fee, Some(dec("200")));
    }

    #[test]
    fn test_beyond_max_radius_is_refused() {
        let result = calculate_delivery_fee(Some(dec("150.1")), &create_test_policy());

        match result {
            Err(EngineError::OutsideServiceArea {
                distance_miles,
                max_radius_miles,
            }) => {
                assert_eq!(distance_miles, dec("150.1"));
                assert_eq!(max_radius_miles, dec("150"));
            }
            _ => panic!("Expected OutsideServiceArea error"),
        }
    }

    #[test]
    fn test_negative_distance_is_invalid() {
        let result = calculate_delivery_fee(Some(dec("-1")), &create_test_policy());
        assert!(matches!(result, Err(EngineError::InvalidDistance { .. })));
    }
}
