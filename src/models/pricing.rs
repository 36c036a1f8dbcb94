//! Pricing inputs: rental rates, discount tiers and delivery policy.
//!
//! These values normally come from the business's pricing configuration but
//! are passed explicitly into every calculation so the engine stays a
//! deterministic function of its arguments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Daily rental rates by day type.
///
/// Friday, Saturday and Sunday are charged at the weekend rate; Monday
/// through Thursday at the weekday rate.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::models::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable {
///     weekday_rate: Decimal::from(450),
///     weekend_rate: Decimal::from(550),
/// };
/// assert!(rates.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// The daily rate for Monday through Thursday.
    pub weekday_rate: Decimal,
    /// The daily rate for Friday through Sunday.
    pub weekend_rate: Decimal,
}

impl RateTable {
    /// Checks that both rates are non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, rate) in [
            ("weekday_rate", self.weekday_rate),
            ("weekend_rate", self.weekend_rate),
        ] {
            if rate < Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    field: field.to_string(),
                    message: format!("rate must not be negative, got {}", rate),
                });
            }
        }
        Ok(())
    }
}

/// A multi-day discount band.
///
/// A tier covers every rental length from `min_days` through `max_days`
/// inclusive; a `max_days` of `None` means the tier is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// The shortest rental length this tier applies to.
    pub min_days: u32,
    /// The longest rental length this tier applies to, if bounded.
    #[serde(default)]
    pub max_days: Option<u32>,
    /// The fraction of the base rental taken off (0.10 for 10%).
    pub fraction: Decimal,
}

impl DiscountTier {
    /// Returns true if a rental of `num_days` days falls within this tier.
    pub fn covers(&self, num_days: u32) -> bool {
        num_days >= self.min_days && self.max_days.is_none_or(|max| num_days <= max)
    }
}

/// Returns the standard discount table: none for 1-2 days, 10% for 3-4 days
/// and 15% for 5 days or more.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::models::default_discount_tiers;
///
/// let tiers = default_discount_tiers();
/// assert_eq!(tiers.len(), 3);
/// assert!(tiers[2].max_days.is_none());
/// ```
pub fn default_discount_tiers() -> Vec<DiscountTier> {
    vec![
        DiscountTier {
            min_days: 1,
            max_days: Some(2),
            fraction: Decimal::ZERO,
        },
        DiscountTier {
            min_days: 3,
            max_days: Some(4),
            fraction: Decimal::new(10, 2),
        },
        DiscountTier {
            min_days: 5,
            max_days: None,
            fraction: Decimal::new(15, 2),
        },
    ]
}

/// Distance-based delivery pricing.
///
/// Deliveries within `free_radius_miles` cost nothing, every mile beyond it
/// is charged at `per_mile_rate`, and nothing past `max_radius_miles` is
/// served at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPolicy {
    /// Radius within which delivery is free.
    pub free_radius_miles: Decimal,
    /// Radius beyond which requests are refused.
    pub max_radius_miles: Decimal,
    /// Charge per mile beyond the free radius.
    pub per_mile_rate: Decimal,
}

impl DeliveryPolicy {
    /// Checks that radii and rate are non-negative and the free radius does
    /// not exceed the service radius.
    pub fn validate(&self) -> EngineResult<()> {
        if self.free_radius_miles < Decimal::ZERO {
            return Err(EngineError::InvalidDeliveryPolicy {
                message: "free radius must not be negative".to_string(),
            });
        }
        if self.free_radius_miles > self.max_radius_miles {
            return Err(EngineError::InvalidDeliveryPolicy {
                message: format!(
                    "free radius {} exceeds maximum radius {}",
                    self.free_radius_miles, self.max_radius_miles
                ),
            });
        }
        if self.per_mile_rate < Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                field: "per_mile_rate".to_string(),
                message: format!("rate must not be negative, got {}", self.per_mile_rate),
            });
        }
        Ok(())
    }
}
