//! Multi-day discount selection.
//!
//! Longer rentals earn a larger discount off the base rental. The discount
//! table is passed in by the caller and validated before use.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::DiscountTier;

/// Rounds a dollar amount to the nearest cent, halves away from zero.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::round_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_cents(Decimal::from_str("10.125").unwrap()), Decimal::from_str("10.13").unwrap());
/// assert_eq!(round_cents(Decimal::from_str("10.124").unwrap()), Decimal::from_str("10.12").unwrap());
/// ```
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Checks that a discount table is well formed.
///
/// The tiers must start at one day, be sorted, contiguous and
/// non-overlapping, leave only the final tier open-ended, and carry
/// fractions within `[0, 1]`.
pub fn validate_discount_tiers(tiers: &[DiscountTier]) -> EngineResult<()> {
    let Some(first) = tiers.first() else {
        return Err(EngineError::InvalidDiscountTiers {
            message: "at least one tier is required".to_string(),
        });
    };
    if first.min_days != 1 {
        return Err(EngineError::InvalidDiscountTiers {
            message: format!("first tier must start at 1 day, got {}", first.min_days),
        });
    }

    let mut expected_start = 1u32;
    for (index, tier) in tiers.iter().enumerate() {
        if tier.fraction < Decimal::ZERO || tier.fraction > Decimal::ONE {
            return Err(EngineError::InvalidDiscountTiers {
                message: format!("tier {} fraction {} is outside [0, 1]", index, tier.fraction),
            });
        }
        if tier.min_days != expected_start {
            return Err(EngineError::InvalidDiscountTiers {
                message: format!(
                    "tier {} starts at {} days but the previous tier ends at {}",
                    index,
                    tier.min_days,
                    expected_start - 1
                ),
            });
        }
        match tier.max_days {
            Some(max_days) if max_days < tier.min_days => {
                return Err(EngineError::InvalidDiscountTiers {
                    message: format!(
                        "tier {} ends at {} days before it starts at {}",
                        index, max_days, tier.min_days
                    ),
                });
            }
            Some(max_days) => {
                expected_start = max_days.saturating_add(1);
            }
            None if index + 1 != tiers.len() => {
                return Err(EngineError::InvalidDiscountTiers {
                    message: format!("only the last tier may be open-ended, tier {} is", index),
                });
            }
            None => {}
        }
    }

    Ok(())
}

/// Returns the discount fraction for a rental of `number_of_days` days.
///
/// Picks the tier whose interval contains the rental length. A length past
/// the last bounded tier gets the largest tier it qualifies for.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::select_discount_tier;
/// use trailer_booking_engine::models::default_discount_tiers;
/// use rust_decimal::Decimal;
///
/// let tiers = default_discount_tiers();
/// assert_eq!(select_discount_tier(&tiers, 2), Decimal::ZERO);
/// assert_eq!(select_discount_tier(&tiers, 3), Decimal::new(10, 2));
/// assert_eq!(select_discount_tier(&tiers, 30), Decimal::new(15, 2));
/// ```
pub fn select_discount_tier(tiers: &[DiscountTier], number_of_days: u32) -> Decimal {
    tiers
        .iter()
        .find(|tier| tier.covers(number_of_days))
        .or_else(|| {
            tiers
                .iter()
                .filter(|tier| tier.min_days <= number_of_days)
                .max_by_key(|tier| tier.min_days)
        })
        .map(|tier| tier.fraction)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_discount_tiers;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_tiers_are_valid() {
        assert!(validate_discount_tiers(&default_discount_tiers()).is_ok());
    }

    #[test]
    fn test_empty_tiers_are_invalid() {
        assert!(matches!(
            validate_discount_tiers(&[]),
            Err(EngineError::InvalidDiscountTiers { .. })
        ));
    }

    #[test]
    fn test_gap_between_tiers_is_invalid() {
        let tiers = vec![
            DiscountTier {
                min_days: 1,
                max_days: Some(2),
                fraction: Decimal::ZERO,
            },
            DiscountTier {
                min_days: 4,
                max_days: None,
                fraction: dec("0.10"),
            },
        ];
        assert!(validate_discount_tiers(&tiers).is_err());
    }

    #[test]
    fn test_overlapping_tiers_are_invalid() {
        let tiers = vec![
            DiscountTier {
                min_days: 1,
                max_days: Some(3),
                fraction: Decimal::ZERO,
            },
            DiscountTier {
                min_days: 3,
                max_days: None,
                fraction: dec("0.10"),
            },
        ];
        assert!(validate_discount_tiers(&tiers).is_err());
    }

    #[test]
    fn test_open_ended_middle_tier_is_invalid() {
        let tiers = vec![
            DiscountTier {
                min_days: 1,
                max_days: None,
                fraction: Decimal::ZERO,
            },
            DiscountTier {
                min_days: 2,
                max_days: None,
                fraction: dec("0.10"),
            },
        ];
        assert!(validate_discount_tiers(&tiers).is_err());
    }

    #[test]
    fn test_fraction_above_one_is_invalid() {
        let tiers = vec![DiscountTier {
            min_days: 1,
            max_days: None,
            fraction: dec("1.5"),
        }];
        assert!(validate_discount_tiers(&tiers).is_err());
    }

    #[test]
    fn test_select_boundaries_of_default_table() {
        let tiers = default_discount_tiers();
        assert_eq!(select_discount_tier(&tiers, 1), Decimal::ZERO);
        assert_eq!(select_discount_tier(&tiers, 2), Decimal::ZERO);
        assert_eq!(select_discount_tier(&tiers, 3), dec("0.10"));
        assert_eq!(select_discount_tier(&tiers, 4), dec("0.10"));
        assert_eq!(select_discount_tier(&tiers, 5), dec("0.15"));
        assert_eq!(select_discount_tier(&tiers, 7), dec("0.15"));
    }

    #[test]
    fn test_length_past_bounded_table_uses_largest_tier() {
        let tiers = vec![
            DiscountTier {
                min_days: 1,
                max_days: Some(2),
                fraction: Decimal::ZERO,
            },
            DiscountTier {
                min_days: 3,
                max_days: Some(4),
                fraction: dec("0.10"),
            },
        ];
        assert_eq!(select_discount_tier(&tiers, 9), dec("0.10"));
    }

    #[test]
    fn test_round_cents_half_rounds_up() {
        assert_eq!(round_cents(dec("0.005")), dec("0.01"));
        assert_eq!(round_cents(dec("202.50")), dec("202.50"));
        assert_eq!(round_cents(dec("33.333")), dec("33.33"));
    }
}
