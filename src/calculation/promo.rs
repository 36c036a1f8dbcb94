//! Promo code composition.
//!
//! Applies an already-validated promo code to a quote's totals. Looking the
//! code up and checking that it is still usable happens first, through
//! [`resolve_promo`]; [`apply_promo`] assumes it is given a usable code.
//!
//! ## Promo kinds
//!
//! - **Percentage:** takes `percent` off the subtotal, capped so the total
//!   never drops below the deposit
//! - **Full bypass:** no discount, the online deposit is waived and treated
//!   as settled out-of-band
//! - **Full discount:** total, deposit and balance all become zero

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PromoCode, PromoKind, PromoRejection, QuoteResult};

use super::round_cents;

/// Booking amounts after a promo code has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoApplication {
    /// The booking total after the promo.
    pub adjusted_total: Decimal,
    /// The deposit to collect online now.
    pub deposit_due_now: Decimal,
    /// The amount left to pay after the deposit.
    pub balance_due: Decimal,
    /// Dollars taken off the total by the promo.
    pub discount_applied: Decimal,
    /// Deposit waived by a bypass code. Zero for every other kind.
    pub deposit_waived: Decimal,
    /// True when the deposit no longer needs to be collected online.
    pub deposit_satisfied: bool,
}

/// The outcome of looking up a promo code typed in by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromoResolution {
    /// The code exists and can be used.
    Usable(PromoCode),
    /// The code cannot be used; the booking proceeds without a promo.
    Rejected(PromoRejection),
}

/// Finds a promo code in `catalog` and checks it is usable at `now`.
///
/// Codes are matched case-insensitively after trimming whitespace.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::{resolve_promo, PromoResolution};
/// use trailer_booking_engine::models::{PromoCode, PromoKind, PromoRejection};
/// use chrono::Utc;
///
/// let catalog = vec![PromoCode {
///     code: "CASHPAY".to_string(),
///     kind: PromoKind::FullBypass,
///     is_active: true,
///     expires_at: None,
///     max_uses: None,
///     current_uses: 0,
/// }];
///
/// assert!(matches!(resolve_promo(" cashpay ", &catalog, Utc::now()), PromoResolution::Usable(_)));
/// assert!(matches!(
///     resolve_promo("NOPE", &catalog, Utc::now()),
///     PromoResolution::Rejected(PromoRejection::Unknown { .. })
/// ));
/// ```
pub fn resolve_promo(code: &str, catalog: &[PromoCode], now: DateTime<Utc>) -> PromoResolution {
    let wanted = code.trim();
    let Some(promo) = catalog
        .iter()
        .find(|promo| promo.code.eq_ignore_ascii_case(wanted))
    else {
        return PromoResolution::Rejected(PromoRejection::Unknown {
            code: wanted.to_string(),
        });
    };

    match promo.check_usable(now) {
        Ok(()) => PromoResolution::Usable(promo.clone()),
        Err(rejection) => PromoResolution::Rejected(rejection),
    }
}

/// Applies a promo code to a quote.
///
/// # Arguments
///
/// * `quote` - The priced quote
/// * `deposit_base` - The deposit normally taken at booking
/// * `promo` - A usable promo code, or `None`
///
/// # Errors
///
/// Returns [`EngineError::InvalidPromo`] when the combination would produce
/// a negative total or balance, such as a subtotal below the deposit or a
/// percentage outside `(0, 1]`. Without a promo, a subtotal below the
/// deposit returns [`EngineError::NegativeBalance`]. Such inputs are
/// rejected, never clamped.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::apply_promo;
/// use trailer_booking_engine::models::{PromoCode, PromoKind, QuoteResult};
/// use rust_decimal::Decimal;
///
/// # let quote = QuoteResult {
/// #     number_of_days: 1, weekday_count: 1, weekend_count: 0,
/// #     base_rental: Decimal::from(500), discount_percent: Decimal::ZERO,
/// #     discount_amount: Decimal::ZERO, rental_after_discount: Decimal::from(500),
/// #     delivery_fee: Some(Decimal::ZERO), delivery_fee_note: None,
/// #     subtotal: Decimal::from(500), deposit_due: Decimal::from(100),
/// #     balance_due: Decimal::from(400), day_lines: vec![],
/// # };
/// let promo = PromoCode {
///     code: "SPRING20".to_string(),
///     kind: PromoKind::Percentage { percent: Decimal::new(20, 2) },
///     is_active: true,
///     expires_at: None,
///     max_uses: None,
///     current_uses: 0,
/// };
///
/// let applied = apply_promo(&quote, Decimal::from(100), Some(&promo)).unwrap();
/// assert_eq!(applied.discount_applied, Decimal::from(100));
/// assert_eq!(applied.adjusted_total, Decimal::from(400));
/// assert_eq!(applied.balance_due, Decimal::from(300));
/// ```
pub fn apply_promo(
    quote: &QuoteResult,
    deposit_base: Decimal,
    promo: Option<&PromoCode>,
) -> EngineResult<PromoApplication> {
    let subtotal = quote.subtotal;

    let Some(promo) = promo else {
        let balance_due = subtotal - deposit_base;
        if balance_due < Decimal::ZERO {
            return Err(EngineError::NegativeBalance {
                subtotal,
                deposit: deposit_base,
            });
        }
        return Ok(PromoApplication {
            adjusted_total: subtotal,
            deposit_due_now: deposit_base,
            balance_due,
            discount_applied: Decimal::ZERO,
            deposit_waived: Decimal::ZERO,
            deposit_satisfied: false,
        });
    };

    let application = match promo.kind {
        PromoKind::Percentage { percent } => {
            if percent <= Decimal::ZERO || percent > Decimal::ONE {
                return Err(EngineError::InvalidPromo {
                    code: promo.code.clone(),
                    message: format!("percentage {} is outside (0, 1]", percent),
                });
            }
            let headroom = subtotal - deposit_base;
            let discount = round_cents(subtotal * percent).min(headroom);
            let adjusted_total = subtotal - discount;
            PromoApplication {
                adjusted_total,
                deposit_due_now: deposit_base,
                balance_due: adjusted_total - deposit_base,
                discount_applied: discount,
                deposit_waived: Decimal::ZERO,
                deposit_satisfied: false,
            }
        }
        PromoKind::FullBypass => PromoApplication {
            adjusted_total: subtotal,
            deposit_due_now: Decimal::ZERO,
            balance_due: subtotal - deposit_base,
            discount_applied: Decimal::ZERO,
            deposit_waived: deposit_base,
            deposit_satisfied: true,
        },
        PromoKind::FullDiscount => PromoApplication {
            adjusted_total: Decimal::ZERO,
            deposit_due_now: Decimal::ZERO,
            balance_due: Decimal::ZERO,
            discount_applied: subtotal,
            deposit_waived: Decimal::ZERO,
            deposit_satisfied: true,
        },
    };

    if application.adjusted_total < Decimal::ZERO || application.balance_due < Decimal::ZERO {
        return Err(EngineError::InvalidPromo {
            code: promo.code.clone(),
            message: format!(
                "subtotal {} does not cover the deposit {}",
                subtotal, deposit_base
            ),
        });
    }

    Ok(application)
}
