//! Quote calculation.
//!
//! Combines day-type counting, the multi-day discount and the delivery fee
//! into a complete [`QuoteResult`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, DayLine, DeliveryPolicy, DiscountTier, QuoteResult, RateTable};

use super::{
    DayType, calculate_delivery_fee, count_day_types, get_day_type, round_cents,
    select_discount_tier, validate_discount_tiers,
};

/// Prices a rental of the trailer.
///
/// # Arguments
///
/// * `range` - The rental dates (inclusive)
/// * `rates` - Weekday and weekend daily rates
/// * `distance_miles` - Distance to the event, or `None` if not yet known
/// * `delivery` - The delivery pricing policy
/// * `discount_tiers` - The multi-day discount table
/// * `deposit_amount` - The fixed deposit taken at booking
///
/// # Calculation
///
/// 1. Every day in the range is classified as weekday or weekend
/// 2. `base_rental = weekdays * weekday_rate + weekend days * weekend_rate`
/// 3. The discount tier containing the rental length is applied and rounded to cents
/// 4. The delivery fee is added (zero while the distance is unknown)
/// 5. `balance_due = subtotal - deposit_amount`
///
/// # Errors
///
/// - [`EngineError::InvalidRate`], [`EngineError::InvalidDeliveryPolicy`] or
///   [`EngineError::InvalidDiscountTiers`] for malformed pricing inputs
/// - [`EngineError::OutsideServiceArea`] when the event is beyond the service radius
/// - [`EngineError::NegativeBalance`] when the subtotal does not cover the deposit
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::compute_quote;
/// use trailer_booking_engine::models::{DateRange, DeliveryPolicy, RateTable, default_discount_tiers};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Monday 2026-01-12 through Wednesday 2026-01-14
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
/// ).unwrap();
/// let rates = RateTable {
///     weekday_rate: Decimal::from(450),
///     weekend_rate: Decimal::from(450),
/// };
/// let delivery = DeliveryPolicy {
///     free_radius_miles: Decimal::from(50),
///     max_radius_miles: Decimal::from(150),
///     per_mile_rate: Decimal::from(2),
/// };
///
/// let quote = compute_quote(
///     &range,
///     &rates,
///     None,
///     &delivery,
///     &default_discount_tiers(),
///     Decimal::from(100),
/// ).unwrap();
///
/// assert_eq!(quote.base_rental, Decimal::from(1350));
/// assert_eq!(quote.discount_amount, Decimal::from(135));
/// assert_eq!(quote.rental_after_discount, Decimal::from(1215));
/// ```
pub fn compute_quote(
    range: &DateRange,
    rates: &RateTable,
    distance_miles: Option<Decimal>,
    delivery: &DeliveryPolicy,
    discount_tiers: &[DiscountTier],
    deposit_amount: Decimal,
) -> EngineResult<QuoteResult> {
    rates.validate()?;
    delivery.validate()?;
    validate_discount_tiers(discount_tiers)?;
    if deposit_amount < Decimal::ZERO {
        return Err(EngineError::InvalidRate {
            field: "deposit_amount".to_string(),
            message: format!("deposit must not be negative, got {}", deposit_amount),
        });
    }

    let counts = count_day_types(range);
    let day_lines: Vec<DayLine> = range
        .days()
        .map(|date| {
            let day_type = get_day_type(date);
            let rate = match day_type {
                DayType::Weekday => rates.weekday_rate,
                DayType::Weekend => rates.weekend_rate,
            };
            DayLine {
                date,
                day_type,
                rate,
            }
        })
        .collect();

    let base_rental = round_cents(
        Decimal::from(counts.weekday_count) * rates.weekday_rate
            + Decimal::from(counts.weekend_count) * rates.weekend_rate,
    );

    let discount_percent = select_discount_tier(discount_tiers, counts.number_of_days);
    let discount_amount = round_cents(base_rental * discount_percent);
    let rental_after_discount = base_rental - discount_amount;

    let delivery_fee = calculate_delivery_fee(distance_miles, delivery)?;

    let subtotal = rental_after_discount + delivery_fee.fee.unwrap_or(Decimal::ZERO);
    let balance_due = subtotal - deposit_amount;
    if balance_due < Decimal::ZERO {
        return Err(EngineError::NegativeBalance {
            subtotal,
            deposit: deposit_amount,
        });
    }

    Ok(QuoteResult {
        number_of_days: counts.number_of_days,
        weekday_count: counts.weekday_count,
        weekend_count: counts.weekend_count,
        base_rental,
        discount_percent,
        discount_amount,
        rental_after_discount,
        delivery_fee: delivery_fee.fee,
        delivery_fee_note: delivery_fee.note,
        subtotal,
        deposit_due: deposit_amount,
        balance_due,
        day_lines,
    })
}
