//! Quote result models.
//!
//! This module contains the [`QuoteResult`] type that captures every output of
//! a pricing calculation, together with the per-day [`DayLine`] breakdown.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;

/// A single rental day and the rate charged for it.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::DayType;
/// use trailer_booking_engine::models::DayLine;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let line = DayLine {
///     date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     day_type: DayType::Weekend,
///     rate: Decimal::from(550),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLine {
    /// The calendar day.
    pub date: NaiveDate,
    /// Whether the day is charged at the weekday or weekend rate.
    pub day_type: DayType,
    /// The rate charged for the day.
    pub rate: Decimal,
}

/// The complete result of pricing a rental.
///
/// Produced fresh by every call to
/// [`compute_quote`](crate::calculation::compute_quote); never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Total rental days, counting both ends of the range.
    pub number_of_days: u32,
    /// Days charged at the weekday rate (Monday through Thursday).
    pub weekday_count: u32,
    /// Days charged at the weekend rate (Friday through Sunday).
    pub weekend_count: u32,
    /// Rental before any multi-day discount.
    pub base_rental: Decimal,
    /// The multi-day discount fraction that applied (0.10 for 10%).
    pub discount_percent: Decimal,
    /// The multi-day discount in dollars, rounded to cents.
    pub discount_amount: Decimal,
    /// Rental after the multi-day discount.
    pub rental_after_discount: Decimal,
    /// Delivery fee, or `None` when the distance is not yet known.
    pub delivery_fee: Option<Decimal>,
    /// Explanation shown when the delivery fee is not yet known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee_note: Option<String>,
    /// Rental after discount plus delivery.
    pub subtotal: Decimal,
    /// The fixed deposit due at booking.
    pub deposit_due: Decimal,
    /// Amount remaining after the deposit.
    pub balance_due: Decimal,
    /// One line per rental day, in date order.
    pub day_lines: Vec<DayLine>,
}

impl QuoteResult {
    /// Returns true if the delivery fee still has to be calculated.
    pub fn delivery_pending(&self) -> bool {
        self.delivery_fee.is_none()
    }
}
