//! Core data models for the trailer booking engine.
//!
//! This module contains the value types the pricing and availability
//! calculations consume and produce. None of them are mutated in place.

mod date_range;
mod pricing;
mod promo;
mod quote;
mod reservation;

pub use date_range::DateRange;
pub use pricing::{DeliveryPolicy, DiscountTier, RateTable, default_discount_tiers};
pub use promo::{PromoCode, PromoKind, PromoRejection};
pub use quote::{DayLine, QuoteResult};
pub use reservation::{BlockedDate, Reservation, ReservationStatus};
