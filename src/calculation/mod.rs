//! Calculation logic for the trailer booking engine.
//!
//! This module contains the pure functions behind quoting and booking:
//! day-type detection and counting, multi-day discount selection, delivery
//! fee pricing, quote assembly, availability checking with alternative date
//! suggestions, and promo code composition.

mod availability;
mod day_detection;
mod delivery;
mod discount;
mod promo;
mod quote;

pub use availability::{
    AvailabilityResult, DEFAULT_BLOCKING_STATUSES, DEFAULT_MAX_SUGGESTIONS,
    DEFAULT_SEARCH_WINDOW_DAYS, check_availability, ranges_conflict, suggest_alternatives,
};
pub use day_detection::{DayType, DayTypeCounts, count_day_types, get_day_type};
pub use delivery::{DELIVERY_PENDING_NOTE, DeliveryFee, calculate_delivery_fee};
pub use discount::{round_cents, select_discount_tier, validate_discount_tiers};
pub use promo::{PromoApplication, PromoResolution, apply_promo, resolve_promo};
pub use quote::compute_quote;
