//! Pricing and availability engine for bathroom-trailer rentals.
//!
//! This crate prices rental quotes (day-type rates, multi-day discounts and
//! distance-based delivery), checks requested dates against existing
//! reservations and blocked days, and composes promo codes into the final
//! booking amounts.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
