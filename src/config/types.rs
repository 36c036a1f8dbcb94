//! Configuration types for the booking engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{
    DEFAULT_BLOCKING_STATUSES, DEFAULT_MAX_SUGGESTIONS, DEFAULT_SEARCH_WINDOW_DAYS,
};
use crate::models::{DeliveryPolicy, DiscountTier, RateTable, ReservationStatus};

/// Metadata about the rental business.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessMetadata {
    /// The trading name of the business.
    pub name: String,
    /// ISO currency code all amounts are quoted in.
    pub currency: String,
    /// Number of days a quote stays valid after it is issued.
    #[serde(default = "default_quote_validity_days")]
    pub quote_validity_days: u32,
}

fn default_quote_validity_days() -> u32 {
    7
}

/// Pricing configuration from pricing.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Daily rental rates.
    pub rates: RateTable,
    /// Delivery fee policy.
    pub delivery: DeliveryPolicy,
    /// Multi-day discount table.
    pub discount_tiers: Vec<DiscountTier>,
    /// Fixed deposit taken at booking.
    pub deposit_amount: Decimal,
}

/// Availability configuration from availability.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityPolicy {
    /// Reservation statuses that occupy dates.
    #[serde(default = "default_blocking_statuses")]
    pub blocking_statuses: Vec<ReservationStatus>,
    /// How many start days ahead alternative windows are searched.
    #[serde(default = "default_search_window_days")]
    pub search_window_days: u32,
    /// How many alternative windows are suggested.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_blocking_statuses() -> Vec<ReservationStatus> {
    DEFAULT_BLOCKING_STATUSES.to_vec()
}

fn default_search_window_days() -> u32 {
    DEFAULT_SEARCH_WINDOW_DAYS
}

fn default_max_suggestions() -> usize {
    DEFAULT_MAX_SUGGESTIONS
}

impl Default for AvailabilityPolicy {
    fn default() -> Self {
        Self {
            blocking_statuses: default_blocking_statuses(),
            search_window_days: default_search_window_days(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

/// The complete booking configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct BookingConfig {
    metadata: BusinessMetadata,
    pricing: PricingConfig,
    availability: AvailabilityPolicy,
}

impl BookingConfig {
    /// Creates a new BookingConfig from its component parts.
    pub fn new(
        metadata: BusinessMetadata,
        pricing: PricingConfig,
        availability: AvailabilityPolicy,
    ) -> Self {
        Self {
            metadata,
            pricing,
            availability,
        }
    }

    /// Returns the business metadata.
    pub fn business(&self) -> &BusinessMetadata {
        &self.metadata
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Returns the availability policy.
    pub fn availability(&self) -> &AvailabilityPolicy {
        &self.availability
    }
}
