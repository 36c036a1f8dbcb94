//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading booking
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::calculation::validate_discount_tiers;
use crate::error::{EngineError, EngineResult};

use crate::models::ReservationStatus;

use super::types::{AvailabilityPolicy, BookingConfig, BusinessMetadata, PricingConfig};

/// Longest a quote may stay valid, in days.
pub const MAX_QUOTE_VALIDITY_DAYS: u32 = 365;

/// Loads and provides access to booking configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── business.yaml      # Business name, currency, quote validity
/// ├── pricing.yaml       # Rates, delivery policy, discount tiers, deposit
/// └── availability.yaml  # Optional: blocking statuses and suggestion limits
/// ```
///
/// # Example
///
/// ```no_run
/// use trailer_booking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Weekday rate: ${}", loader.pricing().rates.weekday_rate);
/// # Ok::<(), trailer_booking_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BookingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `business.yaml` or `pricing.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The pricing values fail validation
    /// - The quote validity or blocking statuses are out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<BusinessMetadata>(&path.join("business.yaml"))?;
        let pricing = Self::load_yaml::<PricingConfig>(&path.join("pricing.yaml"))?;

        let availability_path = path.join("availability.yaml");
        let availability = if availability_path.exists() {
            Self::load_yaml::<AvailabilityPolicy>(&availability_path)?
        } else {
            AvailabilityPolicy::default()
        };

        Self::from_parts(metadata, pricing, availability)
    }

    /// Builds a loader from already-parsed configuration, validating it.
    pub fn from_parts(
        metadata: BusinessMetadata,
        pricing: PricingConfig,
        availability: AvailabilityPolicy,
    ) -> EngineResult<Self> {
        pricing.rates.validate()?;
        pricing.delivery.validate()?;
        validate_discount_tiers(&pricing.discount_tiers)?;
        if pricing.deposit_amount < Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                field: "deposit_amount".to_string(),
                message: format!("deposit must not be negative, got {}", pricing.deposit_amount),
            });
        }

        if metadata.quote_validity_days == 0
            || metadata.quote_validity_days > MAX_QUOTE_VALIDITY_DAYS
        {
            return Err(EngineError::InvalidPolicy {
                field: "quote_validity_days".to_string(),
                message: format!(
                    "must be between 1 and {}, got {}",
                    MAX_QUOTE_VALIDITY_DAYS, metadata.quote_validity_days
                ),
            });
        }
        if availability
            .blocking_statuses
            .contains(&ReservationStatus::Cancelled)
        {
            return Err(EngineError::InvalidPolicy {
                field: "blocking_statuses".to_string(),
                message: "cancelled reservations cannot block dates".to_string(),
            });
        }

        Ok(Self {
            config: BookingConfig::new(metadata, pricing, availability),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying booking configuration.
    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Returns the business metadata.
    pub fn business(&self) -> &BusinessMetadata {
        self.config.business()
    }

    /// Returns the pricing configuration.
    pub fn pricing(&self) -> &PricingConfig {
        self.config.pricing()
    }

    /// Returns the availability policy.
    pub fn availability(&self) -> &AvailabilityPolicy {
        self.config.availability()
    }
}
