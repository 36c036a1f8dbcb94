//! Error types for the trailer booking engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that makes a pricing or promo request invalid.
//! Expected business outcomes (dates already taken, a promo code that cannot
//! be used) are not errors; they are returned as ordinary values.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the trailer booking engine.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date range ended before it started.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// A rental rate was negative or otherwise unusable.
    #[error("Invalid rate '{field}': {message}")]
    InvalidRate {
        /// The rate field that was invalid.
        field: String,
        /// A description of what made the rate invalid.
        message: String,
    },

    /// The delivery policy was internally inconsistent.
    #[error("Invalid delivery policy: {message}")]
    InvalidDeliveryPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// The discount tier table was malformed.
    #[error("Invalid discount tiers: {message}")]
    InvalidDiscountTiers {
        /// A description of what made the tier table invalid.
        message: String,
    },

    /// A business or availability setting was out of range.
    #[error("Invalid setting '{field}': {message}")]
    InvalidPolicy {
        /// The setting that was invalid.
        field: String,
        /// A description of what made the setting invalid.
        message: String,
    },

    /// A delivery distance could not be used for pricing.
    #[error("Invalid delivery distance {distance_miles}: {message}")]
    InvalidDistance {
        /// The distance that was supplied.
        distance_miles: Decimal,
        /// A description of what made the distance invalid.
        message: String,
    },

    /// The delivery address lies beyond the maximum service radius.
    #[error(
        "Delivery location is {distance_miles} miles away, outside the {max_radius_miles} mile service area"
    )]
    OutsideServiceArea {
        /// The distance to the delivery address.
        distance_miles: Decimal,
        /// The maximum radius the business serves.
        max_radius_miles: Decimal,
    },

    /// Base pricing produced a subtotal smaller than the deposit.
    #[error("Balance due would be negative: subtotal {subtotal} is below deposit {deposit}")]
    NegativeBalance {
        /// The computed subtotal.
        subtotal: Decimal,
        /// The configured deposit amount.
        deposit: Decimal,
    },

    /// A promo code could not be composed with the quote.
    #[error("Invalid promo code '{code}': {message}")]
    InvalidPromo {
        /// The promo code.
        code: String,
        /// A description of what made the promo unusable.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: start 2026-03-10 is after end 2026-03-08"
        );
    }

    #[test]
    fn test_outside_service_area_displays_distances() {
        let error = EngineError::OutsideServiceArea {
            distance_miles: Decimal::from_str("180").unwrap(),
            max_radius_miles: Decimal::from_str("150").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Delivery location is 180 miles away, outside the 150 mile service area"
        );
    }

    #[test]
    fn test_invalid_promo_displays_code_and_message() {
        let error = EngineError::InvalidPromo {
            code: "SPRING20".to_string(),
            message: "subtotal is below the deposit".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid promo code 'SPRING20': subtotal is below the deposit"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_negative_balance() -> EngineResult<()> {
            Err(EngineError::NegativeBalance {
                subtotal: Decimal::from(50),
                deposit: Decimal::from(100),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_negative_balance()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
