//! Response types for the booking engine API.
//!
//! This module defines the success bodies for each endpoint and the error
//! response structures used when a request cannot be priced.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::PromoApplication;
use crate::error::EngineError;
use crate::models::{DateRange, PromoRejection, QuoteResult};

/// Response body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Identifier for the stored quote.
    pub quote_id: Uuid,
    /// When the quote was issued.
    pub created_at: DateTime<Utc>,
    /// When the quote stops being honoured.
    pub expires_at: DateTime<Utc>,
    /// Delivery time carried over from the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_start_time: Option<String>,
    /// Pickup time carried over from the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_end_time: Option<String>,
    /// The priced quote.
    pub quote: QuoteResult,
}

/// Response body for the `/availability` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// True when nothing conflicts with the requested dates.
    pub available: bool,
    /// Number of reservations overlapping the requested dates.
    pub conflict_count: usize,
    /// Number of blocked days inside the requested dates.
    pub blocked_count: usize,
    /// Nearby open windows of the same length, when the dates are taken.
    pub alternatives: Vec<DateRange>,
}

/// Response body for the `/bookings/price` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPriceResponse {
    /// The quote the booking is priced from.
    pub quote: QuoteResult,
    /// The promo code that was applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    /// Why an entered promo code was not applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_rejection: Option<PromoRejection>,
    /// Human-readable version of `promo_rejection`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_message: Option<String>,
    /// The final booking amounts.
    pub amounts: PromoApplication,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Open windows to offer instead, for unavailable dates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<DateRange>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            alternatives: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a dates-unavailable error carrying alternative windows.
    pub fn dates_unavailable(range: &DateRange, alternatives: Vec<DateRange>) -> Self {
        Self {
            alternatives,
            ..Self::with_details(
                "DATES_UNAVAILABLE",
                format!("The trailer is not available from {}", range),
                "Another booking or a blocked date overlaps the requested dates",
            )
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPolicy { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidDateRange { .. } | EngineError::InvalidDistance { .. } => {
                ApiErrorResponse {
                    status: StatusCode::BAD_REQUEST,
                    error: ApiError::validation_error(message),
                }
            }
            EngineError::OutsideServiceArea { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "OUTSIDE_SERVICE_AREA",
                    message,
                    "The event location is beyond the area we deliver to",
                ),
            },
            EngineError::InvalidPromo { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("INVALID_PROMO", message),
            },
            EngineError::NegativeBalance { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "NEGATIVE_BALANCE",
                    message,
                    "The rental total does not cover the booking deposit",
                ),
            },
            EngineError::InvalidRate { .. }
            | EngineError::InvalidDeliveryPolicy { .. }
            | EngineError::InvalidDiscountTiers { .. }
            | EngineError::CalculationError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
        assert!(!json.contains("alternatives"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_dates_unavailable_carries_alternatives() {
        let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
        let range = DateRange::new(date(10), date(12)).unwrap();
        let alternative = DateRange::new(date(13), date(15)).unwrap();

        let error = ApiError::dates_unavailable(&range, vec![alternative]);
        assert_eq!(error.code, "DATES_UNAVAILABLE");
        assert!(error.message.contains("2026-01-10 to 2026-01-12"));
        assert_eq!(error.alternatives, vec![alternative]);
    }

    #[test]
    fn test_outside_service_area_maps_to_unprocessable() {
        let engine_error = EngineError::OutsideServiceArea {
            distance_miles: Decimal::from(200),
            max_radius_miles: Decimal::from(150),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "OUTSIDE_SERVICE_AREA");
    }

    #[test]
    fn test_invalid_date_range_maps_to_bad_request() {
        let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
        let engine_error = EngineError::InvalidDateRange {
            start: date(12),
            end: date(10),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
    }
}
