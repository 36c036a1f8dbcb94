//! HTTP request handlers for the booking engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{DateTime, Days, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PromoResolution, apply_promo, check_availability, compute_quote, resolve_promo,
    suggest_alternatives,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{BlockedDate, DateRange, QuoteResult, Reservation};

use super::request::{AvailabilityRequest, BookingPriceRequest, QuoteRequest};
use super::response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, BookingPriceResponse, QuoteResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/availability", post(availability_handler))
        .route("/bookings/price", post(booking_price_handler))
        .with_state(state)
}

/// Handler for POST /quote endpoint.
///
/// Prices the requested event dates and issues a quote that expires after
/// the configured validity period.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let config = state.config();
    let quote = match request
        .date_range()
        .and_then(|range| price_dates(&range, request.distance_miles, config))
    {
        Ok(quote) => quote,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Quote failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let created_at = Utc::now();
    let expires_at = match quote_expiry(created_at, config.business().quote_validity_days) {
        Ok(expires_at) => expires_at,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Quote expiry failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let response = QuoteResponse {
        quote_id: correlation_id,
        created_at,
        expires_at,
        event_start_time: request.event_start_time,
        event_end_time: request.event_end_time,
        quote,
    };

    info!(
        correlation_id = %correlation_id,
        number_of_days = response.quote.number_of_days,
        subtotal = %response.quote.subtotal,
        delivery_pending = response.quote.delivery_pending(),
        duration_us = start_time.elapsed().as_micros(),
        "Quote issued"
    );
    json_response(StatusCode::OK, &response)
}

/// Handler for POST /availability endpoint.
///
/// Reports whether the requested dates are free and, when they are not,
/// suggests nearby windows of the same length.
async fn availability_handler(
    State(state): State<AppState>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing availability request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let range = match request.date_range() {
        Ok(range) => range,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid date range");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let config = state.config();
    let statuses = &config.availability().blocking_statuses;
    let result = check_availability(
        &range,
        &request.reservations,
        &request.blocked_dates,
        statuses,
    );
    let alternatives = if result.available {
        Vec::new()
    } else {
        find_alternatives(&range, &request.reservations, &request.blocked_dates, config)
    };

    info!(
        correlation_id = %correlation_id,
        range = %range,
        available = result.available,
        conflict_count = result.conflict_count,
        blocked_count = result.blocked_count,
        alternatives = alternatives.len(),
        "Availability checked"
    );

    json_response(
        StatusCode::OK,
        &AvailabilityResponse {
            available: result.available,
            conflict_count: result.conflict_count,
            blocked_count: result.blocked_count,
            alternatives,
        },
    )
}

/// Handler for POST /bookings/price endpoint.
///
/// Converts a quote into booking amounts: re-checks the dates, re-prices
/// them, and applies the customer's promo code if it can be used. A promo
/// code that cannot be used is reported back but does not fail the request.
async fn booking_price_handler(
    State(state): State<AppState>,
    payload: Result<Json<BookingPriceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing booking price request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let range = match request.quote.date_range() {
        Ok(range) => range,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid date range");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let availability = check_availability(
        &range,
        &request.reservations,
        &request.blocked_dates,
        &config.availability().blocking_statuses,
    );
    if !availability.available {
        let alternatives =
            find_alternatives(&range, &request.reservations, &request.blocked_dates, config);
        warn!(
            correlation_id = %correlation_id,
            range = %range,
            conflict_count = availability.conflict_count,
            blocked_count = availability.blocked_count,
            "Requested dates unavailable"
        );
        return json_response(
            StatusCode::CONFLICT,
            &ApiError::dates_unavailable(&range, alternatives),
        );
    }

    let quote = match price_dates(&range, request.quote.distance_miles, config) {
        Ok(quote) => quote,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Booking pricing failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let entered_code = request
        .promo_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty());
    let (promo, promo_rejection) = match entered_code {
        None => (None, None),
        Some(code) => match resolve_promo(code, &request.promo_codes, Utc::now()) {
            PromoResolution::Usable(promo) => (Some(promo), None),
            PromoResolution::Rejected(rejection) => {
                warn!(
                    correlation_id = %correlation_id,
                    promo_code = %code,
                    reason = %rejection,
                    "Promo code not applied"
                );
                (None, Some(rejection))
            }
        },
    };

    let amounts = match apply_promo(&quote, config.pricing().deposit_amount, promo.as_ref()) {
        Ok(amounts) => amounts,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Promo composition failed");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        range = %range,
        promo_code = promo.as_ref().map(|p| p.code.as_str()).unwrap_or(""),
        adjusted_total = %amounts.adjusted_total,
        deposit_due_now = %amounts.deposit_due_now,
        "Booking priced"
    );

    json_response(
        StatusCode::OK,
        &BookingPriceResponse {
            quote,
            promo_code: promo.map(|p| p.code),
            promo_message: promo_rejection.as_ref().map(ToString::to_string),
            promo_rejection,
            amounts,
        },
    )
}

/// Prices a date range with the configured rates, delivery policy,
/// discount table and deposit.
fn price_dates(
    range: &DateRange,
    distance_miles: Option<rust_decimal::Decimal>,
    config: &ConfigLoader,
) -> EngineResult<QuoteResult> {
    let pricing = config.pricing();
    compute_quote(
        range,
        &pricing.rates,
        distance_miles,
        &pricing.delivery,
        &pricing.discount_tiers,
        pricing.deposit_amount,
    )
}

/// Returns when a quote issued at `created_at` stops being honoured.
fn quote_expiry(created_at: DateTime<Utc>, validity_days: u32) -> EngineResult<DateTime<Utc>> {
    created_at
        .checked_add_days(Days::new(u64::from(validity_days)))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!(
                "quote issued at {} cannot expire {} days later",
                created_at, validity_days
            ),
        })
}

/// Suggests windows with the same length as `range` using the configured
/// search limits.
fn find_alternatives(
    range: &DateRange,
    reservations: &[Reservation],
    blocked: &[BlockedDate],
    config: &ConfigLoader,
) -> Vec<DateRange> {
    let policy = config.availability();
    suggest_alternatives(
        range,
        range.num_days(),
        reservations,
        blocked,
        &policy.blocking_statuses,
        policy.search_window_days,
        policy.max_suggestions,
    )
}

/// Serializes a JSON body with an explicit content type.
fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("Invalid date range") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, &error)
}
