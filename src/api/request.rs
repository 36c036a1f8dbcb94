//! Request types for the booking engine API.
//!
//! This module defines the JSON request structures for the `/quote`,
//! `/availability` and `/bookings/price` endpoints. Persistence lives outside
//! the engine, so callers send the reservations, blocked dates and promo
//! records they have loaded along with each request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{BlockedDate, DateRange, PromoCode, Reservation};

/// Contact details captured with a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    /// The customer's name.
    pub name: String,
    /// The customer's email address.
    pub email: String,
    /// The customer's phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request body for the `/quote` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The first day of the event (inclusive).
    pub event_start_date: NaiveDate,
    /// The last day of the event (inclusive).
    pub event_end_date: NaiveDate,
    /// Delivery time on the first day, carried through but not priced.
    #[serde(default)]
    pub event_start_time: Option<String>,
    /// Pickup time on the last day, carried through but not priced.
    #[serde(default)]
    pub event_end_time: Option<String>,
    /// Distance to the event as returned by the geocoding lookup.
    #[serde(default)]
    pub distance_miles: Option<Decimal>,
    /// Who asked for the quote.
    #[serde(default)]
    pub contact: Option<ContactRequest>,
}

impl QuoteRequest {
    /// Returns the requested event dates as a validated range.
    pub fn date_range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.event_start_date, self.event_end_date)
    }
}

/// Request body for the `/availability` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// The first requested day (inclusive).
    pub start_date: NaiveDate,
    /// The last requested day (inclusive).
    pub end_date: NaiveDate,
    /// Existing reservations.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    /// Administratively blocked days.
    #[serde(default)]
    pub blocked_dates: Vec<BlockedDate>,
}

impl AvailabilityRequest {
    /// Returns the requested dates as a validated range.
    pub fn date_range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Request body for the `/bookings/price` endpoint.
///
/// Converts an accepted quote into booking amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPriceRequest {
    /// The quote being converted.
    pub quote: QuoteRequest,
    /// Existing reservations to check the dates against.
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    /// Administratively blocked days.
    #[serde(default)]
    pub blocked_dates: Vec<BlockedDate>,
    /// The promo code the customer entered, if any.
    #[serde(default)]
    pub promo_code: Option<String>,
    /// Promo code records to look the entered code up in.
    #[serde(default)]
    pub promo_codes: Vec<PromoCode>,
}
