//! HTTP API module for the trailer booking engine.
//!
//! This module exposes quoting, availability checks and booking pricing as
//! stateless REST endpoints. Reservations, blocked dates and promo records
//! are supplied by the caller in each request.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AvailabilityRequest, BookingPriceRequest, ContactRequest, QuoteRequest};
pub use response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, BookingPriceResponse, QuoteResponse,
};
pub use state::AppState;
