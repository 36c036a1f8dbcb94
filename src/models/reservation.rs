//! Existing reservations and administrative date blocks.
//!
//! These are the inputs the availability checker compares a requested
//! rental against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// The lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Dates are held for a booking that has not been paid yet.
    Held,
    /// The booking is confirmed.
    Confirmed,
    /// The booking was cancelled and no longer occupies its dates.
    Cancelled,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationStatus::Held => write!(f, "Held"),
            ReservationStatus::Confirmed => write!(f, "Confirmed"),
            ReservationStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// An existing commitment of the trailer for a range of dates.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::models::{DateRange, Reservation, ReservationStatus};
/// use chrono::NaiveDate;
///
/// let reservation = Reservation {
///     date_range: DateRange::new(
///         NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     ).unwrap(),
///     status: ReservationStatus::Confirmed,
/// };
/// assert!(reservation.is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The reserved dates (inclusive).
    pub date_range: DateRange,
    /// The reservation's current status.
    pub status: ReservationStatus,
}

impl Reservation {
    /// Returns true unless the reservation has been cancelled.
    pub fn is_active(&self) -> bool {
        self.status != ReservationStatus::Cancelled
    }
}

/// A single calendar day blocked by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedDate {
    /// The unavailable day.
    pub date: NaiveDate,
    /// Optional note explaining the block (maintenance, private event).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BlockedDate {
    /// Returns the block as a one-day range for overlap checks.
    pub fn as_range(&self) -> DateRange {
        DateRange::single_day(self.date)
    }
}
