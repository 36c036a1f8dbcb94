//! Availability checking and alternative date suggestions.
//!
//! A requested rental is available when it overlaps no counted reservation
//! and no administratively blocked date. The check is advisory: whoever
//! commits a booking must re-check at write time.

use chrono::Days;
use serde::{Deserialize, Serialize};

use crate::models::{BlockedDate, DateRange, Reservation, ReservationStatus};

/// Reservation statuses that occupy dates by default.
pub const DEFAULT_BLOCKING_STATUSES: [ReservationStatus; 2] =
    [ReservationStatus::Held, ReservationStatus::Confirmed];

/// How far ahead alternative windows are searched by default.
pub const DEFAULT_SEARCH_WINDOW_DAYS: u32 = 60;

/// How many alternative windows are suggested by default.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// The result of checking a date range against existing commitments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// True when nothing conflicts with the requested range.
    pub available: bool,
    /// Number of counted reservations that overlap the range.
    pub conflict_count: usize,
    /// Number of blocked dates that fall inside the range.
    pub blocked_count: usize,
}

/// Returns true if two ranges share at least one day.
///
/// `a` and `b` conflict unless `a.end < b.start` or `b.end < a.start`.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::ranges_conflict;
/// use trailer_booking_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let first = DateRange::new(date(10), date(12)).unwrap();
/// let second = DateRange::new(date(12), date(14)).unwrap();
/// let earlier = DateRange::new(date(10), date(11)).unwrap();
///
/// assert!(ranges_conflict(&first, &second));
/// assert!(!ranges_conflict(&earlier, &second));
/// ```
pub fn ranges_conflict(a: &DateRange, b: &DateRange) -> bool {
    a.overlaps(b)
}

/// Checks a candidate range against reservations and blocked dates.
///
/// # Arguments
///
/// * `candidate` - The requested rental dates
/// * `reservations` - Existing reservations
/// * `blocked` - Administratively blocked days
/// * `statuses` - Reservation statuses that count as occupying dates
///
/// Reservations whose status is not in `statuses` are ignored, which lets the
/// caller decide whether unpaid holds block new bookings. Cancelled
/// reservations never conflict, even when `statuses` lists them.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::{check_availability, DEFAULT_BLOCKING_STATUSES};
/// use trailer_booking_engine::models::{BlockedDate, DateRange};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let candidate = DateRange::new(date(10), date(12)).unwrap();
/// let blocked = vec![BlockedDate { date: date(11), reason: None }];
///
/// let result = check_availability(&candidate, &[], &blocked, &DEFAULT_BLOCKING_STATUSES);
/// assert!(!result.available);
/// assert_eq!(result.blocked_count, 1);
/// ```
pub fn check_availability(
    candidate: &DateRange,
    reservations: &[Reservation],
    blocked: &[BlockedDate],
    statuses: &[ReservationStatus],
) -> AvailabilityResult {
    let conflict_count = reservations
        .iter()
        .filter(|reservation| reservation.is_active())
        .filter(|reservation| statuses.contains(&reservation.status))
        .filter(|reservation| ranges_conflict(candidate, &reservation.date_range))
        .count();

    let blocked_count = blocked
        .iter()
        .filter(|blocked_date| ranges_conflict(candidate, &blocked_date.as_range()))
        .count();

    AvailabilityResult {
        available: conflict_count == 0 && blocked_count == 0,
        conflict_count,
        blocked_count,
    }
}

/// Suggests open windows of `duration_days` days near a candidate range.
///
/// Scans forward one day at a time from `candidate.start`, for at most
/// `search_window_days` start days, and collects the first
/// `max_suggestions` windows that pass [`check_availability`]. After a window
/// is accepted the scan resumes the day after it ends, so suggestions never
/// overlap each other.
///
/// Windows are returned in chronological order. An empty list means no
/// nearby availability was found; it is not an error.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::{suggest_alternatives, DEFAULT_BLOCKING_STATUSES};
/// use trailer_booking_engine::models::{DateRange, Reservation, ReservationStatus};
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let candidate = DateRange::new(date(10), date(11)).unwrap();
/// let reservations = vec![Reservation {
///     date_range: DateRange::new(date(10), date(12)).unwrap(),
///     status: ReservationStatus::Confirmed,
/// }];
///
/// let suggestions = suggest_alternatives(
///     &candidate, 2, &reservations, &[], &DEFAULT_BLOCKING_STATUSES, 60, 2,
/// );
/// assert_eq!(suggestions[0], DateRange::new(date(13), date(14)).unwrap());
/// assert_eq!(suggestions[1], DateRange::new(date(15), date(16)).unwrap());
/// ```
pub fn suggest_alternatives(
    candidate: &DateRange,
    duration_days: u32,
    reservations: &[Reservation],
    blocked: &[BlockedDate],
    statuses: &[ReservationStatus],
    search_window_days: u32,
    max_suggestions: usize,
) -> Vec<DateRange> {
    let mut suggestions = Vec::new();
    if duration_days == 0 || max_suggestions == 0 {
        return suggestions;
    }

    let mut offset = 0u32;
    while offset < search_window_days && suggestions.len() < max_suggestions {
        let Some(window) = candidate
            .start
            .checked_add_days(Days::new(u64::from(offset)))
            .and_then(|start| DateRange::starting_at(start, duration_days))
        else {
            break;
        };

        if check_availability(&window, reservations, blocked, statuses).available {
            suggestions.push(window);
            offset = offset.saturating_add(duration_days);
        } else {
            offset += 1;
        }
    }

    suggestions
}
