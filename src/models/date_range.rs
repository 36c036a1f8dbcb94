//! Inclusive calendar date ranges.
//!
//! This module contains the [`DateRange`] type used for rental periods,
//! existing reservations and suggested alternative windows.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar dates with no time-of-day component.
///
/// A range always spans at least one day: `start <= end` is enforced by
/// [`DateRange::new`].
///
/// # Example
///
/// ```
/// use trailer_booking_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
/// ).unwrap();
///
/// assert_eq!(range.num_days(), 3);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start: NaiveDate,
    /// The last day of the range (inclusive).
    pub end: NaiveDate,
}

/// Wire form of a [`DateRange`], checked by [`DateRange::new`] on the way in.
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = EngineError;

    fn try_from(raw: RawDateRange) -> EngineResult<Self> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a new range, rejecting a start that falls after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range of `num_days` days beginning on `start`.
    ///
    /// Returns `None` when `num_days` is zero or the end date would overflow
    /// the calendar.
    pub fn starting_at(start: NaiveDate, num_days: u32) -> Option<Self> {
        let last_offset = num_days.checked_sub(1)?;
        let end = start.checked_add_days(Days::new(u64::from(last_offset)))?;
        Some(Self { start, end })
    }

    /// Creates a single-day range.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the number of calendar days covered, counting both ends.
    pub fn num_days(&self) -> u32 {
        let span = (self.end - self.start).num_days() + 1;
        u32::try_from(span).unwrap_or(0)
    }

    /// Checks if a date falls within this range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Checks if two ranges share at least one calendar day.
    ///
    /// Ranges that merely touch on a boundary day overlap, since both
    /// include that day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.end < other.start || other.end < self.start)
    }

    /// Iterates over every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |day| *day <= self.end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
