//! Day detection and day-type counting.
//!
//! This module determines whether a calendar day is charged at the weekday or
//! weekend rate and counts the day types across a rental range.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::DateRange;

/// Represents the rate class of a rental day.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::DayType;
///
/// let day_type = DayType::Weekend;
/// assert_eq!(format!("{:?}", day_type), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Thursday.
    Weekday,
    /// Friday, Saturday and Sunday.
    Weekend,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Weekend => write!(f, "Weekend"),
        }
    }
}

/// Determines the day type for a calendar date.
///
/// # Returns
///
/// - [`DayType::Weekend`] for Friday, Saturday and Sunday
/// - [`DayType::Weekday`] for Monday through Thursday
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-16 is a Friday
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
/// assert_eq!(get_day_type(friday), DayType::Weekend);
///
/// // 2026-01-15 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(get_day_type(thursday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Fri | Weekday::Sat | Weekday::Sun => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

/// Weekday and weekend counts for a rental range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTypeCounts {
    /// Total days in the range.
    pub number_of_days: u32,
    /// Days classified as [`DayType::Weekday`].
    pub weekday_count: u32,
    /// Days classified as [`DayType::Weekend`].
    pub weekend_count: u32,
}

/// Walks every day of `range` inclusively and counts each day type.
///
/// A single-day range always yields exactly one classified day.
///
/// # Example
///
/// ```
/// use trailer_booking_engine::calculation::count_day_types;
/// use trailer_booking_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// // Monday 2026-01-12 through Sunday 2026-01-18
/// let week = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// ).unwrap();
///
/// let counts = count_day_types(&week);
/// assert_eq!(counts.number_of_days, 7);
/// assert_eq!(counts.weekday_count, 4);
/// assert_eq!(counts.weekend_count, 3);
/// ```
pub fn count_day_types(range: &DateRange) -> DayTypeCounts {
    let (weekday_count, weekend_count) =
        range
            .days()
            .fold((0u32, 0u32), |(weekdays, weekends), day| {
                match get_day_type(day) {
                    DayType::Weekday => (weekdays + 1, weekends),
                    DayType::Weekend => (weekdays, weekends + 1),
                }
            });

    DayTypeCounts {
        number_of_days: weekday_count + weekend_count,
        weekday_count,
        weekend_count,
    }
}
