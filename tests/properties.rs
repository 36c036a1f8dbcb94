//! Property tests for the pricing and availability rules.
//!
//! Each property pins down an invariant that must hold for every input,
//! not just the worked examples in the unit tests.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use trailer_booking_engine::calculation::{
    DEFAULT_BLOCKING_STATUSES, apply_promo, calculate_delivery_fee, check_availability,
    compute_quote, count_day_types, select_discount_tier, suggest_alternatives,
};
use trailer_booking_engine::error::EngineError;
use trailer_booking_engine::models::{
    DateRange, DeliveryPolicy, PromoCode, PromoKind, RateTable, Reservation, ReservationStatus,
    default_discount_tiers,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn range_from(offset: u32, num_days: u32) -> DateRange {
    let start = base_date()
        .checked_add_days(Days::new(u64::from(offset)))
        .unwrap();
    DateRange::starting_at(start, num_days).unwrap()
}

fn rates() -> RateTable {
    RateTable {
        weekday_rate: Decimal::from(450),
        weekend_rate: Decimal::from(550),
    }
}

fn policy() -> DeliveryPolicy {
    DeliveryPolicy {
        free_radius_miles: Decimal::from(50),
        max_radius_miles: Decimal::from(150),
        per_mile_rate: Decimal::from(2),
    }
}

fn promo(kind: PromoKind) -> PromoCode {
    PromoCode {
        code: "PROP".to_string(),
        kind,
        is_active: true,
        expires_at: None,
        max_uses: None,
        current_uses: 0,
    }
}

/// Miles with two decimal places, e.g. 7512 -> 75.12.
fn miles(hundredths: u32) -> Decimal {
    Decimal::new(i64::from(hundredths), 2)
}

#[test]
fn prop_day_type_counts_partition_the_range() {
    proptest!(|(offset in 0u32..=730, num_days in 1u32..=60)| {
        let counts = count_day_types(&range_from(offset, num_days));
        prop_assert_eq!(counts.number_of_days, num_days);
        prop_assert_eq!(counts.weekday_count + counts.weekend_count, counts.number_of_days);
        prop_assert!(counts.number_of_days >= 1);
    });
}

#[test]
fn prop_single_day_has_one_classified_day() {
    proptest!(|(offset in 0u32..=730)| {
        let counts = count_day_types(&range_from(offset, 1));
        prop_assert_eq!(counts.weekday_count + counts.weekend_count, 1);
    });
}

#[test]
fn prop_discount_never_shrinks_with_longer_rentals() {
    let tiers = default_discount_tiers();
    proptest!(|(days in 1u32..=365, extra in 0u32..=30)| {
        let shorter = select_discount_tier(&tiers, days);
        let longer = select_discount_tier(&tiers, days + extra);
        prop_assert!(longer >= shorter, "{} days got {}, {} days got {}", days, shorter, days + extra, longer);
    });
}

#[test]
fn prop_delivery_free_within_radius() {
    proptest!(|(hundredths in 0u32..=5000)| {
        let fee = calculate_delivery_fee(Some(miles(hundredths)), &policy()).unwrap();
        prop_assert_eq!(fee.fee, Some(Decimal::ZERO));
    });
}

#[test]
fn prop_delivery_fee_increases_past_free_radius() {
    proptest!(|(a in 5001u32..=15000, b in 5001u32..=15000)| {
        prop_assume!(a != b);
        let (near, far) = if a < b { (a, b) } else { (b, a) };
        let near_fee = calculate_delivery_fee(Some(miles(near)), &policy()).unwrap().fee.unwrap();
        let far_fee = calculate_delivery_fee(Some(miles(far)), &policy()).unwrap().fee.unwrap();
        prop_assert!(near_fee > Decimal::ZERO);
        prop_assert!(far_fee > near_fee, "{} miles cost {}, {} miles cost {}", miles(near), near_fee, miles(far), far_fee);
    });
}

#[test]
fn prop_delivery_refused_past_service_radius() {
    proptest!(|(hundredths in 15001u32..=100000)| {
        let result = calculate_delivery_fee(Some(miles(hundredths)), &policy());
        let is_outside = matches!(result, Err(EngineError::OutsideServiceArea { .. }));
        prop_assert!(is_outside);
    });
}

#[test]
fn prop_quote_amounts_are_consistent() {
    proptest!(|(offset in 0u32..=365, num_days in 1u32..=21, hundredths in 0u32..=15000)| {
        let quote = compute_quote(
            &range_from(offset, num_days),
            &rates(),
            Some(miles(hundredths)),
            &policy(),
            &default_discount_tiers(),
            Decimal::from(100),
        ).unwrap();

        prop_assert_eq!(quote.day_lines.len() as u32, quote.number_of_days);
        prop_assert_eq!(quote.rental_after_discount, quote.base_rental - quote.discount_amount);
        prop_assert_eq!(quote.subtotal, quote.rental_after_discount + quote.delivery_fee.unwrap());
        prop_assert_eq!(quote.balance_due, quote.subtotal - quote.deposit_due);
        prop_assert!(quote.balance_due >= Decimal::ZERO);
    });
}

#[test]
fn prop_percentage_promo_never_drops_total_below_deposit() {
    proptest!(|(offset in 0u32..=365, num_days in 1u32..=14, percent in 1i64..=100)| {
        let deposit = Decimal::from(100);
        let quote = compute_quote(
            &range_from(offset, num_days),
            &rates(),
            None,
            &policy(),
            &default_discount_tiers(),
            deposit,
        ).unwrap();
        let code = promo(PromoKind::Percentage { percent: Decimal::new(percent, 2) });

        let applied = apply_promo(&quote, deposit, Some(&code)).unwrap();
        prop_assert!(applied.adjusted_total >= deposit);
        prop_assert!(applied.balance_due >= Decimal::ZERO);
        prop_assert_eq!(applied.adjusted_total, quote.subtotal - applied.discount_applied);
        prop_assert_eq!(applied.deposit_due_now, deposit);
    });
}

#[test]
fn prop_full_discount_zeroes_every_amount() {
    proptest!(|(offset in 0u32..=365, num_days in 1u32..=14)| {
        let deposit = Decimal::from(100);
        let quote = compute_quote(
            &range_from(offset, num_days),
            &rates(),
            None,
            &policy(),
            &default_discount_tiers(),
            deposit,
        ).unwrap();

        let applied = apply_promo(&quote, deposit, Some(&promo(PromoKind::FullDiscount))).unwrap();
        prop_assert_eq!(applied.adjusted_total, Decimal::ZERO);
        prop_assert_eq!(applied.deposit_due_now, Decimal::ZERO);
        prop_assert_eq!(applied.balance_due, Decimal::ZERO);
        prop_assert!(applied.deposit_satisfied);
    });
}

#[test]
fn prop_suggestions_are_free_disjoint_and_ordered() {
    proptest!(|(
        booked in prop::collection::vec((0u32..=60, 1u32..=7), 0..=6),
        candidate_offset in 0u32..=30,
        num_days in 1u32..=5,
    )| {
        let reservations: Vec<Reservation> = booked
            .iter()
            .map(|&(offset, days)| Reservation {
                date_range: range_from(offset, days),
                status: ReservationStatus::Confirmed,
            })
            .collect();
        let candidate = range_from(candidate_offset, num_days);

        let suggestions = suggest_alternatives(
            &candidate,
            num_days,
            &reservations,
            &[],
            &DEFAULT_BLOCKING_STATUSES,
            60,
            3,
        );

        prop_assert!(suggestions.len() <= 3);
        for window in &suggestions {
            prop_assert_eq!(window.num_days(), num_days);
            prop_assert!(window.start >= candidate.start);
            let free = check_availability(window, &reservations, &[], &DEFAULT_BLOCKING_STATUSES);
            prop_assert!(free.available);
        }
        for pair in suggestions.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
        }
    });
}
