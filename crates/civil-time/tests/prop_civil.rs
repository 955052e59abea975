//! Property-based tests for the civil time calculator using proptest.
//!
//! `chrono-tz`'s Europe/Berlin zone follows the same EU rule for the years
//! the closed-form transitions cover, so it serves as an independent oracle.

use chrono::{DateTime, Datelike, Offset, Timelike};
use chrono_tz::Europe::Berlin;
use civil_time::{dst_offset_seconds, expand_short_date, local_civil_time, zone_at, Zone};
use proptest::prelude::*;

/// 1996-01-01T00:00:00Z
const RANGE_START: i64 = 820_454_400;
/// 2100-01-01T00:00:00Z
const RANGE_END: i64 = 4_102_444_800;

fn arb_timestamp() -> impl Strategy<Value = i64> {
    RANGE_START..RANGE_END
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 1024,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: offset agrees with the tz database
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn offset_matches_europe_berlin(ts in arb_timestamp()) {
        let berlin = DateTime::from_timestamp(ts, 0).unwrap().with_timezone(&Berlin);
        let expected = i64::from(berlin.offset().fix().local_minus_utc());
        prop_assert_eq!(dst_offset_seconds(ts), expected);
    }
}

// ---------------------------------------------------------------------------
// Property 2: local fields agree with the tz database
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn local_fields_match_europe_berlin(ts in arb_timestamp()) {
        let berlin = DateTime::from_timestamp(ts, 0).unwrap().with_timezone(&Berlin);
        let civil = local_civil_time(ts);
        prop_assert_eq!(civil.year, i64::from(berlin.year()));
        prop_assert_eq!(civil.month, berlin.month());
        prop_assert_eq!(civil.day, berlin.day());
        prop_assert_eq!(civil.hour, berlin.hour());
        prop_assert_eq!(civil.minute, berlin.minute());
        prop_assert_eq!(civil.second, berlin.second());
        prop_assert_eq!(civil.weekday, berlin.weekday().num_days_from_monday());
        prop_assert_eq!(civil.day_of_year, berlin.ordinal());
    }
}

// ---------------------------------------------------------------------------
// Property 3: the shift-and-decompose transform is invertible
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn round_trip_reconstructs_timestamp(ts in arb_timestamp()) {
        let civil = local_civil_time(ts);
        prop_assert_eq!(civil.to_timestamp() - dst_offset_seconds(ts), ts);
    }
}

// ---------------------------------------------------------------------------
// Property 4: the closed-form expansion agrees with the decomposition
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn expansion_matches_decomposition(ts in arb_timestamp()) {
        let civil = local_civil_time(ts);
        let expanded = expand_short_date(
            civil.year, civil.month, civil.day, civil.hour, civil.minute, civil.second,
        );
        prop_assert_eq!(expanded, civil);
    }
}

// ---------------------------------------------------------------------------
// Property 5: summer time is one contiguous block per year
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn zone_is_cet_on_both_sides_of_a_summer_block(ts in arb_timestamp()) {
        if zone_at(ts) == Zone::Cest {
            let year = local_civil_time(ts).year;
            let t = civil_time::dst_transitions(year);
            prop_assert!(t.march <= ts && ts < t.october);
            prop_assert_eq!(zone_at(t.march - 1), Zone::Cet);
            prop_assert_eq!(zone_at(t.october), Zone::Cet);
        }
    }
}
