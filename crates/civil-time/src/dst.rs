//! The fixed European DST rule (CET/CEST).
//!
//! Summer time starts on the last Sunday of March at 01:00 UTC and ends on
//! the last Sunday of October at 01:00 UTC. The closed-form last-Sunday
//! formulas used here hold for 1996 through 2099. Outside that range the
//! functions still return one of the two offsets but the transition dates
//! are not guaranteed to fall on Sundays.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::epoch_of;
use crate::civil::utc_civil_time;

pub const CET_OFFSET_SECONDS: i64 = 3_600;
pub const CEST_OFFSET_SECONDS: i64 = 7_200;

/// First and last year for which the transition formulas are exact.
pub const RULE_VALID_YEARS: std::ops::RangeInclusive<i64> = 1996..=2099;

/// The two zones the rule switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Central European Time, UTC+1.
    Cet,
    /// Central European Summer Time, UTC+2.
    Cest,
}

impl Zone {
    pub const fn offset_seconds(self) -> i64 {
        match self {
            Zone::Cet => CET_OFFSET_SECONDS,
            Zone::Cest => CEST_OFFSET_SECONDS,
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Zone::Cet => "CET",
            Zone::Cest => "CEST",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// The two transition instants of one year, as Unix seconds.
///
/// `[march, october)` is summer time; everything else in the year is CET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DstTransitions {
    pub year: i64,
    /// Last Sunday of March, 01:00 UTC.
    pub march: i64,
    /// Last Sunday of October, 01:00 UTC.
    pub october: i64,
}

impl DstTransitions {
    pub fn for_year(year: i64) -> Self {
        // 5*y/4 is floored before the Sunday offset is taken mod 7.
        let quarter_steps = (5 * i128::from(year)).div_euclid(4);
        let march_day = 31 - (quarter_steps + 4).rem_euclid(7) as u32;
        let october_day = 31 - (quarter_steps + 1).rem_euclid(7) as u32;

        DstTransitions {
            year,
            march: epoch_of(year, 3, march_day, 1, 0, 0),
            october: epoch_of(year, 10, october_day, 1, 0, 0),
        }
    }

    pub fn zone_at(&self, timestamp_utc: i64) -> Zone {
        if timestamp_utc < self.march {
            Zone::Cet
        } else if timestamp_utc < self.october {
            Zone::Cest
        } else {
            Zone::Cet
        }
    }

    pub fn contains(&self, timestamp_utc: i64) -> bool {
        self.zone_at(timestamp_utc) == Zone::Cest
    }
}

pub fn dst_transitions(year: i64) -> DstTransitions {
    DstTransitions::for_year(year)
}

/// Zone in effect at a UTC timestamp.
///
/// The year is taken from the UTC decomposition of the timestamp, so the
/// New Year hour that is already January in Berlin still belongs to the
/// old year here. Both sides of that boundary are CET, so the result does
/// not depend on it.
pub fn zone_at(timestamp_utc: i64) -> Zone {
    let year = utc_civil_time(timestamp_utc).year;
    DstTransitions::for_year(year).zone_at(timestamp_utc)
}

/// UTC offset in seconds in effect at a UTC timestamp: 3600 or 7200.
///
/// Precondition: the UTC year of `timestamp_utc` lies in [`RULE_VALID_YEARS`].
/// This is not checked.
pub fn dst_offset_seconds(timestamp_utc: i64) -> i64 {
    zone_at(timestamp_utc).offset_seconds()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions_2023_fall_on_last_sundays() {
        let t = dst_transitions(2023);
        assert_eq!(t.march, epoch_of(2023, 3, 26, 1, 0, 0));
        assert_eq!(t.october, epoch_of(2023, 10, 29, 1, 0, 0));
    }

    #[test]
    fn zone_abbreviations() {
        assert_eq!(Zone::Cet.to_string(), "CET");
        assert_eq!(Zone::Cest.to_string(), "CEST");
    }

    #[test]
    fn contains_is_half_open() {
        let t = dst_transitions(2024);
        assert!(!t.contains(t.march - 1));
        assert!(t.contains(t.march));
        assert!(t.contains(t.october - 1));
        assert!(!t.contains(t.october));
    }
}
