//! Proleptic Gregorian day arithmetic and host epoch handling.
//!
//! Everything here works on whole seconds since 1970-01-01T00:00:00Z. The
//! day counting is done in `i128` so that no `i64` input can overflow;
//! results are saturated back into `i64`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CivilTimeError, Result};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds between 1970-01-01 and 2000-01-01, both at 00:00:00 UTC.
pub const Y2K_UNIX_OFFSET: i64 = 946_684_800;

/// Days between 0000-03-01 and 1970-01-01 in the shifted-year calendar.
const UNIX_EPOCH_DAY_SHIFT: i128 = 719_468;
const DAYS_PER_ERA: i128 = 146_097;

/// The reference instant a host counts its timestamps from.
///
/// POSIX hosts count from 1970-01-01. Many embedded runtimes on ESP32-class
/// boards count from 2000-01-01 instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Epoch {
    /// 1970-01-01T00:00:00Z
    #[default]
    Unix,
    /// 2000-01-01T00:00:00Z
    Y2K,
}

impl Epoch {
    /// Offset of this epoch from the Unix epoch, in seconds.
    pub const fn unix_offset(self) -> i64 {
        match self {
            Epoch::Unix => 0,
            Epoch::Y2K => Y2K_UNIX_OFFSET,
        }
    }

    /// Convert a count of seconds since this epoch into Unix seconds.
    pub const fn to_unix(self, secs: i64) -> i64 {
        secs.saturating_add(self.unix_offset())
    }

    /// Convert Unix seconds into a count of seconds since this epoch.
    pub const fn from_unix(self, unix_secs: i64) -> i64 {
        unix_secs.saturating_sub(self.unix_offset())
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Epoch::Unix => f.write_str("unix"),
            Epoch::Y2K => f.write_str("y2k"),
        }
    }
}

impl FromStr for Epoch {
    type Err = CivilTimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unix" | "1970" => Ok(Epoch::Unix),
            "y2k" | "2000" => Ok(Epoch::Y2K),
            _ => Err(CivilTimeError::InvalidEpoch(s.to_string())),
        }
    }
}

/// Floor a fractional timestamp to whole seconds.
///
/// NaN maps to 0 and infinities saturate, following `as` cast semantics.
pub fn timestamp_from_secs_f64(secs: f64) -> i64 {
    secs.floor() as i64
}

pub(crate) fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Days since 1970-01-01 for a calendar date.
///
/// `month` must be in 1..=12; `day` is not range checked and rolls over
/// linearly into neighbouring months, like `mktime` does.
pub(crate) fn days_from_civil(year: i128, month: u32, day: u32) -> i128 {
    let month = i128::from(month);
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + i128::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_DAY_SHIFT
}

/// Calendar date `(year, month, day)` for a count of days since 1970-01-01.
pub(crate) fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = i128::from(days) + UNIX_EPOCH_DAY_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + i128::from(month <= 2);
    (saturate(year), month as u32, day as u32)
}

/// Seconds since 1970-01-01T00:00:00Z for a UTC calendar instant.
///
/// Months outside 1..=12 carry into the year; day, hour, minute and second
/// roll over linearly.
pub fn epoch_of(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> i64 {
    let month_index = i128::from(month) - 1;
    let year = i128::from(year) + month_index.div_euclid(12);
    let month = (month_index.rem_euclid(12) + 1) as u32;
    let days = days_from_civil(year, month, day);
    let seconds = i128::from(hour) * 3_600 + i128::from(minute) * 60 + i128::from(second);
    saturate(days * i128::from(SECONDS_PER_DAY) + seconds)
}
