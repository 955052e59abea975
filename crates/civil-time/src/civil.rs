//! Civil (wall-clock) time records and the shift-and-decompose transform.

use serde::{Deserialize, Serialize};

use crate::calendar::{self, SECONDS_PER_DAY};
use crate::dst::dst_offset_seconds;

/// Calendar and wall-clock fields of one instant.
///
/// `weekday` counts from Monday (0) to Sunday (6); `day_of_year` is 1-based.
/// Fields are public so that hand-built records can be formatted; values
/// produced by this crate are always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub weekday: u32,
    pub day_of_year: u32,
}

impl CivilTime {
    /// Seconds since the Unix epoch, reading the fields as UTC.
    ///
    /// `weekday` and `day_of_year` are ignored, as `mktime` ignores them.
    /// Applied to the output of [`local_civil_time`] this yields the local
    /// wall-clock value, i.e. the UTC timestamp plus the DST offset.
    pub fn to_timestamp(&self) -> i64 {
        calendar::epoch_of(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Decompose a timestamp into its UTC calendar fields.
pub fn utc_civil_time(timestamp: i64) -> CivilTime {
    let days = timestamp.div_euclid(SECONDS_PER_DAY);
    let seconds_of_day = timestamp.rem_euclid(SECONDS_PER_DAY);
    let (year, month, day) = calendar::civil_from_days(days);
    let first_of_year = calendar::days_from_civil(i128::from(year), 1, 1);

    CivilTime {
        year,
        month,
        day,
        hour: (seconds_of_day / 3_600) as u32,
        minute: (seconds_of_day % 3_600 / 60) as u32,
        second: (seconds_of_day % 60) as u32,
        // 1970-01-01 was a Thursday.
        weekday: (days + 3).rem_euclid(7) as u32,
        day_of_year: (i128::from(days) - first_of_year + 1) as u32,
    }
}

/// Central European wall-clock time for a UTC timestamp.
///
/// Adds the CET/CEST offset in effect at `timestamp_utc` and decomposes the
/// shifted value as if it were UTC.
pub fn local_civil_time(timestamp_utc: i64) -> CivilTime {
    let offset = dst_offset_seconds(timestamp_utc);
    utc_civil_time(timestamp_utc.saturating_add(offset))
}
