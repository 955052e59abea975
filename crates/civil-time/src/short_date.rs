//! Expand a six-field calendar tuple into a full [`CivilTime`].
//!
//! This uses a closed-form day count rather than the decomposition in
//! [`crate::civil`], so it can run where no calendar routines exist. Leap
//! years are every fourth year, which is exact between 1901 and 2099.
//!
//! [`ShortDate`] parses text with chrono, so only real calendar dates get
//! as far as the expansion.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::civil::CivilTime;
use crate::error::{CivilTimeError, Result};

const FORMAT_T: &str = "%Y-%m-%dT%H:%M:%S";
const FORMAT_SPACE: &str = "%Y-%m-%d %H:%M:%S";

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// One more than the 25 567 days from 1900-01-01 to 1970-01-01. The count
/// below therefore puts 1970-01-01 at day -1, and the `+ 4` in the weekday
/// step absorbs it.
const DAYS_1900_TO_1970: i128 = 25_568;

/// Compute weekday and day-of-year for a calendar tuple.
///
/// The fields are copied through unchanged; no UTC or DST adjustment is
/// applied. `month` must be in 1..=12. A month outside that range is not
/// rejected: the day count then includes `min(month - 1, 12)` whole months.
pub fn expand_short_date(
    year: i64,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> CivilTime {
    let mut days_in_month = DAYS_IN_MONTH;
    if year.rem_euclid(4) == 0 {
        days_in_month[1] = 29;
    }
    let prior_months = month.saturating_sub(1).min(12) as usize;
    let day_of_year = days_in_month
        .iter()
        .take(prior_months)
        .sum::<u32>()
        .saturating_add(day);

    let year_wide = i128::from(year);
    let days_since_1900 =
        (year_wide - 1900) * 365 + (year_wide - 1901).div_euclid(4) + i128::from(day_of_year) - 1;
    let days_since_1970 = days_since_1900 - DAYS_1900_TO_1970;
    let weekday = (days_since_1970 + 4).rem_euclid(7) as u32;

    CivilTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        weekday,
        day_of_year,
    }
}

/// The six caller-supplied calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ShortDate {
    pub fn expand(&self) -> CivilTime {
        expand_short_date(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

impl From<CivilTime> for ShortDate {
    fn from(civil: CivilTime) -> Self {
        ShortDate {
            year: civil.year,
            month: civil.month,
            day: civil.day,
            hour: civil.hour,
            minute: civil.minute,
            second: civil.second,
        }
    }
}

impl From<NaiveDateTime> for ShortDate {
    fn from(datetime: NaiveDateTime) -> Self {
        ShortDate {
            year: i64::from(datetime.year()),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
        }
    }
}

/// Years outside 0..=9999 carry an explicit sign (`-0001`, `+10000`), the
/// form `FromStr` reads back.
impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}", self.year)?;
        } else {
            write!(f, "{:+05}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for ShortDate {
    type Err = CivilTimeError;

    /// Parse `YYYY-MM-DDTHH:MM:SS`; a single space may replace the `T`.
    /// Only dates that exist in the Gregorian calendar are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let format = if trimmed.contains('T') {
            FORMAT_T
        } else {
            FORMAT_SPACE
        };
        let datetime = NaiveDateTime::parse_from_str(trimmed, format).map_err(|e| {
            CivilTimeError::InvalidShortDate {
                input: s.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(ShortDate::from(datetime))
    }
}
