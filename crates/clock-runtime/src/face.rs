//! The two text lines shown on the matrix.
//!
//! `~` is the narrow spacer glyph of the matrix font; it keeps the unit
//! signs from touching the digits.

use std::fmt;

use civil_time::{format_hour_minute, CivilTime};
use serde::Serialize;

use crate::sensor::Reading;

/// Sensor line shown when no reading is available.
pub const NO_READING: &str = "----- -----";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockFace {
    /// `"HH:MM"` in local time.
    pub time_line: String,
    /// Temperature and humidity, or [`NO_READING`].
    pub sensor_line: String,
}

impl ClockFace {
    pub fn compose(civil: &CivilTime, reading: Option<&Reading>) -> Self {
        let sensor_line = match reading {
            Some(r) => format!("{:4.1}~° {:4.1}~%", r.temperature_c, r.humidity_pct),
            None => NO_READING.to_string(),
        };
        ClockFace {
            time_line: format_hour_minute(civil),
            sensor_line,
        }
    }
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.time_line, self.sensor_line)
    }
}
