//! Ambient temperature/humidity readings.
//!
//! The conversion matches the Sensirion SHT4x datasheet; bus access stays
//! behind the [`Sensor`] trait.

use serde::{Deserialize, Serialize};

use crate::error::SensorError;

const TICKS_FULL_SCALE: f64 = 65_535.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub temperature_c: f64,
    /// Relative humidity in percent, clamped to 0..=100.
    pub humidity_pct: f64,
}

impl Reading {
    /// Convert raw 16-bit measurement ticks.
    pub fn from_ticks(temperature_ticks: u16, humidity_ticks: u16) -> Self {
        let temperature_c = -45.0 + 175.0 * f64::from(temperature_ticks) / TICKS_FULL_SCALE;
        let humidity_pct = -6.0 + 125.0 * f64::from(humidity_ticks) / TICKS_FULL_SCALE;
        Reading {
            temperature_c,
            humidity_pct: humidity_pct.clamp(0.0, 100.0),
        }
    }
}

pub trait Sensor {
    fn read(&mut self) -> Result<Reading, SensorError>;
}

/// A clock built without a sensor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensor;

impl Sensor for NoSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        Err(SensorError::Missing)
    }
}

/// Always reports the same reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedSensor(pub Reading);

impl Sensor for FixedSensor {
    fn read(&mut self) -> Result<Reading, SensorError> {
        Ok(self.0)
    }
}
