//! Display seam and the lock-protected peripheral set.

use civil_time::local_civil_time;
use tracing::{debug, info};

use crate::face::ClockFace;
use crate::sensor::Sensor;

/// An output device for the clock face.
///
/// `show` replaces the frame contents; `refresh` pushes the current frame
/// out again, which multiplexed LED panels need continuously.
pub trait ClockDisplay {
    fn show(&mut self, face: &ClockFace);

    fn refresh(&mut self) {}
}

/// Devices that the tasks share through one lock: a sensor read and a
/// frame update must not interleave with a refresh pass.
#[derive(Debug)]
pub struct Peripherals<D, S> {
    pub display: D,
    pub sensor: S,
}

impl<D: ClockDisplay, S: Sensor> Peripherals<D, S> {
    pub fn new(display: D, sensor: S) -> Self {
        Peripherals { display, sensor }
    }

    /// Read the sensor, compose the face for `timestamp` and show it.
    pub fn update_face(&mut self, timestamp: i64) -> ClockFace {
        let reading = match self.sensor.read() {
            Ok(reading) => Some(reading),
            Err(e) => {
                debug!(error = %e, "no sensor reading");
                None
            }
        };
        let face = ClockFace::compose(&local_civil_time(timestamp), reading.as_ref());
        info!(time = %face.time_line, sensor = %face.sensor_line, "face updated");
        self.display.show(&face);
        face
    }
}
