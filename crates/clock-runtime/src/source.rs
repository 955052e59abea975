//! Time sources the clock synchronizes against.

use chrono::Utc;
use tracing::{info, warn};

use crate::error::SyncError;

/// Something that can tell the current UTC time, e.g. an NTP client.
///
/// `fetch` may block on network I/O; the resync task calls it from tokio's
/// blocking pool.
pub trait TimeSource {
    /// Current time in Unix seconds.
    fn fetch(&mut self) -> Result<i64, SyncError>;
}

/// The host's system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn fetch(&mut self) -> Result<i64, SyncError> {
        Ok(Utc::now().timestamp())
    }
}

/// Try `source` up to `attempts` times and return the first timestamp.
pub fn fetch_with_retries<T: TimeSource + ?Sized>(source: &mut T, attempts: u32) -> Option<i64> {
    for attempt in 1..=attempts {
        match source.fetch() {
            Ok(timestamp) => {
                info!(attempt, timestamp, "time synchronized");
                return Some(timestamp);
            }
            Err(e) => warn!(attempt, attempts, error = %e, "time synchronization failed"),
        }
    }
    None
}
