//! Clock timing configuration.
//!
//! Every field has a default taken from the deployed firmware, so an empty
//! TOML file (or no file at all) yields a working clock:
//!
//! ```toml
//! tick_period_ms = 1000
//! ntp_interval_secs = 43200
//! resync_poll_secs = 5
//! sync_attempts = 5
//! face_update_secs = 10
//! refresh_period_ms = 1
//! debug = false
//! ```

use std::path::Path;
use std::time::Duration;

use civil_time::Epoch;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// Start of the clock in debug mode: 05:59:00 on the epoch day of a Y2K
/// host, i.e. one minute before 07:00 CET.
pub const DEBUG_START: i64 = Epoch::Y2K.to_unix(5 * 3_600 + 59 * 60);

/// Tick period in debug mode, running the clock five times faster.
pub const DEBUG_TICK_PERIOD_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Wall time between two one-second ticks.
    pub tick_period_ms: u64,
    /// Clock seconds between NTP synchronizations.
    pub ntp_interval_secs: i64,
    /// Wall time between checks whether a resync is due.
    pub resync_poll_secs: u64,
    /// Fetch attempts per resync before giving up until the next poll.
    pub sync_attempts: u32,
    /// The face is redrawn each time the clock enters a new window of this
    /// many seconds.
    pub face_update_secs: i64,
    /// Pause between display refresh passes; 0 only yields to other tasks.
    pub refresh_period_ms: u64,
    /// Start at [`DEBUG_START`] instead of the host time.
    pub debug: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            tick_period_ms: 1_000,
            ntp_interval_secs: 12 * 3_600,
            resync_poll_secs: 5,
            sync_attempts: 5,
            face_update_secs: 10,
            refresh_period_ms: 1,
            debug: false,
        }
    }
}

impl ClockConfig {
    /// Defaults with the debug timing overlaid.
    pub fn debug() -> Self {
        ClockConfig::default().with_debug()
    }

    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self.tick_period_ms = DEBUG_TICK_PERIOD_MS;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ClockConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms == 0 {
            return Err(RuntimeError::InvalidConfig(
                "tick_period_ms must be at least 1".to_string(),
            ));
        }
        if self.ntp_interval_secs < 1 {
            return Err(RuntimeError::InvalidConfig(
                "ntp_interval_secs must be at least 1".to_string(),
            ));
        }
        if self.resync_poll_secs == 0 {
            return Err(RuntimeError::InvalidConfig(
                "resync_poll_secs must be at least 1".to_string(),
            ));
        }
        if self.sync_attempts == 0 {
            return Err(RuntimeError::InvalidConfig("sync_attempts must be at least 1".to_string()));
        }
        if self.face_update_secs < 1 {
            return Err(RuntimeError::InvalidConfig(
                "face_update_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Initial clock value given the host time.
    pub fn start_timestamp(&self, host_now: i64) -> i64 {
        if self.debug {
            DEBUG_START
        } else {
            host_now
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn resync_poll(&self) -> Duration {
        Duration::from_secs(self.resync_poll_secs)
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_millis(self.refresh_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(
            ClockConfig::from_toml_str("").unwrap(),
            ClockConfig::default()
        );
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = ClockConfig::from_toml_str("ntp_interval_secs = 15\n").unwrap();
        assert_eq!(config.ntp_interval_secs, 15);
        assert_eq!(config.tick_period_ms, 1_000);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ClockConfig::from_toml_str("tick_period = 5\n").unwrap_err();
        assert!(matches!(err, RuntimeError::ConfigParse(_)));
    }

    #[test]
    fn zero_attempts_are_invalid() {
        let err = ClockConfig::from_toml_str("sync_attempts = 0\n").unwrap_err();
        assert!(err.to_string().contains("sync_attempts"));
    }

    #[test]
    fn debug_overlay() {
        let config = ClockConfig::debug();
        assert_eq!(config.tick_period_ms, DEBUG_TICK_PERIOD_MS);
        assert_eq!(config.start_timestamp(1_700_000_000), DEBUG_START);
        assert_eq!(DEBUG_START, 946_706_340);
    }
}
