//! # civil-time
//!
//! Deterministic Central European civil time for LED matrix clocks.
//!
//! Converts UTC epoch timestamps into CET/CEST wall-clock fields using the
//! fixed EU summer time rule, formats them for a clock display, and expands
//! bare calendar tuples into full records with weekday and day-of-year. No
//! platform calendar or timezone database is consulted, and every function
//! is pure.
//!
//! ## Modules
//!
//! - [`calendar`] — day arithmetic, [`Epoch`] handling, `epoch_of`
//! - [`dst`] — the CET/CEST rule: transitions, zone and offset lookup
//! - [`civil`] — [`CivilTime`] and the shift-and-decompose transform
//! - [`format`] — `"HH:MM:SS"` / `"Fri, 03 Mar 2023"` strings
//! - [`short_date`] — six-field tuple → [`CivilTime`] by day counting
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```rust
//! use civil_time::{format_clock, local_civil_time};
//!
//! // 2023-07-01T10:00:00Z is noon in Berlin (CEST).
//! let civil = local_civil_time(1_688_205_600);
//! let (time, date) = format_clock(&civil);
//! assert_eq!(time, "12:00:00");
//! assert_eq!(date, "Sat, 01 Jul 2023");
//! ```

pub mod calendar;
pub mod civil;
pub mod dst;
pub mod error;
pub mod format;
pub mod short_date;

pub use calendar::{epoch_of, timestamp_from_secs_f64, Epoch};
pub use civil::{local_civil_time, utc_civil_time, CivilTime};
pub use dst::{
    dst_offset_seconds, dst_transitions, zone_at, DstTransitions, Zone, CEST_OFFSET_SECONDS,
    CET_OFFSET_SECONDS, RULE_VALID_YEARS,
};
pub use error::CivilTimeError;
pub use format::{format_clock, format_hour_minute};
pub use short_date::{expand_short_date, ShortDate};
