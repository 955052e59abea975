//! # clock-runtime
//!
//! Task orchestration for a CET/CEST LED matrix clock.
//!
//! The hardware stays behind three traits ([`ClockDisplay`], [`Sensor`],
//! [`TimeSource`]); this crate supplies the seconds counter, the face
//! composition and the tick, face, refresh and resync tasks that tie them
//! together. Local time comes from [`civil_time`].
//!
//! ## Modules
//!
//! - [`state`] — single-writer clock state with snapshot readers
//! - [`tasks`] — the clock tasks and [`run_clock`]
//! - [`face`] — the two text lines shown on the matrix
//! - [`display`] — display trait and the lock-protected peripheral set
//! - [`sensor`] — temperature/humidity readings
//! - [`source`] — time sources and retrying fetch
//! - [`config`] — timing configuration (TOML)
//! - [`error`] — Error types

pub mod config;
pub mod display;
pub mod error;
pub mod face;
pub mod sensor;
pub mod source;
pub mod state;
pub mod tasks;

pub use config::ClockConfig;
pub use display::{ClockDisplay, Peripherals};
pub use error::{RuntimeError, SensorError, SyncError};
pub use face::ClockFace;
pub use sensor::{FixedSensor, NoSensor, Reading, Sensor};
pub use source::{fetch_with_retries, SystemTimeSource, TimeSource};
pub use state::{ClockHandle, ClockState, Ticker};
pub use tasks::run_clock;
