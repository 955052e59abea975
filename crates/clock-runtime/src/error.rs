//! Error types for the clock runtime and its collaborators.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid clock configuration: {0}")]
    InvalidConfig(String),

    /// A clock task returned even though all of them loop forever.
    #[error("Clock task '{0}' stopped unexpectedly")]
    TaskStopped(&'static str),

    #[error("Clock task panicked: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Failure to obtain the current time from a [`crate::source::TimeSource`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("Network unavailable: {0}")]
    Network(String),

    #[error("Time server did not answer: {0}")]
    NoResponse(String),
}

/// Failure to take a measurement from a [`crate::sensor::Sensor`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("Sensor not present")]
    Missing,

    #[error("Sensor read failed: {0}")]
    Read(String),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
