//! Owned clock-tick state with one writer and snapshot readers.
//!
//! The seconds counter lives in a `watch` channel. The [`Ticker`] is the
//! only way to change it and is owned by the tick task; every other task
//! holds a [`ClockHandle`] and reads copies.

use serde::Serialize;
use tokio::sync::watch;

/// The clock value at one instant, in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockState {
    pub now: i64,
    /// Clock value at the last successful synchronization.
    pub last_sync: Option<i64>,
}

impl ClockState {
    pub const fn new(now: i64) -> Self {
        ClockState {
            now,
            last_sync: None,
        }
    }

    /// True before the first sync and once more than `interval_secs` clock
    /// seconds have passed since the last one.
    pub fn needs_sync(&self, interval_secs: i64) -> bool {
        match self.last_sync {
            None => true,
            Some(at) => self.now.saturating_sub(at) > interval_secs,
        }
    }
}

/// Write side of the clock state.
#[derive(Debug)]
pub struct Ticker {
    tx: watch::Sender<ClockState>,
}

impl Ticker {
    pub fn new(start: i64) -> Self {
        let (tx, _) = watch::channel(ClockState::new(start));
        Ticker { tx }
    }

    /// Advance the clock by one second.
    pub fn tick(&self) -> ClockState {
        self.tx
            .send_modify(|state| state.now = state.now.saturating_add(1));
        *self.tx.borrow()
    }

    /// Set the clock to a freshly fetched time and record the sync.
    pub fn synchronize(&self, timestamp: i64) -> ClockState {
        self.tx.send_replace(ClockState {
            now: timestamp,
            last_sync: Some(timestamp),
        });
        *self.tx.borrow()
    }

    pub fn snapshot(&self) -> ClockState {
        *self.tx.borrow()
    }

    pub fn handle(&self) -> ClockHandle {
        ClockHandle {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read side of the clock state. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ClockHandle {
    rx: watch::Receiver<ClockState>,
}

impl ClockHandle {
    pub fn snapshot(&self) -> ClockState {
        *self.rx.borrow()
    }

    /// Wait for the next change and return the new state, or `None` once
    /// the [`Ticker`] is gone.
    pub async fn changed(&mut self) -> Option<ClockState> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
