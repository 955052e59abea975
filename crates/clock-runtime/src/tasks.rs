//! The cooperative clock tasks and their supervisor.
//!
//! Four tasks run concurrently:
//!
//! - **tick** owns the [`Ticker`] and advances it once per tick period. It
//!   also applies synchronized timestamps, so it stays the only writer.
//! - **face** redraws the face whenever the clock enters a new update window.
//! - **refresh** keeps re-sending the current frame to the display.
//! - **resync** polls whether a sync is due and fetches the time with retries.
//!
//! Display and sensor access goes through one async mutex. Every guard is a
//! temporary or a block-scoped binding, so no exit path can leave it locked.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tokio::task::{self, JoinSet};
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info, trace, warn};

use crate::config::ClockConfig;
use crate::display::{ClockDisplay, Peripherals};
use crate::error::{Result, RuntimeError};
use crate::sensor::Sensor;
use crate::source::{fetch_with_retries, TimeSource};
use crate::state::{ClockHandle, ClockState, Ticker};

pub const TICK_TASK: &str = "tick";
pub const FACE_TASK: &str = "face";
pub const REFRESH_TASK: &str = "refresh";
pub const RESYNC_TASK: &str = "resync";

pub type SharedPeripherals<D, S> = Arc<Mutex<Peripherals<D, S>>>;

/// Advance the clock every `period` and apply timestamps from `sync_rx`.
///
/// Returns only if the sync channel closes, which means the resync task is
/// gone.
pub async fn tick_task(
    ticker: Ticker,
    mut sync_rx: mpsc::Receiver<i64>,
    period: Duration,
) -> &'static str {
    let mut interval = time::interval(period);
    // The first tick of a tokio interval completes immediately.
    interval.tick().await;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let state = ticker.tick();
                trace!(now = state.now, "tick");
            }
            synced = sync_rx.recv() => match synced {
                Some(timestamp) => {
                    let drift = timestamp.saturating_sub(ticker.snapshot().now);
                    ticker.synchronize(timestamp);
                    info!(timestamp, drift, "clock set");
                }
                None => return TICK_TASK,
            },
        }
    }
}

/// Show a face at start and each time `now` enters a new window of
/// `window_secs` seconds.
pub async fn face_task<D, S>(
    mut handle: ClockHandle,
    shared: SharedPeripherals<D, S>,
    window_secs: i64,
) -> &'static str
where
    D: ClockDisplay,
    S: Sensor,
{
    let window_secs = window_secs.max(1);
    let start = handle.snapshot().now;
    shared.lock().await.update_face(start);
    let mut shown_window = start.div_euclid(window_secs);

    while let Some(state) = handle.changed().await {
        let window = state.now.div_euclid(window_secs);
        if window != shown_window {
            shown_window = window;
            shared.lock().await.update_face(state.now);
        }
    }
    FACE_TASK
}

/// Re-send the current frame forever, pausing `period` between passes.
pub async fn refresh_task<D, S>(shared: SharedPeripherals<D, S>, period: Duration) -> &'static str
where
    D: ClockDisplay,
    S: Sensor,
{
    loop {
        shared.lock().await.display.refresh();
        if period.is_zero() {
            task::yield_now().await;
        } else {
            time::sleep(period).await;
        }
    }
}

/// Every poll, synchronize if the last sync is older than the NTP interval.
///
/// The retrying fetch blocks, so it runs on tokio's blocking pool with the
/// source moved in and handed back. The peripheral lock is taken only to
/// show the fresh face.
pub async fn resync_task<D, S, T>(
    handle: ClockHandle,
    shared: SharedPeripherals<D, S>,
    mut source: T,
    sync_tx: mpsc::Sender<i64>,
    config: ClockConfig,
) -> &'static str
where
    D: ClockDisplay,
    S: Sensor,
    T: TimeSource + Send + 'static,
{
    let mut poll = time::interval(config.resync_poll());
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let attempts = config.sync_attempts;

    loop {
        poll.tick().await;
        let state = handle.snapshot();
        if !state.needs_sync(config.ntp_interval_secs) {
            continue;
        }

        let fetch = task::spawn_blocking(move || {
            let fetched = fetch_with_retries(&mut source, attempts);
            (source, fetched)
        });
        let fetched = match fetch.await {
            Ok((returned, fetched)) => {
                source = returned;
                fetched
            }
            Err(e) => {
                error!(error = %e, "time source panicked");
                return RESYNC_TASK;
            }
        };

        match fetched {
            Some(timestamp) => {
                shared.lock().await.update_face(timestamp);
                if sync_tx.send(timestamp).await.is_err() {
                    return RESYNC_TASK;
                }
            }
            None => warn!(
                attempts,
                last_sync = ?state.last_sync,
                "time synchronization exhausted, retrying next poll"
            ),
        }
    }
}

/// Run the clock until `shutdown` resolves and return its final state.
///
/// # Errors
/// Returns `RuntimeError::InvalidConfig` before starting anything if the
/// configuration does not validate, and `TaskStopped`/`Join` if a task
/// ends or panics while the clock is running.
pub async fn run_clock<D, S, T, F>(
    config: ClockConfig,
    start: i64,
    peripherals: Peripherals<D, S>,
    source: T,
    shutdown: F,
) -> Result<ClockState>
where
    D: ClockDisplay + Send + 'static,
    S: Sensor + Send + 'static,
    T: TimeSource + Send + 'static,
    F: Future<Output = ()>,
{
    config.validate()?;

    let ticker = Ticker::new(start);
    let handle = ticker.handle();
    let shared = Arc::new(Mutex::new(peripherals));
    let (sync_tx, sync_rx) = mpsc::channel(1);

    info!(
        start,
        tick_period_ms = config.tick_period_ms,
        ntp_interval_secs = config.ntp_interval_secs,
        debug = config.debug,
        "clock starting"
    );

    let mut tasks = JoinSet::new();
    tasks.spawn(tick_task(ticker, sync_rx, config.tick_period()));
    tasks.spawn(face_task(
        handle.clone(),
        Arc::clone(&shared),
        config.face_update_secs,
    ));
    tasks.spawn(refresh_task(Arc::clone(&shared), config.refresh_period()));
    tasks.spawn(resync_task(handle.clone(), shared, source, sync_tx, config));

    let outcome = tokio::select! {
        () = shutdown => Ok(()),
        Some(joined) = tasks.join_next() => match joined {
            Ok(name) => Err(RuntimeError::TaskStopped(name)),
            Err(e) => Err(RuntimeError::Join(e)),
        },
    };
    tasks.shutdown().await;

    let state = handle.snapshot();
    info!(now = state.now, last_sync = ?state.last_sync, "clock stopped");
    outcome.map(|()| state)
}
