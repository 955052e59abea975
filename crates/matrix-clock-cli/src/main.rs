//! `matrixclock` CLI: CET/CEST conversions and a simulated matrix clock.
//!
//! ## Usage
//!
//! ```sh
//! # Current local time
//! matrixclock now
//!
//! # Convert a Unix (or Y2K-epoch) timestamp to local time
//! matrixclock local 1677816367
//! matrixclock local 731131567 --epoch y2k --json
//!
//! # Weekday and day of year for a calendar tuple
//! matrixclock expand 2000-03-01T00:00:00
//!
//! # Summer time transitions of a year
//! matrixclock dst 2024
//!
//! # Run the clock on the console for 30 seconds in debug timing
//! matrixclock run --debug --seconds 30
//! ```
//!
//! Logs go to stderr and follow `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use civil_time::{
    dst_transitions, format_clock, local_civil_time, timestamp_from_secs_f64, utc_civil_time,
    zone_at, CivilTime, Epoch, ShortDate, RULE_VALID_YEARS,
};
use clap::{Parser, Subcommand};
use clock_runtime::{
    run_clock, ClockConfig, ClockDisplay, ClockFace, FixedSensor, Peripherals, Reading,
    SystemTimeSource,
};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "matrixclock",
    version,
    about = "CET/CEST civil time and LED matrix clock simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current local time
    Now {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Convert a timestamp to local time
    Local {
        /// Seconds since the epoch; fractional seconds are floored
        #[arg(allow_hyphen_values = true)]
        timestamp: String,
        /// Epoch the timestamp counts from (unix or y2k)
        #[arg(long, default_value_t = Epoch::Unix)]
        epoch: Epoch,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute weekday and day of year for YYYY-MM-DDTHH:MM:SS
    Expand {
        date: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the summer time transitions of a year
    Dst {
        #[arg(allow_hyphen_values = true)]
        year: i64,
    },
    /// Run the clock with a console display
    Run {
        /// TOML timing configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Start at the debug instant with five times faster ticks
        #[arg(long)]
        debug: bool,
        /// Stop after this many seconds instead of waiting for Ctrl-C
        #[arg(long)]
        seconds: Option<u64>,
    },
}

/// Reading reported by the console clock in place of a bus sensor.
const CONSOLE_READING: Reading = Reading {
    temperature_c: 21.0,
    humidity_pct: 45.0,
};

#[derive(Serialize)]
struct LocalReport {
    unix_timestamp: i64,
    zone: &'static str,
    offset_seconds: i64,
    time: String,
    date: String,
    #[serde(flatten)]
    civil: CivilTime,
}

impl LocalReport {
    fn at(unix_timestamp: i64) -> Self {
        let zone = zone_at(unix_timestamp);
        let civil = local_civil_time(unix_timestamp);
        let (time, date) = format_clock(&civil);
        LocalReport {
            unix_timestamp,
            zone: zone.abbreviation(),
            offset_seconds: zone.offset_seconds(),
            time,
            date,
            civil,
        }
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            println!("{}", self.time);
            println!("{}", self.date);
            println!("{}", self.zone);
        }
        Ok(())
    }
}

/// Prints each new face as one line on stdout.
struct ConsoleDisplay;

impl ClockDisplay for ConsoleDisplay {
    fn show(&mut self, face: &ClockFace) {
        println!("{}", face);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Now { json } => {
            LocalReport::at(chrono::Utc::now().timestamp()).print(json)?;
        }
        Commands::Local {
            timestamp,
            epoch,
            json,
        } => {
            let secs = parse_timestamp(&timestamp)?;
            LocalReport::at(epoch.to_unix(secs)).print(json)?;
        }
        Commands::Expand { date, json } => {
            let short: ShortDate = date
                .parse()
                .with_context(|| format!("Failed to parse date: {}", date))?;
            let civil = short.expand();
            if json {
                println!("{}", serde_json::to_string_pretty(&civil)?);
            } else {
                let (time, date) = format_clock(&civil);
                println!("{}", time);
                println!("{}", date);
                println!("day {} of the year", civil.day_of_year);
            }
        }
        Commands::Dst { year } => {
            if !RULE_VALID_YEARS.contains(&year) {
                warn!(
                    year,
                    "transition formulas are exact only for {}..={}",
                    RULE_VALID_YEARS.start(),
                    RULE_VALID_YEARS.end()
                );
            }
            let transitions = dst_transitions(year);
            print_transition("CEST begins", transitions.march);
            print_transition("CEST ends  ", transitions.october);
        }
        Commands::Run {
            config,
            debug,
            seconds,
        } => run(config, debug, seconds).await?,
    }

    Ok(())
}

async fn run(config_path: Option<PathBuf>, debug: bool, seconds: Option<u64>) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => ClockConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ClockConfig::default(),
    };
    if debug {
        config = config.with_debug();
    }
    let start = config.start_timestamp(chrono::Utc::now().timestamp());

    let shutdown = async move {
        match seconds {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!(error = %e, "cannot listen for Ctrl-C, stopping");
                }
            }
        }
    };

    let state = run_clock(
        config,
        start,
        Peripherals::new(ConsoleDisplay, FixedSensor(CONSOLE_READING)),
        SystemTimeSource,
        shutdown,
    )
    .await
    .context("Clock stopped with an error")?;

    info!(now = state.now, "final clock value");
    Ok(())
}

/// Accept whole seconds exactly and fall back to a float for fractions.
fn parse_timestamp(raw: &str) -> Result<i64> {
    if let Ok(secs) = raw.parse::<i64>() {
        return Ok(secs);
    }
    let secs: f64 = raw
        .parse()
        .with_context(|| format!("Invalid timestamp: {}", raw))?;
    if !secs.is_finite() {
        anyhow::bail!("Invalid timestamp: {} is not finite", raw);
    }
    Ok(timestamp_from_secs_f64(secs))
}

fn print_transition(label: &str, timestamp: i64) {
    let (time, date) = format_clock(&utc_civil_time(timestamp));
    println!("{} {} ({} {} UTC)", label, timestamp, date, time);
}
