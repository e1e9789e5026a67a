/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike};
use clap::Parser;
use tracing::{error, info, warn};

use eventclock::calendar::WallTime;
use eventclock::clock::{EventClock, TickOutcome};
use eventclock::config::ClockConfig;
use eventclock::peer::PeerMessage;
use eventclock::schedule::EVENT_COUNT;
use eventclock::storage::{FileStore, PersistentStore};
use eventclock::timeline::{LogAlerts, Section};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Countdown clock for the daily event schedule.
///
/// Example:
///   eventclock --tz-offset 120 --toggle upcoming:0 --ticks 5
#[derive(Debug, Parser)]
#[command(
    name = "eventclock",
    about = "Event countdown clock",
    long_about = None,
)]
struct Cli {
    /// Path to the YAML clock configuration file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Directory for persisted records (overrides the config file).
    #[arg(short = 's', long = "storage-dir")]
    storage_dir: Option<PathBuf>,

    /// Timezone offset in minutes, local minus UTC, as if sent by the companion.
    #[arg(short = 'z', long = "tz-offset", allow_negative_numbers = true)]
    tz_offset: Option<i16>,

    /// Toggle a reminder after the first tick, as `active:ROW` or `upcoming:ROW`.
    #[arg(short = 't', long = "toggle", value_parser = parse_toggle)]
    toggle: Vec<(Section, usize)>,

    /// Stop after this many ticks (runs until Ctrl-C otherwise).
    #[arg(short = 'n', long = "ticks")]
    ticks: Option<u64>,
}

fn parse_toggle(arg: &str) -> Result<(Section, usize), String> {
    let (section, row) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected SECTION:ROW, got '{arg}'"))?;
    let section = match section {
        "active" => Section::Active,
        "upcoming" => Section::Upcoming,
        other => return Err(format!("unknown section '{other}' (valid: active, upcoming)")),
    };
    let row = row
        .parse()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    Ok((section, row))
}

/// Device local time as a [`WallTime`].
fn local_now() -> Result<WallTime> {
    let now = Local::now();
    WallTime::new(
        now.year() - 1900,
        now.month0() as i32,
        now.day() as i32,
        now.hour() as i32,
        now.minute() as i32,
        now.second() as i32,
    )
    .with_context(|| format!("local time {now} is outside the supported calendar"))
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        config      = ?cli.config,
        storage_dir = ?cli.storage_dir,
        tz_offset   = ?cli.tz_offset,
        toggles     = cli.toggle.len(),
        ticks       = ?cli.ticks,
        "Event clock starting up..."
    );

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // ── Configuration ─────────────────────────────────────────────────────────
    let mut config = match &cli.config {
        Some(path) => ClockConfig::load_from_file(path)
            .context("Failed to load clock configuration")?,
        None => {
            warn!("No configuration file provided, using defaults");
            ClockConfig::default()
        }
    };
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }

    let store = FileStore::open(&config.storage_dir)
        .with_context(|| format!("Cannot open storage at {}", config.storage_dir.display()))?;

    let mut clock: EventClock<FileStore, EVENT_COUNT> =
        EventClock::with_default_schedule(store, config.active_window);
    clock.start();

    if let Some(minutes) = cli.tz_offset {
        clock.on_peer_message(&PeerMessage::tz_offset(minutes));
    }

    // ── Tick loop ─────────────────────────────────────────────────────────────
    let mut alerts = LogAlerts::default();
    let mut pending_toggles = cli.toggle;
    let mut last_pivot = None;
    let mut ticks = 0u64;
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            result = &mut ctrl_c => {
                if let Err(e) = result {
                    error!("Cannot listen for Ctrl-C: {e}");
                }
                info!("Interrupted");
                break;
            }
        }

        match tick_at(&mut clock, local_now(), &mut alerts) {
            TickOutcome::Updated { pivot } => {
                if !pending_toggles.is_empty() {
                    for (section, row) in pending_toggles.drain(..) {
                        match clock.toggle_reminder(section, row) {
                            Some(enabled) => info!(?section, row, enabled, "Toggled reminder"),
                            None => warn!(?section, row, "No such row"),
                        }
                    }
                    clock.save_reminders();
                }
                if last_pivot != Some(pivot) {
                    last_pivot = Some(pivot);
                    print_rows(&clock, config.upcoming_rows);
                }
            }
            TickOutcome::AwaitingTimezone => {
                if ticks == 0 {
                    warn!("No timezone offset yet; pass --tz-offset to set one");
                }
            }
            TickOutcome::ClockOutOfRange => {}
        }

        ticks += 1;
        if cli.ticks.is_some_and(|limit| ticks >= limit) {
            break;
        }
    }

    info!(ticks, reminders_fired = alerts.fired(), "Tick loop finished");
    clock.shutdown();
    Ok(())
}

/// One tick at `local`.  An unreadable host clock skips the tick but keeps
/// the loop (and the shutdown save) going.
fn tick_at<S: PersistentStore, const N: usize>(
    clock: &mut EventClock<S, N>,
    local: Result<WallTime>,
    alerts: &mut LogAlerts,
) -> TickOutcome {
    match local {
        Ok(local) => clock.on_second_tick(&local, alerts),
        Err(e) => {
            warn!("Skipping tick: {e:#}");
            TickOutcome::ClockOutOfRange
        }
    }
}

fn print_rows<S: PersistentStore, const N: usize>(clock: &EventClock<S, N>, upcoming_rows: usize) {
    for (section, limit) in [
        (Section::Active, usize::MAX),
        (Section::Upcoming, upcoming_rows),
    ] {
        info!("{}", section.title());
        let count = clock.timeline().get_count(section).min(limit);
        for row in 0..count {
            if let Some(text) = clock.row_text(section, row) {
                info!("  {text}");
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
