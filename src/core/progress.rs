//! Progress reporting for a single fetch.
//!
//! The fetch primitive reports every chunk; [`ProgressTracker`] decides which of
//! those reports become a visible line. Time comes from a [`Clock`] so the
//! throttle can be driven without sleeping.

use crate::core::config::{PROGRESS_BAR_WIDTH, PROGRESS_INTERVAL};
use std::time::{Duration, Instant};

/// Guards throughput against a zero elapsed time.
const ELAPSED_EPSILON_SECS: f64 = 0.001;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Monotonic time source, measured from an arbitrary fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Percentage complete, capped at 100. `None` when the total is zero.
pub fn percent(transferred: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some((transferred as f64 * 100.0 / total as f64).min(100.0))
}

/// Bytes per second.
pub fn throughput(transferred: u64, elapsed: Duration) -> f64 {
    transferred as f64 / (elapsed.as_secs_f64() + ELAPSED_EPSILON_SECS)
}

/// `None` when the speed is zero or the estimate does not fit in a `Duration`.
pub fn remaining(transferred: u64, total: u64, bytes_per_sec: f64) -> Option<Duration> {
    if bytes_per_sec <= 0.0 {
        return None;
    }
    let left = total.saturating_sub(transferred) as f64;
    Duration::try_from_secs_f64(left / bytes_per_sec).ok()
}

/// `MM:SS`, or `??:??` when the remaining time is unknown.
pub fn format_remaining(remaining: Option<Duration>) -> String {
    match remaining {
        Some(d) => {
            let secs = d.as_secs();
            format!("{:02}:{:02}", secs / 60, secs % 60)
        }
        None => "??:??".to_string(),
    }
}

pub fn render_bar(percent: f64) -> String {
    let filled = ((PROGRESS_BAR_WIDTH as f64 * percent / 100.0) as usize).min(PROGRESS_BAR_WIDTH);
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

pub fn render_line(filename: &str, transferred: u64, total: Option<u64>, elapsed: Duration) -> String {
    let Some((total, pct)) = total.and_then(|t| percent(transferred, t).map(|p| (t, p))) else {
        return format!("Downloading {filename}...");
    };

    let speed = throughput(transferred, elapsed);
    let eta = format_remaining(remaining(transferred, total, speed));

    format!(
        "{filename}: [{}] {pct:.1}% | {:.2} MB/s | {eta} remaining",
        render_bar(pct),
        speed / BYTES_PER_MB
    )
}

/// Throttled progress state for one download. Not reused across downloads.
pub struct ProgressTracker<C: Clock = SystemClock> {
    filename: String,
    clock: C,
    started: Duration,
    last_emit: Option<Duration>,
}

impl ProgressTracker<SystemClock> {
    pub fn new(filename: impl Into<String>) -> Self {
        Self::with_clock(filename, SystemClock::default())
    }
}

impl<C: Clock> ProgressTracker<C> {
    pub fn with_clock(filename: impl Into<String>, clock: C) -> Self {
        let started = clock.now();
        Self {
            filename: filename.into(),
            clock,
            started,
            last_emit: None,
        }
    }

    /// Returns the line to show, or `None` when throttled. The first report and
    /// the one completing the transfer are always rendered.
    pub fn update(&mut self, transferred: u64, total: Option<u64>) -> Option<String> {
        let now = self.clock.now();
        let complete = total.is_some_and(|t| transferred >= t);

        if let Some(last) = self.last_emit {
            if now.saturating_sub(last) < PROGRESS_INTERVAL && !complete {
                return None;
            }
        }
        self.last_emit = Some(now);

        Some(render_line(
            &self.filename,
            transferred,
            total,
            now.saturating_sub(self.started),
        ))
    }
}
