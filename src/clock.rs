//! Time sources for the session state machine
//!
//! The session never reads the wall clock directly. It asks a [`Clock`]
//! for the current time, so hosts can use [`SystemClock`] while tests and
//! replays drive time explicitly with [`ManualClock`].

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use web_time::{SystemTime, UNIX_EPOCH};

/// A source of the current time
pub trait Clock {
    /// Returns the current time
    fn now(&self) -> SystemTime;
}

/// Wall clock backed by [`SystemTime::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock that only moves when told to
///
/// Clones share the same underlying time, so a test can keep one handle
/// while the session owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    /// Milliseconds since the unix epoch
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock frozen at the unix epoch
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `duration`
    pub fn advance(&self, duration: Duration) {
        self.millis
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
    }

    /// Moves the clock forward by `millis` milliseconds
    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

/// Tracks when the current question started accepting answers
///
/// Mirrors the slide timers of a hosted quiz: the start is stamped when a
/// question opens and re-stamped on resume, and elapsed time never goes
/// negative even if the clock steps backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionTimer {
    started_at: Option<SystemTime>,
}

impl QuestionTimer {
    /// Stamps the start time
    pub fn start(&mut self, now: SystemTime) {
        self.started_at = Some(now);
    }

    /// Forgets the start time
    pub fn clear(&mut self) {
        self.started_at = None;
    }

    /// Returns the stamped start time, if any
    pub fn started_at(&self) -> Option<SystemTime> {
        self.started_at
    }

    /// Time elapsed between the start stamp and `now`
    ///
    /// Returns zero when the timer was never started or `now` is earlier
    /// than the start.
    pub fn elapsed(&self, now: SystemTime) -> Duration {
        self.started_at
            .and_then(|start| now.duration_since(start).ok())
            .unwrap_or_default()
    }
}
