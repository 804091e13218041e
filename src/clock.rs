//! Wall-clock time, and the date strings derived from it

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::traits::Clock;
use crate::config::CLOCK_REFRESH_INTERVAL;


/// The actual system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that only moves when told to
#[derive(Clone, Debug)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self { now: Arc::new(Mutex::new(now)) }
    }

    /// Change the time returned by this clock (and by its clones)
    pub fn set(&self, now: DateTime<Local>) {
        match self.now.lock() {
            Ok(mut guard) => *guard = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}


/// The date, as it is displayed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateDisplay {
    /// Day of the month, 1-31
    pub day: u32,
    /// e.g. `Thursday`
    pub weekday: String,
    /// e.g. `March`
    pub month: String,
}

impl DateDisplay {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            weekday: date.format("%A").to_string(),
            month: date.format("%B").to_string(),
        }
    }
}


/// The time currently displayed, and when it must be refreshed
#[derive(Clone, Debug)]
pub struct ClockState {
    current: DateTime<Local>,
    next_refresh: Instant,
    interval: Duration,
}

impl ClockState {
    /// Capture the current time. The next refresh is due one interval after `started_at`
    pub fn new<C: Clock>(clock: &C, started_at: Instant) -> Self {
        Self::with_interval(clock, started_at, CLOCK_REFRESH_INTERVAL)
    }

    pub fn with_interval<C: Clock>(clock: &C, started_at: Instant, interval: Duration) -> Self {
        Self {
            current: clock.now(),
            next_refresh: started_at + interval,
            interval,
        }
    }

    pub fn current(&self) -> &DateTime<Local> {
        &self.current
    }

    pub fn display(&self) -> DateDisplay {
        DateDisplay::from_date(self.current.date_naive())
    }

    /// How long the caller may wait before `tick` has something to do
    pub fn time_until_refresh(&self, now: Instant) -> Duration {
        self.next_refresh.saturating_duration_since(now)
    }

    /// Re-read the clock if the refresh interval has elapsed.
    /// Returns whether it did.
    pub fn tick<C: Clock>(&mut self, clock: &C, now: Instant) -> bool {
        if now < self.next_refresh {
            return false;
        }
        self.current = clock.now();
        // Ticks missed while the process was not scheduled are skipped, not replayed
        while self.next_refresh <= now {
            self.next_refresh += self.interval;
        }
        log::debug!("Clock refreshed to {}", self.current);
        true
    }
}
