//! Game clock
//!
//! The engine never sleeps or owns a timer. It only asks its host to change
//! the firing rate or to pause, resume and stop firing, through [`Scheduler`].
//! [`TickClock`] is the tokio-backed host used by the interactive mode.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// The minimal timer contract the engine needs from its host
pub trait Scheduler {
    /// Fire at `rate` times the base frequency, starting with the next firing
    fn set_rate(&mut self, rate: f64);
    /// Stop firing until [`Scheduler::resume`]
    fn pause(&mut self);
    /// Start firing again after a pause or a stop
    fn resume(&mut self);
    /// Stop firing for good (until the next resume on restart)
    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStatus {
    Running,
    Paused,
    Stopped,
}

/// Repeating timer with an adjustable rate, built on [`tokio::time::Interval`]
pub struct TickClock {
    base_period: Duration,
    rate: f64,
    status: ClockStatus,
    interval: Option<Interval>,
}

impl TickClock {
    /// Create a stopped clock that fires every `base_period` at rate 1.0
    pub fn new(base_period: Duration) -> Self {
        Self {
            base_period,
            rate: 1.0,
            status: ClockStatus::Stopped,
            interval: None,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn status(&self) -> ClockStatus {
        self.status
    }

    /// Time between two firings at the current rate
    pub fn period(&self) -> Duration {
        self.base_period.div_f64(self.rate)
    }

    /// Waits for the next firing.
    ///
    /// Never completes while paused or stopped. Cancel safe, so it can sit in
    /// a `tokio::select!` branch.
    pub async fn tick(&mut self) {
        match (self.status, self.interval.as_mut()) {
            (ClockStatus::Running, Some(interval)) => {
                interval.tick().await;
            }
            _ => std::future::pending::<()>().await,
        }
    }

    // The first firing after a re-arm is one full period away, so nothing
    // fires immediately after a rate change or a resume.
    fn rearm(&mut self) {
        let period = self.period();
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }
}

impl Scheduler for TickClock {
    fn set_rate(&mut self, rate: f64) {
        if !(rate.is_finite() && rate > 0.0) {
            log::warn!("ignoring invalid clock rate {rate}");
            return;
        }
        if rate == self.rate {
            return;
        }
        log::debug!("clock rate {} -> {}", self.rate, rate);
        self.rate = rate;
        if self.status == ClockStatus::Running {
            self.rearm();
        }
    }

    fn pause(&mut self) {
        if self.status == ClockStatus::Running {
            self.status = ClockStatus::Paused;
        }
    }

    fn resume(&mut self) {
        if self.status != ClockStatus::Running {
            self.status = ClockStatus::Running;
            self.rearm();
        }
    }

    fn stop(&mut self) {
        self.status = ClockStatus::Stopped;
        self.interval = None;
    }
}
