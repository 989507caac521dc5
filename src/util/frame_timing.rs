use web_time::{Duration, Instant};

/// Fixed-period tick timing with a smoothed rate for diagnostics.
///
/// Deadlines advance by whole periods from the previous deadline, so a late
/// tick does not push every later tick back.
pub struct TickTiming {
    /// Tick period.
    period: Duration,
    /// When the next tick is due.
    next_due: Instant,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed ticks per second (exponential moving average)
    smoothed_rate: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl TickTiming {
    /// Timer ticking every `period`, first tick due one period from now.
    pub fn new(period: Duration) -> Self {
        let now = Instant::now();
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
            last_tick: now,
            smoothed_rate: 1.0 / period.as_secs_f32(),
            smoothing: 0.05,
        }
    }

    /// Time left until the next tick is due (zero if overdue).
    pub fn until_next(&self) -> Duration {
        self.next_due.saturating_duration_since(Instant::now())
    }

    /// Record that a tick ran and schedule the next one.
    ///
    /// If the timer fell more than a full period behind, the schedule
    /// restarts from now instead of bursting to catch up.
    pub fn end_tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        if elapsed > 0.0 {
            self.smoothed_rate = self.smoothed_rate * (1.0 - self.smoothing)
                + (1.0 / elapsed) * self.smoothing;
        }

        self.next_due += self.period;
        if self.next_due + self.period < now {
            self.next_due = now + self.period;
        }
    }

    /// Smoothed ticks per second.
    pub fn rate(&self) -> f32 {
        self.smoothed_rate
    }
}
