use std::time::Duration;

/// Period of both the reveal countdown and the game countdown.
pub const TICK: Duration = Duration::from_secs(1);

/// A repeating timer that fires once every `period`.
///
/// Timers don't run on their own: the owner moves them forward with `advance`.
/// Dropping a timer cancels it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    /// Time since the last firing (or since the timer was started).
    elapsed: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Interval {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Time left until the next firing.
    pub fn until_next(&self) -> Duration {
        self.period - self.elapsed
    }

    /// Move the timer forward, returning how many times it fired.
    pub fn advance(&mut self, by: Duration) -> u32 {
        self.elapsed += by;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

/// A one-shot timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delay {
    remaining: Duration,
}

impl Delay {
    pub fn new(duration: Duration) -> Self {
        Delay {
            remaining: duration,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Move the timer forward. Returns true once the delay has fully elapsed.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(by);
        self.remaining.is_zero()
    }
}
