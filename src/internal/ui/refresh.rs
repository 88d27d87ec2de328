/// Countdown driving the list view's auto-refresh.
///
/// The owner ticks it once per second while the list is visible. When the
/// countdown reaches zero `tick` reports a refresh is due and rearms itself.
/// Manual refresh and page changes call `reset`, which also cancels the
/// pending expiry (the next one is a full interval away again).
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshTimer {
    interval: u64,
    remaining: u64,
}

impl RefreshTimer {
    pub fn new(interval_secs: u64) -> Self {
        let interval = interval_secs.max(1);
        Self {
            interval,
            remaining: interval,
        }
    }

    /// Advance the countdown by one second. Returns true exactly when the
    /// interval expires; the timer rearms on expiry.
    pub fn tick(&mut self) -> bool {
        if self.remaining <= 1 {
            self.remaining = self.interval;
            true
        } else {
            self.remaining -= 1;
            false
        }
    }

    /// Restart the countdown from the full interval.
    pub fn reset(&mut self) {
        self.remaining = self.interval;
    }

    /// Seconds left until the next automatic refresh, for display.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining
    }
}
