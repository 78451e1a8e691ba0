//! Cancellable quiet-period timer

use std::time::{Duration, Instant};

/// Holds at most one pending value. Scheduling replaces (cancels) whatever was
/// pending; the value is released once by [`DebounceTimer::poll`] after the
/// delay has passed without another schedule.
#[derive(Debug)]
pub struct DebounceTimer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> DebounceTimer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending value if its quiet period is over.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some((deadline, _)) if now >= *deadline);
        if due {
            self.pending.take().map(|(_, value)| value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.schedule("ec", start);

        assert_eq!(timer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(timer.poll(start + DELAY), Some("ec"));
        assert_eq!(timer.poll(start + DELAY * 2), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn new_keystroke_restarts_the_timer() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.schedule("e", start);
        timer.schedule("ec", start + Duration::from_millis(200));
        timer.schedule("ech", start + Duration::from_millis(400));

        assert_eq!(timer.poll(start + Duration::from_millis(650)), None);
        assert_eq!(timer.deadline(), Some(start + Duration::from_millis(700)));
        assert_eq!(timer.poll(start + Duration::from_millis(700)), Some("ech"));
    }

    #[test]
    fn cancel_drops_pending_value() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(DELAY);
        timer.schedule(1, start);
        timer.cancel();
        assert_eq!(timer.poll(start + DELAY), None);
    }
}
