use std::time::{Duration, Instant};

/// Fixed-period redraw schedule.
///
/// The first poll is always due. After a tick fires at `now`, the next one is
/// due at `now + interval`: lateness is not compensated and missed ticks are
/// dropped rather than replayed.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    interval: Duration,
    next: Option<Instant>,
}

impl TickSchedule {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "tick interval must be non-zero");
        Self { interval, next: None }
    }

    /// Instant the next tick is due, or `None` before the first tick.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns `true` when a tick is due at `now` and schedules the following one.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if now < deadline => false,
            _ => {
                self.next = Some(now + self.interval);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_millis(1000);

    #[test]
    fn first_poll_fires_immediately() {
        let mut s = TickSchedule::new(SECOND);
        assert!(s.deadline().is_none());
        let t0 = Instant::now();
        assert!(s.poll(t0));
        assert_eq!(s.deadline(), Some(t0 + SECOND));
    }

    #[test]
    fn does_not_fire_before_deadline() {
        let mut s = TickSchedule::new(SECOND);
        let t0 = Instant::now();
        s.poll(t0);
        assert!(!s.poll(t0 + Duration::from_millis(999)));
        assert!(s.poll(t0 + SECOND));
    }

    #[test]
    fn late_tick_reschedules_from_now_without_catch_up() {
        let mut s = TickSchedule::new(SECOND);
        let t0 = Instant::now();
        s.poll(t0);

        // Three periods pass unobserved; only one tick fires.
        let late = t0 + Duration::from_millis(3500);
        assert!(s.poll(late));
        assert!(!s.poll(late));
        assert_eq!(s.deadline(), Some(late + SECOND));
    }
}
