//! Repeating playback deadline

use std::time::{Duration, Instant};

/// A cancellable repeating timer that paces cursor advances.
///
/// The timer is a passive armed deadline: the owner polls it from its
/// event loop instead of registering a callback. Arming replaces any prior
/// deadline and cancelling when nothing is armed is a no-op, so the owner
/// can call both unconditionally.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Cadence {
            interval,
            next_due: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the deadline one interval from `now`, replacing any prior one.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Disarm the deadline. Safe to call when nothing is armed.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Change the interval. If a deadline is armed it is re-armed one new
    /// interval from `now`; an idle timer just remembers the interval for
    /// the next start.
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        if self.next_due.is_some() {
            self.next_due = Some(now + interval);
        }
    }

    /// Fire if the deadline has passed, re-arming for the next interval.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the armed deadline, if any. Zero once due.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_poll_fires_only_after_the_interval() {
        let mut cadence = Cadence::new(ms(100));
        let t0 = Instant::now();
        cadence.start(t0);

        assert!(!cadence.poll(t0 + ms(99)));
        assert!(cadence.poll(t0 + ms(100)));
        // Re-armed relative to the fire time
        assert!(!cadence.poll(t0 + ms(150)));
        assert!(cadence.poll(t0 + ms(200)));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut cadence = Cadence::new(ms(100));
        cadence.cancel();
        cadence.cancel();
        assert!(!cadence.is_active());

        let t0 = Instant::now();
        cadence.start(t0);
        cadence.cancel();
        assert!(!cadence.poll(t0 + ms(500)));
    }

    #[test]
    fn test_start_replaces_prior_deadline() {
        let mut cadence = Cadence::new(ms(100));
        let t0 = Instant::now();
        cadence.start(t0);
        cadence.start(t0 + ms(80));

        assert!(!cadence.poll(t0 + ms(100)));
        assert!(cadence.poll(t0 + ms(180)));
    }

    #[test]
    fn test_set_interval_rearms_active_timer() {
        let mut cadence = Cadence::new(ms(1000));
        let t0 = Instant::now();
        cadence.start(t0);
        cadence.set_interval(ms(100), t0 + ms(400));

        assert!(!cadence.poll(t0 + ms(499)));
        assert!(cadence.poll(t0 + ms(500)));
    }

    #[test]
    fn test_set_interval_on_idle_timer_stays_idle() {
        let mut cadence = Cadence::new(ms(1000));
        let t0 = Instant::now();
        cadence.set_interval(ms(100), t0);

        assert!(!cadence.is_active());
        assert_eq!(cadence.interval(), ms(100));
        assert!(!cadence.poll(t0 + ms(500)));
    }

    #[test]
    fn test_time_until_due() {
        let mut cadence = Cadence::new(ms(100));
        let t0 = Instant::now();
        assert_eq!(cadence.time_until_due(t0), None);

        cadence.start(t0);
        assert_eq!(cadence.time_until_due(t0 + ms(40)), Some(ms(60)));
        assert_eq!(cadence.time_until_due(t0 + ms(200)), Some(ms(0)));
    }
}
