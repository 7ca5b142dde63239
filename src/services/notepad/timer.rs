use std::time::{Duration, Instant};

/// Periodic autosave schedule. At most one schedule exists: starting again
/// replaces the previous one.
#[derive(Debug, Clone)]
pub struct AutoSaveTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl AutoSaveTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// True once per elapsed interval; the next deadline is rescheduled from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, for scheduling a repaint.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

/// Short-lived "no match" indicator.
#[derive(Debug, Clone)]
pub struct MissPulse {
    duration: Duration,
    until: Option<Instant>,
}

impl MissPulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    pub fn clear(&mut self) {
        self.until = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_after_interval() {
        let start = Instant::now();
        let mut timer = AutoSaveTimer::new(Duration::from_secs(180));
        timer.start(start);

        assert!(!timer.poll(start + Duration::from_secs(179)));
        assert!(timer.poll(start + Duration::from_secs(180)));
        // rescheduled, not firing again right away
        assert!(!timer.poll(start + Duration::from_secs(181)));
        assert!(timer.poll(start + Duration::from_secs(360)));
    }

    #[test]
    fn test_restart_replaces_schedule() {
        let start = Instant::now();
        let mut timer = AutoSaveTimer::new(Duration::from_secs(10));
        timer.start(start);
        timer.start(start + Duration::from_secs(8));

        assert!(!timer.poll(start + Duration::from_secs(12)));
        assert!(timer.poll(start + Duration::from_secs(18)));
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let start = Instant::now();
        let mut timer = AutoSaveTimer::new(Duration::from_secs(1));
        timer.start(start);
        timer.stop();

        assert!(!timer.is_running());
        assert!(!timer.poll(start + Duration::from_secs(5)));
        assert_eq!(timer.remaining(start), None);
    }

    #[test]
    fn test_miss_pulse_expires() {
        let start = Instant::now();
        let mut pulse = MissPulse::new(Duration::from_millis(450));
        assert!(!pulse.is_active(start));

        pulse.trigger(start);
        assert!(pulse.is_active(start + Duration::from_millis(449)));
        assert!(!pulse.is_active(start + Duration::from_millis(450)));
    }
}
