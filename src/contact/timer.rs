use std::{collections::BTreeMap, time::Duration};

// generations only grow, so a superseded id never matches again
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerId {
    FormReset(u64),
    Dismiss(u64),
}

pub trait Scheduler {
    fn schedule(&mut self, timer: TimerId, delay: Duration);
    fn cancel(&mut self, timer: TimerId);
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    seq: u64,
    pending: BTreeMap<(Duration, u64), TimerId>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn is_pending(&self, timer: TimerId) -> bool {
        self.pending.values().any(|t| *t == timer)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns the timers that came due, in firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        self.now += by;
        let later = self.pending.split_off(&(self.now, u64::MAX));
        let due = std::mem::replace(&mut self.pending, later);
        due.into_values().collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, timer: TimerId, delay: Duration) {
        self.seq += 1;
        self.pending.insert((self.now + delay, self.seq), timer);
    }

    fn cancel(&mut self, timer: TimerId) {
        self.pending.retain(|_, t| *t != timer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_fires_in_deadline_order() {
        let mut s = ManualScheduler::new();
        s.schedule(TimerId::Dismiss(1), Duration::from_millis(3000));
        s.schedule(TimerId::FormReset(1), Duration::from_millis(2000));

        assert!(s.advance(Duration::from_millis(1999)).is_empty());
        assert_eq!(
            s.advance(Duration::from_millis(1)),
            vec![TimerId::FormReset(1)]
        );
        assert_eq!(
            s.advance(Duration::from_millis(5000)),
            vec![TimerId::Dismiss(1)]
        );
        assert_eq!(s.pending_count(), 0);
        assert_eq!(s.now(), Duration::from_millis(7000));
    }

    #[test]
    fn test_cancel_removes_pending() {
        let mut s = ManualScheduler::new();
        s.schedule(TimerId::Dismiss(4), Duration::from_millis(10));
        assert!(s.is_pending(TimerId::Dismiss(4)));
        s.cancel(TimerId::Dismiss(4));
        assert!(!s.is_pending(TimerId::Dismiss(4)));
        assert!(s.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_same_deadline_keeps_schedule_order() {
        let mut s = ManualScheduler::new();
        s.schedule(TimerId::Dismiss(2), Duration::from_millis(5));
        s.schedule(TimerId::FormReset(2), Duration::from_millis(5));
        assert_eq!(
            s.advance(Duration::from_millis(5)),
            vec![TimerId::Dismiss(2), TimerId::FormReset(2)]
        );
    }
}
