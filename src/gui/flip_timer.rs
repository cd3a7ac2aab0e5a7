use std::time::{
    Duration,
    Instant,
};

/// Cancellable single-shot deadline for the auto-reveal. At most one deadline
/// is ever outstanding; scheduling again replaces the previous one.
#[derive(Debug, Default)]
pub struct FlipTimer {
    deadline: Option<Instant>,
}

impl FlipTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    pub fn schedule(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    /// Cancels any pending reveal so a stale timer can't fire against a
    /// different card.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True exactly once, when the deadline has passed. The deadline is
    /// consumed so the reveal fires a single time.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time until the pending reveal, used to request a repaint at the right
    /// moment instead of spinning.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_deadline() {
        let mut timer = FlipTimer::new();
        timer.schedule(Duration::ZERO);

        assert!(timer.poll());
        assert!(!timer.poll());
        assert!(timer.time_remaining().is_none());
    }

    #[test]
    fn cancel_discards_pending_deadline() {
        let mut timer = FlipTimer::new();
        timer.schedule(Duration::ZERO);
        timer.cancel();

        assert!(!timer.poll());
    }

    #[test]
    fn reschedule_replaces_previous_deadline() {
        let mut timer = FlipTimer::new();
        timer.schedule(Duration::from_secs(3600));
        timer.schedule(Duration::ZERO);

        assert!(timer.poll());
    }

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = FlipTimer::new();
        assert!(!timer.poll());
        assert!(timer.time_remaining().is_none());
    }
}
