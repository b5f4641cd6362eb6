use std::time::Duration;

pub const DEFAULT_REDRAW_INTERVAL_MS: u64 = 50;
pub const DEFAULT_REDRAW_INTERVAL: Duration = Duration::from_millis(DEFAULT_REDRAW_INTERVAL_MS);

/// Leading + trailing edge throttle for redraw requests.
///
/// The first request in an idle window fires immediately. Requests landing
/// inside the window collapse into one pending trailing redraw that becomes
/// due at the end of the window. Time is supplied by the caller so behavior
/// stays deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawThrottle {
    interval: Duration,
    window_start: Option<Duration>,
    pending: bool,
}

impl Default for RedrawThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_REDRAW_INTERVAL)
    }
}

impl RedrawThrottle {
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
            pending: false,
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Registers a redraw request. Returns `true` when it should fire now.
    pub fn request(&mut self, now: Duration) -> bool {
        if self.within_window(now) {
            self.pending = true;
            return false;
        }
        self.open_window(now);
        true
    }

    /// Fires the pending trailing redraw once its window has closed.
    pub fn poll(&mut self, now: Duration) -> bool {
        if !self.pending || self.within_window(now) {
            return false;
        }
        self.open_window(now);
        true
    }

    /// When the pending trailing redraw becomes due, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        if !self.pending {
            return None;
        }
        self.window_start.map(|start| start + self.interval)
    }

    /// Drops a pending trailing redraw without touching the current window.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    fn within_window(&self, now: Duration) -> bool {
        // A clock that runs backwards opens a fresh window instead of stalling.
        self.window_start
            .and_then(|start| now.checked_sub(start))
            .is_some_and(|elapsed| elapsed < self.interval)
    }

    fn open_window(&mut self, now: Duration) {
        self.window_start = Some(now);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{DEFAULT_REDRAW_INTERVAL_MS, RedrawThrottle};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn first_request_fires_on_leading_edge() {
        let mut throttle = RedrawThrottle::new(ms(50));
        assert!(throttle.request(ms(0)));
        assert!(!throttle.is_pending());
        assert_eq!(throttle.deadline(), None);
    }

    #[test]
    fn requests_inside_window_collapse_into_one_trailing_redraw() {
        let mut throttle = RedrawThrottle::new(ms(50));
        assert!(throttle.request(ms(0)));
        assert!(!throttle.request(ms(10)));
        assert!(!throttle.request(ms(20)));
        assert!(!throttle.request(ms(49)));
        assert_eq!(throttle.deadline(), Some(ms(50)));

        assert!(!throttle.poll(ms(49)));
        assert!(throttle.poll(ms(50)));
        assert!(!throttle.poll(ms(60)));
        assert_eq!(throttle.deadline(), None);
    }

    #[test]
    fn trailing_redraw_opens_a_new_window() {
        let mut throttle = RedrawThrottle::new(ms(50));
        assert!(throttle.request(ms(0)));
        assert!(!throttle.request(ms(30)));
        assert!(throttle.poll(ms(55)));

        assert!(!throttle.request(ms(70)));
        assert_eq!(throttle.deadline(), Some(ms(105)));
    }

    #[test]
    fn overdue_request_fires_directly() {
        let mut throttle = RedrawThrottle::new(ms(50));
        assert!(throttle.request(ms(0)));
        assert!(!throttle.request(ms(10)));
        assert!(throttle.request(ms(80)));
        assert!(!throttle.is_pending());
    }

    #[test]
    fn cancel_drops_pending_redraw() {
        let mut throttle = RedrawThrottle::new(ms(50));
        assert!(throttle.request(ms(0)));
        assert!(!throttle.request(ms(10)));
        throttle.cancel();
        assert!(!throttle.poll(ms(100)));
    }

    #[test]
    fn backwards_clock_opens_fresh_window() {
        let mut throttle = RedrawThrottle::new(ms(50));
        assert!(throttle.request(ms(100)));
        assert!(throttle.request(ms(40)));
    }

    #[test]
    fn default_throttle_uses_default_interval() {
        let throttle = RedrawThrottle::default();
        assert_eq!(throttle.interval(), ms(DEFAULT_REDRAW_INTERVAL_MS));
    }
}
