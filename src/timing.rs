//! Elapsed-time predicates shared by the fire cooldown and the LED pulses.

/// True iff more than `window_ms` has elapsed since `last_event_ms`.
///
/// Pure predicate over a monotonic millisecond tick count. The subtraction
/// wraps, so when the tick counter overflows the result can be wrong for one
/// window; this is accepted rather than corrected.
#[must_use]
pub fn ready(last_event_ms: u32, now_ms: u32, window_ms: u32) -> bool {
    now_ms.wrapping_sub(last_event_ms) > window_ms
}

/// A cooldown window: the minimum elapsed time before an event type may
/// trigger again.
///
/// A window that has never been restarted is ready, so the first event after
/// boot goes through immediately.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    duration_ms: u32,
    last_ms: Option<u32>,
}

impl Window {
    #[must_use]
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            last_ms: None,
        }
    }

    /// True once the window has elapsed since the last restart.
    #[must_use]
    pub fn is_ready(&self, now_ms: u32) -> bool {
        match self.last_ms {
            Some(last) => ready(last, now_ms, self.duration_ms),
            None => true,
        }
    }

    /// Restart the window from `now_ms`.
    pub fn restart(&mut self, now_ms: u32) {
        self.last_ms = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_matches_elapsed_comparison() {
        for (last, now, window) in [
            (0, 0, 500),
            (0, 500, 500),
            (0, 501, 500),
            (100, 601, 500),
            (1000, 1000, 0),
            (1000, 1001, 0),
        ] {
            assert_eq!(ready(last, now, window), now - last > window);
        }
    }

    #[test]
    fn ready_is_strict() {
        // Exactly `window` elapsed is not ready yet.
        assert!(!ready(0, 500, 500));
        assert!(ready(0, 501, 500));
    }

    #[test]
    fn fresh_window_is_ready() {
        let w = Window::new(500);
        assert!(w.is_ready(0));
    }

    #[test]
    fn restarted_window_waits_out_its_duration() {
        let mut w = Window::new(500);
        w.restart(100);
        assert!(!w.is_ready(100));
        assert!(!w.is_ready(600));
        assert!(w.is_ready(601));
    }
}
