//! Fixed-rate tick scheduling.
//!
//! The animation runs at a fixed tick rate (24 ticks per second by default)
//! rather than per-vsync: the event loop parks on [`TickClock::next_deadline`]
//! and drains due ticks with [`TickClock::advance`] when it wakes.
//!
//! # Example
//!
//! ```ignore
//! use ballsaver::time::TickClock;
//!
//! let mut clock = TickClock::new(24);
//!
//! // In the event loop's about_to_wait:
//! for _ in 0..clock.advance() {
//!     ball.update();
//! }
//! event_loop.set_control_flow(ControlFlow::WaitUntil(clock.next_deadline()));
//! ```

use std::time::{Duration, Instant};

/// After a long stall (suspend, debugger, modal grab) the schedule is
/// resynchronized instead of replaying the whole backlog of ticks.
const MAX_CATCH_UP: u32 = 5;

/// Deadline scheduler for a fixed tick rate.
#[derive(Debug)]
pub struct TickClock {
    /// Time between ticks.
    interval: Duration,
    /// When the next tick becomes due.
    next_tick: Instant,
    /// Total ticks handed out since construction.
    tick_count: u64,
}

impl TickClock {
    /// Create a clock ticking `ticks_per_second` times per second, with the
    /// first tick due one interval from now. `ticks_per_second` must be
    /// greater than zero.
    pub fn new(ticks_per_second: u32) -> Self {
        let interval = Duration::from_secs(1) / ticks_per_second;
        Self {
            interval,
            next_tick: Instant::now() + interval,
            tick_count: 0,
        }
    }

    /// Time between ticks.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The instant the event loop should wake at next.
    #[inline]
    pub fn next_deadline(&self) -> Instant {
        self.next_tick
    }

    /// Total ticks drained so far.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Drain all due ticks, returning how many fired.
    ///
    /// Returns 0 when called before the next deadline. When more than
    /// `MAX_CATCH_UP` intervals have elapsed the remaining backlog is
    /// dropped and the next deadline is pushed one interval into the
    /// future.
    pub fn advance(&mut self) -> u32 {
        self.advance_at(Instant::now())
    }

    fn advance_at(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while self.next_tick <= now {
            self.next_tick += self.interval;
            due += 1;
            if due >= MAX_CATCH_UP {
                if self.next_tick <= now {
                    self.next_tick = now + self.interval;
                }
                break;
            }
        }
        self.tick_count += u64::from(due);
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_immediately() {
        let mut clock = TickClock::new(24);
        assert_eq!(clock.advance(), 0);
        assert_eq!(clock.tick_count(), 0);
    }

    #[test]
    fn test_interval_from_rate() {
        let clock = TickClock::new(24);
        assert_eq!(clock.interval(), Duration::from_secs(1) / 24);
    }

    #[test]
    fn test_single_tick_after_interval() {
        let mut clock = TickClock::new(1000);
        let start = clock.next_deadline();
        assert_eq!(clock.advance_at(start), 1);
        assert_eq!(clock.tick_count(), 1);
        // The deadline moved exactly one interval forward.
        assert_eq!(clock.next_deadline(), start + clock.interval());
    }

    #[test]
    fn test_multiple_due_ticks_drain_together() {
        let mut clock = TickClock::new(1000);
        let later = clock.next_deadline() + clock.interval() * 2;
        assert_eq!(clock.advance_at(later), 3);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut clock = TickClock::new(1000);
        let much_later = clock.next_deadline() + clock.interval() * 100;
        assert_eq!(clock.advance_at(much_later), MAX_CATCH_UP);
        // The schedule resynchronized: nothing further is due at the same
        // instant, and the next deadline is in the future relative to it.
        assert_eq!(clock.advance_at(much_later), 0);
        assert!(clock.next_deadline() > much_later);
    }

    #[test]
    fn test_real_sleep_makes_tick_due() {
        let mut clock = TickClock::new(200);
        std::thread::sleep(Duration::from_millis(10));
        assert!(clock.advance() >= 1);
    }
}
