//! Fixed-window rate limiter with an injected clock.
//!
//! Replaces the ad-hoc global request counter the lookup UI used to keep:
//! the window, threshold, and clock are all explicit, so callers decide
//! where the state lives and tests drive time without sleeping.
//!
//! The limiter is a presentation-side component; the lookup endpoint itself
//! does not enforce any rate limit.

use std::time::{Duration, Instant};

/// Time source for the limiter. Production code uses [`SystemClock`];
/// tests substitute a manual clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Fixed-window counter: at most `limit` acquisitions per `window`.
///
/// The window starts at the first acquisition attempt and rolls over once
/// `window` has elapsed; the count then resets to zero.
#[derive(Debug)]
pub struct FixedWindowLimiter<C: Clock = SystemClock> {
    clock: C,
    limit: u32,
    window: Duration,
    window_start: Instant,
    count: u32,
}

impl FixedWindowLimiter<SystemClock> {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self::with_clock(limit, window, SystemClock)
    }
}

impl<C: Clock> FixedWindowLimiter<C> {
    pub fn with_clock(limit: u32, window: Duration, clock: C) -> Self {
        let window_start = clock.now();
        Self {
            clock,
            limit,
            window,
            window_start,
            count: 0,
        }
    }

    /// Records one acquisition. Returns `Err` with the time remaining in
    /// the current window when the threshold is already reached.
    pub fn try_acquire(&mut self) -> Result<(), Duration> {
        let now = self.clock.now();

        let elapsed = now.duration_since(self.window_start);
        if elapsed >= self.window {
            self.window_start = now;
            self.count = 0;
        }

        if self.count >= self.limit {
            let elapsed = now.duration_since(self.window_start);
            return Err(self.window.saturating_sub(elapsed));
        }

        self.count += 1;
        Ok(())
    }

    /// Acquisitions left in the window as of the last [`try_acquire`] call.
    ///
    /// [`try_acquire`]: FixedWindowLimiter::try_acquire
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.count)
    }
}
