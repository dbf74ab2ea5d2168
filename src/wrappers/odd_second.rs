//! Time-of-day gate: calls only go through on odd seconds.

use chrono::{DateTime, Local, Timelike};

/// Source of the current local time.
pub trait Clock {
    /// Returns the current local time.
    fn now(&self) -> DateTime<Local>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// Wraps a callable so that it only runs when the current second is odd.
///
/// On even seconds the call is skipped and `None` is returned.
#[derive(Debug, Clone)]
pub struct OddSecondGate<F, C = SystemClock> {
    inner: F,
    clock: C,
}

impl<F> OddSecondGate<F> {
    /// Wraps `inner` using the system clock.
    pub const fn new(inner: F) -> Self {
        Self {
            inner,
            clock: SystemClock,
        }
    }
}

impl<F, C: Clock> OddSecondGate<F, C> {
    /// Wraps `inner` using the given clock.
    pub const fn with_clock(inner: F, clock: C) -> Self {
        Self { inner, clock }
    }

    /// Calls the wrapped function if the clock reads an odd second.
    pub fn call<A, R>(&self, args: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        let now = self.clock.now();
        let second = now.second();
        if second % 2 == 0 {
            tracing::debug!(time = %now, second, "Even second, call skipped");
            return None;
        }
        tracing::debug!(time = %now, second, "Odd second, calling through");
        Some((self.inner)(args))
    }
}
