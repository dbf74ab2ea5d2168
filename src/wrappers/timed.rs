//! Averaged timing over repeated calls.

use crate::{Error, Result};
use std::time::{Duration, Instant};

/// Result of a timed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedOutcome<R> {
    /// The value returned by the last repetition.
    pub value: R,
    /// Number of repetitions run.
    pub reps: u32,
    /// Total time across all repetitions.
    pub total: Duration,
    /// Mean time per repetition.
    pub average: Duration,
}

/// Wraps a callable and times it over a fixed number of repetitions.
///
/// # Example
///
/// ```rust
/// use htmlize::wrappers::Timed;
///
/// let timed = Timed::new(3, |n: u64| n + 1).unwrap();
/// let outcome = timed.call(41);
/// assert_eq!(outcome.value, 42);
/// assert_eq!(outcome.reps, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Timed<F> {
    reps: u32,
    inner: F,
}

impl<F> Timed<F> {
    /// Wraps `inner`, to be run `reps` times per call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `reps` is less than one or does not
    /// fit in a `u32`.
    pub fn new(reps: i64, inner: F) -> Result<Self> {
        if reps < 1 {
            return Err(Error::InvalidInput(format!(
                "repetitions must be at least 1 (got {reps})"
            )));
        }
        let reps = u32::try_from(reps)
            .map_err(|_| Error::InvalidInput(format!("too many repetitions: {reps}")))?;

        Ok(Self { reps, inner })
    }

    /// Returns the number of repetitions per call.
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }

    /// Runs the wrapped function `reps` times and reports the mean run time.
    ///
    /// The arguments are cloned for every repetition but the last.
    pub fn call<A, R>(&self, args: A) -> TimedOutcome<R>
    where
        F: Fn(A) -> R,
        A: Clone,
    {
        let mut total = Duration::ZERO;
        for _ in 1..self.reps {
            let start = Instant::now();
            let _ = (self.inner)(args.clone());
            total += start.elapsed();
        }
        let start = Instant::now();
        let value = (self.inner)(args);
        total += start.elapsed();

        let average = total / self.reps;
        tracing::info!(
            reps = self.reps,
            "Avg Run time: {:.6}s ({} reps)",
            average.as_secs_f64(),
            self.reps
        );

        TimedOutcome {
            value,
            reps: self.reps,
            total,
            average,
        }
    }
}
