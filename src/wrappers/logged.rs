//! Call logging.

use chrono::Local;
use std::time::Instant;

/// Whether a value counts as "something" when reported in call logs.
///
/// Empty, zero, `false`, `None` and `Err` values are falsy.
pub trait Truthy {
    /// Returns true if the value is non-empty / non-zero.
    fn is_truthy(&self) -> bool;
}

impl Truthy for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_number {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy, E> Truthy for Result<T, E> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_ok_and(Truthy::is_truthy)
    }
}

impl Truthy for crate::Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(_) | Self::Boolean(_) => self.as_integer() != Some(0),
            Self::Real(crate::Real::Float(x)) => *x != 0.0,
            Self::Real(crate::Real::Decimal(d)) => d.coefficient() != 0,
            Self::Text(s) | Self::Other(s) => !s.is_empty(),
            Self::Sequence(items) => !items.is_empty(),
            Self::Mapping(entries) => !entries.is_empty(),
        }
    }
}

/// Wraps a callable and logs every call.
///
/// Each call emits an `info` event with the function name, start time,
/// elapsed time and whether the result was truthy, and a `debug` event with
/// the function description.
///
/// # Example
///
/// ```rust
/// use htmlize::wrappers::Logged;
///
/// let double = Logged::new("double", "Doubles its input.", |n: i32| n * 2);
/// assert_eq!(double.call(21), 42);
/// ```
#[derive(Debug, Clone)]
pub struct Logged<F> {
    name: String,
    description: String,
    inner: F,
}

impl<F> Logged<F> {
    /// Wraps `inner` under the given name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>, inner: F) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            inner,
        }
    }

    /// Returns the wrapped function's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the wrapped function's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Calls the wrapped function and logs the call.
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
        R: Truthy,
    {
        let started_at = Local::now();
        let timer = Instant::now();
        let result = (self.inner)(args);
        let elapsed = timer.elapsed();

        tracing::info!(
            function = %self.name,
            started_at = %started_at.to_rfc3339(),
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            returned_something = result.is_truthy(),
            "Called {}",
            self.name
        );
        tracing::debug!(
            function = %self.name,
            description = %self.description,
            "Function description"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use std::cell::Cell;

    #[test]
    fn test_logged_passes_result_through() {
        let wrapped = Logged::new("add", "Adds two numbers.", |(a, b): (i32, i32)| a + b);
        assert_eq!(wrapped.call((2, 3)), 5);
        assert_eq!(wrapped.name(), "add");
        assert_eq!(wrapped.description(), "Adds two numbers.");
    }

    #[test]
    fn test_logged_calls_once() {
        let calls = Cell::new(0);
        let wrapped = Logged::new("count", "", |()| calls.set(calls.get() + 1));
        wrapped.call(());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_truthy() {
        assert!(!().is_truthy());
        assert!(1i32.is_truthy());
        assert!(!0u8.is_truthy());
        assert!(!0.0f64.is_truthy());
        assert!("x".is_truthy());
        assert!(!String::new().is_truthy());
        assert!(!Vec::<i32>::new().is_truthy());
        assert!(Some(true).is_truthy());
        assert!(!Some(false).is_truthy());
        assert!(!None::<bool>.is_truthy());
        assert!(!Err::<bool, ()>(()).is_truthy());
    }

    #[test]
    fn test_value_truthy() {
        assert!(Value::from(3).is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::decimal("0.00").unwrap().is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from(vec![0]).is_truthy());
        assert!(!Value::mapping(Vec::<(String, Value)>::new()).is_truthy());
    }
}
