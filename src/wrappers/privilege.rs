//! Privilege levels limiting keyword arguments.
//!
//! | Level | Keyword arguments passed through |
//! |-------|----------------------------------|
//! | `High` | 3 |
//! | `Mid` | 2 |
//! | `Low` | 1 |
//! | `No` | 0 |

use crate::{Error, Result, Value};
use indexmap::IndexMap;
use std::fmt;

/// Named arguments, in the order they were given.
pub type KeywordArgs = IndexMap<String, Value>;

/// Privilege level of a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Privilege {
    /// Three keyword arguments.
    High,
    /// Two keyword arguments.
    Mid,
    /// One keyword argument.
    Low,
    /// Positional argument only.
    #[default]
    No,
}

impl Privilege {
    /// Returns all levels, highest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::High, Self::Mid, Self::Low, Self::No]
    }

    /// Parses a level name. Unknown or empty names mean [`Privilege::No`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Self::High,
            "mid" => Self::Mid,
            "low" => Self::Low,
            _ => Self::No,
        }
    }

    /// Returns the level name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
            Self::No => "no",
        }
    }

    /// Number of keyword arguments this level passes through.
    #[must_use]
    pub const fn keyword_args(&self) -> usize {
        match self {
            Self::High => 3,
            Self::Mid => 2,
            Self::Low => 1,
            Self::No => 0,
        }
    }
}

impl fmt::Display for Privilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wraps a callable taking a base argument and keyword arguments.
///
/// Each call must supply at least as many keyword arguments as the level
/// grants; only the first that many reach the wrapped function.
#[derive(Debug, Clone)]
pub struct PrivilegeGate<F> {
    level: Privilege,
    inner: F,
}

impl<F> PrivilegeGate<F> {
    /// Wraps `inner` at the given privilege level.
    pub const fn new(level: Privilege, inner: F) -> Self {
        Self { level, inner }
    }

    /// Returns the privilege level.
    #[must_use]
    pub const fn level(&self) -> Privilege {
        self.level
    }

    /// Calls the wrapped function with the granted keyword arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if fewer keyword arguments are given
    /// than the level grants.
    pub fn call<B, R>(&self, base: B, mut kwargs: KeywordArgs) -> Result<R>
    where
        F: Fn(B, KeywordArgs) -> R,
    {
        let granted = self.level.keyword_args();
        if kwargs.len() < granted {
            tracing::warn!(
                privilege = self.level.as_str(),
                required = granted,
                given = kwargs.len(),
                "Too few keyword arguments"
            );
            return Err(Error::InvalidInput(format!(
                "invalid number of keyword arguments: '{}' privilege needs {granted}, got {}",
                self.level,
                kwargs.len()
            )));
        }

        kwargs.truncate(granted);
        Ok((self.inner)(base, kwargs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kwargs(n: usize) -> KeywordArgs {
        ["a", "b", "c", "d"]
            .iter()
            .take(n)
            .enumerate()
            .map(|(i, k)| ((*k).to_string(), Value::from(i)))
            .collect()
    }

    fn keys(args: &KeywordArgs) -> Vec<String> {
        args.keys().cloned().collect()
    }

    #[test]
    fn test_parse() {
        assert_eq!(Privilege::parse("high"), Privilege::High);
        assert_eq!(Privilege::parse(" MID "), Privilege::Mid);
        assert_eq!(Privilege::parse("low"), Privilege::Low);
        assert_eq!(Privilege::parse("no"), Privilege::No);
        assert_eq!(Privilege::parse(""), Privilege::No);
        assert_eq!(Privilege::parse("root"), Privilege::No);
    }

    #[test]
    fn test_as_str_roundtrips() {
        for level in Privilege::all() {
            assert_eq!(Privilege::parse(level.as_str()), *level);
        }
    }

    #[test]
    fn test_high_passes_first_three() {
        let gate = PrivilegeGate::new(Privilege::High, |_: i32, args: KeywordArgs| keys(&args));
        assert_eq!(gate.call(1, kwargs(4)).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_low_passes_first_one() {
        let gate = PrivilegeGate::new(Privilege::Low, |_: i32, args: KeywordArgs| keys(&args));
        assert_eq!(gate.call(1, kwargs(3)).unwrap(), vec!["a"]);
    }

    #[test]
    fn test_no_privilege_passes_base_only() {
        let gate = PrivilegeGate::new(Privilege::No, |base: i32, args: KeywordArgs| {
            (base, args.len())
        });
        assert_eq!(gate.call(9, kwargs(2)).unwrap(), (9, 0));
        assert_eq!(gate.call(9, KeywordArgs::new()).unwrap(), (9, 0));
    }

    #[test]
    fn test_too_few_keyword_arguments() {
        let gate = PrivilegeGate::new(Privilege::Mid, |_: i32, _: KeywordArgs| ());
        let err = gate.call(1, kwargs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(err.to_string().contains("needs 2, got 1"));
    }
}
