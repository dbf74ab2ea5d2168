//! Call wrappers.
//!
//! Each wrapper owns a callable and adds behaviour around every call:
//! - [`Logged`]: logs name, start time, elapsed time and whether the result was truthy
//! - [`Timed`]: runs the callable several times and reports the mean run time
//! - [`OddSecondGate`]: only calls through when the current second is odd
//! - [`PasswordStore`] and [`Authenticator`]: set-once password and a password check
//! - [`PrivilegeGate`]: limits the keyword arguments that reach the callable
//!
//! Multi-argument callables take a tuple.

mod auth;
mod logged;
mod odd_second;
mod privilege;
mod timed;

pub use auth::{Authenticator, PasswordStore};
pub use logged::{Logged, Truthy};
pub use odd_second::{Clock, FixedClock, OddSecondGate, SystemClock};
pub use privilege::{KeywordArgs, Privilege, PrivilegeGate};
pub use timed::{TimedOutcome, Timed};
