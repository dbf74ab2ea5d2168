//! Password store and authentication wrapper.
//!
//! [`PasswordStore`] asks its source for a password once and keeps it for
//! the rest of its life. [`Authenticator`] wraps a callable and only lets
//! calls through when the stored password matches the expected one.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use htmlize::wrappers::{Authenticator, PasswordStore};
//! use secrecy::SecretString;
//!
//! let store = Arc::new(PasswordStore::new(|| Ok(SecretString::from("hunter2"))));
//! let greet = Authenticator::new(
//!     Arc::clone(&store),
//!     SecretString::from("hunter2"),
//!     |name: &str| format!("hello {name}"),
//! );
//! assert_eq!(greet.call("ada").unwrap(), "hello ada");
//! ```

use crate::{Error, Result};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A set-once password cell.
///
/// The source is asked on first access. Once it yields a non-empty
/// password that password is returned forever and the source is never
/// asked again.
pub struct PasswordStore<S> {
    source: S,
    password: OnceLock<SecretString>,
}

impl<S> PasswordStore<S>
where
    S: Fn() -> Result<SecretString>,
{
    /// Creates an empty store backed by `source`.
    pub const fn new(source: S) -> Self {
        Self {
            source,
            password: OnceLock::new(),
        }
    }

    /// Returns the stored password, asking the source if none is stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthorized`] if the source fails or yields an
    /// empty password. Nothing is stored in that case.
    pub fn password(&self) -> Result<&SecretString> {
        if let Some(password) = self.password.get() {
            return Ok(password);
        }

        let candidate = (self.source)()
            .map_err(|e| Error::Unauthorized(format!("password source failed: {e}")))?;
        if candidate.expose_secret().is_empty() {
            return Err(Error::Unauthorized("no password was provided".to_string()));
        }

        tracing::debug!("Password stored");
        Ok(self.password.get_or_init(|| candidate))
    }

    /// Returns true once a password has been stored.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.password.get().is_some()
    }
}

impl<S> fmt::Debug for PasswordStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordStore")
            .field("password", &self.password.get().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

/// Wraps a callable behind a password check.
pub struct Authenticator<S, F> {
    store: Arc<PasswordStore<S>>,
    expected: SecretString,
    inner: F,
}

impl<S, F> Authenticator<S, F>
where
    S: Fn() -> Result<SecretString>,
{
    /// Wraps `inner`; calls go through only while `store` holds `expected`.
    pub const fn new(store: Arc<PasswordStore<S>>, expected: SecretString, inner: F) -> Self {
        Self {
            store,
            expected,
            inner,
        }
    }

    /// Calls the wrapped function if the stored password matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unauthorized`] if the password does not match or
    /// cannot be obtained.
    pub fn call<A, R>(&self, args: A) -> Result<R>
    where
        F: Fn(A) -> R,
    {
        let stored = self.store.password()?;
        if constant_time_eq(
            stored.expose_secret().as_bytes(),
            self.expected.expose_secret().as_bytes(),
        ) {
            tracing::debug!("Authentication succeeded");
            Ok((self.inner)(args))
        } else {
            tracing::warn!("Authentication failed");
            Err(Error::Unauthorized("wrong password".to_string()))
        }
    }
}

impl<S, F> fmt::Debug for Authenticator<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("store", &self.store)
            .field("expected", &self.expected)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
