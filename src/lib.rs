//! # htmlize
//!
//! Kind-dispatched HTML rendering of values, plus call wrappers.
//!
//! A [`Value`] is rendered by [`render`] with a rule chosen by its kind:
//! integers show their hex form, reals are rounded to two places, sequences
//! and mappings become unordered lists, and everything else is escaped
//! text with `<br/>` line breaks.
//!
//! The [`wrappers`] module holds owned call wrappers: call logging,
//! averaged timing, an odd-second gate, a set-once password store with an
//! authenticator, and a privilege gate that limits keyword arguments.
//!
//! ## Example
//!
//! ```rust
//! use htmlize::{Value, render};
//!
//! let html = render(&Value::from(vec![1, 2]));
//! assert_eq!(html, "<ul>\n<li>1(<i>0x1</i>)</li>\n<li>2(<i>0x2</i>)</li>\n</ul>");
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod models;
pub mod observability;
pub mod rendering;
pub mod wrappers;

// Re-exports for convenience
pub use config::HtmlizeConfig;
pub use models::{Decimal, Real, Value, ValueKind};
pub use rendering::{HtmlRenderer, escape_html, render};

/// Error type for htmlize operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed decimal or JSON, non-positive repetition count, too few keyword arguments |
/// | `OperationFailed` | Config file I/O or parse errors, logging initialization fails |
/// | `Unauthorized` | Stored password does not match, or no password could be obtained |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A decimal literal is not plain decimal notation
    /// - JSON input cannot be parsed
    /// - A timing wrapper is built with fewer than one repetition
    /// - A privilege gate receives fewer keyword arguments than its level grants
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - A configuration file cannot be read or parsed
    /// - Input files cannot be read
    /// - The tracing subscriber cannot be installed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// Authentication failed.
    ///
    /// Raised when:
    /// - The stored password differs from the expected one
    /// - The password source fails or yields an empty password
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

/// Result type alias for htmlize operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "test".to_string(),
            cause: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'test' failed: failed");

        let err = Error::Unauthorized("wrong password".to_string());
        assert_eq!(err.to_string(), "unauthorized: wrong password");
    }
}
