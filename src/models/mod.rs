//! Data models for htmlize.
//!
//! The value model that rendering dispatches on, and the exact decimal type
//! it uses for arbitrary-precision reals.

mod decimal;
mod value;

pub use decimal::Decimal;
pub use value::{Real, Value, ValueKind, float_repr};
