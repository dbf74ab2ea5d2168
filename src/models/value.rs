//! Renderable values.

use indexmap::IndexMap;
use std::fmt::{self, Write};

use super::Decimal;
use crate::{Error, Result};

/// How a missing value is spelled.
const NONE: &str = "None";

/// Magnitude at and above which floats are written in exponent form.
const FLOAT_EXPONENT_UPPER: f64 = 1e16;

/// Magnitude below which non-zero floats are written in exponent form.
const FLOAT_EXPONENT_LOWER: f64 = 1e-4;

/// A real number, either binary floating point or exact decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Real {
    /// An IEEE-754 double.
    Float(f64),
    /// An exact decimal.
    Decimal(Decimal),
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(x) => f.write_str(&float_repr(*x)),
            Self::Decimal(d) => fmt::Display::fmt(d, f),
        }
    }
}

/// An untyped value to be rendered.
///
/// Each variant is one value kind. Rendering dispatches on the variant, so
/// adding a kind means adding a variant and a match arm.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A whole number.
    Integer(i128),
    /// A truth value. Counts as an integer (`1` or `0`) but prints as
    /// `True` or `False`.
    Boolean(bool),
    /// A real number.
    Real(Real),
    /// Free text.
    Text(String),
    /// An ordered sequence (list- or tuple-like).
    Sequence(Vec<Self>),
    /// A mapping with unique keys, kept in insertion order.
    Mapping(IndexMap<String, Self>),
    /// Anything else, already coerced to its string form.
    Other(String),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`Value::Integer`].
    Integer,
    /// See [`Value::Real`].
    Real,
    /// See [`Value::Text`].
    Text,
    /// See [`Value::Sequence`].
    Sequence,
    /// See [`Value::Mapping`].
    Mapping,
    /// See [`Value::Other`].
    Other,
}

impl ValueKind {
    /// Returns the kind name as used in log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) | Self::Boolean(_) => ValueKind::Integer,
            Self::Real(_) => ValueKind::Real,
            Self::Text(_) => ValueKind::Text,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Other(_) => ValueKind::Other,
        }
    }

    /// Returns the integer value of an integer-kind value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Boolean(b) => Some(if *b { 1 } else { 0 }),
            _ => None,
        }
    }

    /// Creates a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a value of the catch-all kind from its string form.
    #[must_use]
    pub fn other(value: impl fmt::Display) -> Self {
        Self::Other(value.to_string())
    }

    /// Parses a decimal literal into an exact real value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the literal is not plain
    /// decimal notation.
    pub fn decimal(literal: &str) -> Result<Self> {
        Ok(Self::Real(Real::Decimal(literal.parse()?)))
    }

    /// Parses a JSON document into a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the text is not valid JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str::<serde_json::Value>(text)
            .map(Self::from)
            .map_err(|e| Error::InvalidInput(format!("invalid JSON input: {e}")))
    }

    /// Creates a sequence from any iterator of convertible items.
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Creates a mapping from key/value pairs.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Writes the quoted representation used for items nested in a
    /// sequence or mapping.
    fn write_repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(&quote(s)),
            Self::Real(Real::Decimal(d)) => write!(f, "Decimal('{d}')"),
            _ => fmt::Display::fmt(self, f),
        }
    }
}

/// String coercion of a value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => f.write_str(if *b { "True" } else { "False" }),
            Self::Real(r) => fmt::Display::fmt(r, f),
            Self::Text(s) | Self::Other(s) => f.write_str(s),
            Self::Sequence(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.write_repr(f)?;
                }
                f.write_char(']')
            },
            Self::Mapping(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: ", quote(key))?;
                    value.write_repr(f)?;
                }
                f.write_char('}')
            },
        }
    }
}

/// Quotes text the way it appears nested inside a collection.
///
/// Single quotes are preferred; double quotes are used when the text
/// contains a single quote but no double quote. Backslashes, the chosen
/// quote and control characters are backslash-escaped.
fn quote(s: &str) -> String {
    let delimiter = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delimiter);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            },
            c if u32::from(c) < 0x20 || ('\u{7f}'..='\u{a0}').contains(&c) => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            },
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

/// Formats a float as the shortest string that round-trips.
///
/// Integral values keep a trailing `.0`, very large and very small
/// magnitudes switch to exponent form with a signed two-digit exponent
/// (`1e+16`, `1.5e-05`), and non-finite values are `nan`, `inf`, `-inf`.
#[must_use]
pub fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(FLOAT_EXPONENT_LOWER..FLOAT_EXPONENT_UPPER).contains(&magnitude) {
        let formatted = format!("{x:e}");
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };
        let (sign, digits) = exponent
            .strip_prefix('-')
            .map_or(("+", exponent), |rest| ("-", rest));
        return format!("{mantissa}e{sign}{digits:0>2}");
    }

    let mut out = x.to_string();
    if !out.contains('.') {
        out.push_str(".0");
    }
    out
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Integer(i128::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Integer(n as i128)
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Self::Integer(n as i128)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Real(Real::Float(x))
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Real(Real::Float(f64::from(x)))
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Self::Real(Real::Decimal(d))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::sequence(items)
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::sequence(items)
    }
}

impl<K: Into<String>, V: Into<Self>> From<IndexMap<K, V>> for Value {
    fn from(entries: IndexMap<K, V>) -> Self {
        Self::mapping(entries)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Converts a JSON document, keeping object keys in document order.
///
/// `null` becomes [`Value::Other`] spelled `None`. Numbers written without
/// a fraction or exponent stay integers as long as they fit in an `i128`.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Other(NONE.to_string()),
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => n.as_str().parse::<i128>().map_or_else(
                |_| Self::Real(Real::Float(n.as_f64().unwrap_or(f64::NAN))),
                Self::Integer,
            ),
            serde_json::Value::String(s) => Self::Text(s),
            serde_json::Value::Array(items) => Self::sequence(items),
            serde_json::Value::Object(entries) => Self::mapping(entries),
        }
    }
}
