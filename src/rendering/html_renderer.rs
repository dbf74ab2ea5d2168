//! HTML renderer implementation.
//!
//! Dispatch, most specific kind first:
//! - integers: `106(<i>0x6a</i>)`, booleans as `True(<i>0x1</i>)`
//! - reals (float or decimal): rounded to [`REAL_PLACES`], `(<i>1.12</i>)`
//! - sequences: `<ul>` with one recursively rendered `<li>` per item
//! - mappings: `<ul>` with one `<li>key=value</li>` per entry, values verbatim
//! - text and everything else: HTML-escaped, newlines become `<br/>\n`

use crate::models::{Real, Value, float_repr};

/// Number of decimal places reals are rounded to.
pub const REAL_PLACES: u32 = 2;

/// Renders values as HTML fragments.
///
/// Stateless; rendering never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders a value as an HTML fragment.
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        tracing::trace!(kind = %value.kind(), "Rendering value");
        render_value(value)
    }
}

/// Renders a value as an HTML fragment.
///
/// # Example
///
/// ```rust
/// use htmlize::{Value, render};
///
/// assert_eq!(render(&Value::from(106)), "106(<i>0x6a</i>)");
/// assert_eq!(render(&Value::from("245 < 255")), "245 &lt; 255");
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    HtmlRenderer::new().render(value)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Integer(n) => format!("{n}(<i>{}</i>)", hex(*n)),
        Value::Boolean(b) => format!("{value}(<i>{}</i>)", hex(i128::from(*b))),
        Value::Real(real) => format!("(<i>{}</i>)", format_real(real)),
        Value::Sequence(items) => unordered_list(items.iter().map(render_value)),
        // Mapping values are coerced to strings, not rendered.
        Value::Mapping(entries) => {
            unordered_list(entries.iter().map(|(key, value)| format!("{key}={value}")))
        },
        Value::Text(text) | Value::Other(text) => render_text(text),
    }
}

/// Lowercase hex with a `0x` prefix; the sign goes in front of the prefix.
fn hex(n: i128) -> String {
    if n < 0 {
        format!("-{:#x}", n.unsigned_abs())
    } else {
        format!("{n:#x}")
    }
}

/// Rounds a real to [`REAL_PLACES`] and formats it.
///
/// Decimals are quantized (half to even) and always show two places.
/// Floats are rounded on their exact binary value and printed in shortest
/// round-trip form, so `2.0` stays `2.0` and `2.675` becomes `2.67`.
#[must_use]
pub fn format_real(real: &Real) -> String {
    match real {
        Real::Float(x) if x.is_finite() => {
            let rounded = format!("{x:.prec$}", prec = REAL_PLACES as usize);
            float_repr(rounded.parse().unwrap_or(*x))
        },
        Real::Float(x) => float_repr(*x),
        Real::Decimal(d) => d.round_dp(REAL_PLACES).to_string(),
    }
}

fn render_text(text: &str) -> String {
    escape_html(text).replace('\n', "<br/>\n")
}

fn unordered_list(items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.map(|item| format!("<li>{item}</li>")).collect();
    format!("<ul>\n{}\n</ul>", items.join("\n"))
}

/// Escapes HTML special characters, including both quote characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Decimal;

    #[test]
    fn test_render_integer() {
        assert_eq!(render(&Value::from(106)), "106(<i>0x6a</i>)");
        assert_eq!(render(&Value::from(0)), "0(<i>0x0</i>)");
        assert_eq!(render(&Value::from(255u8)), "255(<i>0xff</i>)");
        assert_eq!(render(&Value::from(-106)), "-106(<i>-0x6a</i>)");
    }

    #[test]
    fn test_render_integer_extremes() {
        assert_eq!(
            render(&Value::from(i128::MIN)),
            format!("{}(<i>-0x80000000000000000000000000000000</i>)", i128::MIN)
        );
        assert_eq!(
            render(&Value::from(u64::MAX)),
            "18446744073709551615(<i>0xffffffffffffffff</i>)"
        );
    }

    #[test]
    fn test_render_boolean_as_integer() {
        assert_eq!(render(&Value::from(true)), "True(<i>0x1</i>)");
        assert_eq!(render(&Value::from(false)), "False(<i>0x0</i>)");
        assert_eq!(
            render(&Value::mapping([("flag", true)])),
            "<ul>\n<li>flag=True</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_float() {
        assert_eq!(render(&Value::from(1.123_211_2)), "(<i>1.12</i>)");
        assert_eq!(render(&Value::from(2.0)), "(<i>2.0</i>)");
        assert_eq!(render(&Value::from(3.456)), "(<i>3.46</i>)");
        assert_eq!(render(&Value::from(-0.001)), "(<i>-0.0</i>)");
        assert_eq!(render(&Value::from(2.675)), "(<i>2.67</i>)");
    }

    #[test]
    fn test_render_float_non_finite() {
        assert_eq!(render(&Value::from(f64::NAN)), "(<i>nan</i>)");
        assert_eq!(render(&Value::from(f64::INFINITY)), "(<i>inf</i>)");
        assert_eq!(render(&Value::from(1e20)), "(<i>1e+20</i>)");
    }

    #[test]
    fn test_render_decimal() {
        let value = Value::decimal("1.125").unwrap();
        assert_eq!(render(&value), "(<i>1.12</i>)");

        let value = Value::from(Decimal::from_parts(false, 2, 0));
        assert_eq!(render(&value), "(<i>2.00</i>)");

        let value = Value::decimal("2.675").unwrap();
        assert_eq!(render(&value), "(<i>2.68</i>)");
    }

    #[test]
    fn test_render_sequence() {
        let value = Value::from(vec![1, 2, 3, 4]);
        assert_eq!(
            render(&value),
            "<ul>\n<li>1(<i>0x1</i>)</li>\n<li>2(<i>0x2</i>)</li>\n<li>3(<i>0x3</i>)</li>\n<li>4(<i>0x4</i>)</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_mixed_sequence() {
        let value = Value::sequence(vec![Value::from(1.5), Value::from("a<b")]);
        assert_eq!(
            render(&value),
            "<ul>\n<li>(<i>1.5</i>)</li>\n<li>a&lt;b</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_nested_sequence() {
        let value = Value::sequence(vec![Value::from(1), Value::from([2, 3])]);
        assert_eq!(
            render(&value),
            "<ul>\n<li>1(<i>0x1</i>)</li>\n<li><ul>\n<li>2(<i>0x2</i>)</li>\n<li>3(<i>0x3</i>)</li>\n</ul></li>\n</ul>"
        );
    }

    #[test]
    fn test_render_empty_sequence() {
        assert_eq!(render(&Value::Sequence(Vec::new())), "<ul>\n\n</ul>");
    }

    #[test]
    fn test_render_mapping() {
        let value = Value::mapping([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(
            render(&value),
            "<ul>\n<li>a=1</li>\n<li>b=2</li>\n<li>c=3</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_mapping_values_are_verbatim() {
        let value = Value::mapping([
            ("list", Value::from(vec![1, 2])),
            ("text", Value::from("x < y")),
            ("real", Value::from(1.23456)),
        ]);
        assert_eq!(
            render(&value),
            "<ul>\n<li>list=[1, 2]</li>\n<li>text=x < y</li>\n<li>real=1.23456</li>\n</ul>"
        );
    }

    #[test]
    fn test_render_mapping_nested_text_is_escaped_repr() {
        let value = Value::mapping([("k", Value::from(vec!["a\nb"]))]);
        assert_eq!(render(&value), "<ul>\n<li>k=['a\\nb']</li>\n</ul>");
    }

    #[test]
    fn test_render_text() {
        assert_eq!(render(&Value::from("245 < 255")), "245 &lt; 255");
        assert_eq!(
            render(&Value::from("Any random text\n")),
            "Any random text<br/>\n"
        );
        assert_eq!(render(&Value::from("")), "");
    }

    #[test]
    fn test_render_text_is_not_idempotent() {
        let once = render(&Value::from("a & b"));
        assert_eq!(once, "a &amp; b");
        let twice = render(&Value::from(once));
        assert_eq!(twice, "a &amp;amp; b");
    }

    #[test]
    fn test_render_other_uses_text_rule() {
        assert_eq!(render(&Value::other("<none>")), "&lt;none&gt;");
        assert_eq!(render(&Value::other("line\nbreak")), "line<br/>\nbreak");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b"), "a &lt; b");
        assert_eq!(escape_html("a > b"), "a &gt; b");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"q\""), "&quot;q&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_renderer_is_reusable() {
        let renderer = HtmlRenderer::new();
        assert_eq!(renderer.render(&Value::from(1)), "1(<i>0x1</i>)");
        assert_eq!(renderer.render(&Value::from(1)), render(&Value::from(1)));
    }
}
