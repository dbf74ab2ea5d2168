//! HTML rendering engine.
//!
//! Renders a [`Value`](crate::Value) as an HTML fragment, choosing the rule
//! by the value's kind.

mod html_renderer;

pub use html_renderer::{HtmlRenderer, REAL_PLACES, escape_html, format_real, render};
