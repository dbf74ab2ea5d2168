//! Command handlers module.
//!
//! - `render.rs`: render JSON or plain text input as HTML
//! - `config.rs`: configuration display command

mod config;
mod render;

pub use config::cmd_config;
pub use render::{InputSource, RenderOptions, cmd_render};
