//! Render command handler.

use std::io::Read;
use std::path::PathBuf;

use htmlize::config::HtmlizeConfig;
use htmlize::wrappers::Timed;
use htmlize::{Error, Value, render};

/// Where the render input comes from.
pub enum InputSource {
    /// Given on the command line.
    Inline(String),
    /// Read from a file.
    File(PathBuf),
    /// Read from standard input.
    Stdin,
}

/// Options for the render command.
pub struct RenderOptions {
    /// Treat the input as plain text instead of JSON.
    pub text: bool,
    /// Time the rendering.
    pub timed: bool,
    /// Repetitions when timing; falls back to the configured default.
    pub reps: Option<i64>,
}

/// Render command.
pub fn cmd_render(
    config: &HtmlizeConfig,
    source: InputSource,
    options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(source)?;
    let value = if options.text {
        Value::Text(input)
    } else {
        Value::from_json(&input)?
    };
    tracing::debug!(kind = %value.kind(), "Parsed render input");

    if options.timed || options.reps.is_some() {
        let reps = options.reps.unwrap_or(config.timing_reps);
        let timed = Timed::new(reps, render)?;
        let outcome = timed.call(&value);
        println!("{}", outcome.value);
        eprintln!(
            "Avg Run time: {:.6}s ({} reps)",
            outcome.average.as_secs_f64(),
            outcome.reps
        );
    } else {
        println!("{}", render(&value));
    }

    Ok(())
}

fn read_input(source: InputSource) -> Result<String, Error> {
    match source {
        InputSource::Inline(text) => Ok(text),
        InputSource::File(path) => {
            std::fs::read_to_string(&path).map_err(|e| Error::OperationFailed {
                operation: "read_input_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })
        },
        InputSource::Stdin => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| Error::OperationFailed {
                    operation: "read_stdin".to_string(),
                    cause: e.to_string(),
                })?;
            Ok(buffer)
        },
    }
}
