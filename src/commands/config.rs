//! Config command handler.

use htmlize::config::HtmlizeConfig;
use htmlize::observability::LoggingConfig;

/// Config command.
pub fn cmd_config(config: &HtmlizeConfig, show: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !show {
        println!("Use --show to display the current configuration");
        return Ok(());
    }

    let logging = LoggingConfig::from_settings(Some(&config.logging), false);

    println!("Current Configuration");
    println!("=====================");
    println!();
    println!("Logging:");
    println!("  Format: {:?}", logging.format);
    println!("  Filter: {}", logging.filter);
    match &logging.file {
        Some(path) => println!("  File: {}", path.display()),
        None => println!("  File: (stderr)"),
    }
    println!();
    println!("Timing:");
    println!("  Default reps: {}", config.timing_reps);

    Ok(())
}
