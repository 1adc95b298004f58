//! Night Lights Client - Main Entry Point
//!
//! Desktop client for browsing night-light imagery overlays and point analyses.
//! Pass `--console` for the line-oriented front end.

use anyhow::Context;

use night_lights::app::console::run_console;
use night_lights::app::gui::run_gui;
use night_lights::utils::config_store::load_config;
use night_lights::utils::logging::{init_tracing, with_bootstrap_logging};

fn main() -> anyhow::Result<()> {
    let config = with_bootstrap_logging(load_config).context("Failed to load configuration")?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = init_tracing(config.log_dir.as_deref()).context("Failed to initialize logging")?;

    tracing::info!("Starting Night Lights client against {}", config.base_url());

    if std::env::args().skip(1).any(|arg| arg == "--console") {
        run_console(config)?;
    } else {
        run_gui(config);
    }
    Ok(())
}
