//! One Small Step
//!
//! Renders the landing site once, writes it to a PNG and optionally prints a
//! text preview.

use std::process::ExitCode;
use std::time::Instant;

use zxfx::config::AppConfig;
use zxfx::export::{save_png, ExportError};
use zxfx::render_frame;

fn run(config: &AppConfig) -> Result<(), ExportError> {
    let start = Instant::now();
    let (surface, stats) = render_frame(config);
    log::info!(
        "Rendered {} chunks in {:.2?} (seed {})",
        stats.chunks,
        start.elapsed(),
        config.output.seed
    );

    save_png(&surface, &config.output.path, &config.display.export_options())?;

    if config.output.ascii_preview {
        print!("{}", surface.to_ascii(config.output.ascii_scale));
    }
    Ok(())
}

fn main() -> ExitCode {
    // Load configuration before the logger so its level can seed the filter
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
