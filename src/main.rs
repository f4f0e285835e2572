//! Scholarship chat - a terminal client for the scholarship assistant service
//!
//! Architecture:
//! - Main thread: reads commands from stdin and prints the conversation
//! - Backend thread: runs a Tokio runtime for the HTTP calls
//! - Communication via crossbeam channels (lock-free, sync-safe)

use std::io;

use anyhow::Context;
use tracing::{info, warn};

use scholarship_chat::app::ChatApp;
use scholarship_chat::config::{load_settings, save_settings, settings_path, Settings};
use scholarship_chat::logging::TranscriptLogger;

fn main() -> anyhow::Result<()> {
    // The subscriber depends on these settings, so problems are printed directly
    let settings = load_settings().unwrap_or_else(|e| {
        eprintln!("WARN: {}; using defaults", e);
        Settings::default()
    });

    // Diagnostics go to stderr; stdout carries the chat
    let env_filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match settings.log_level.parse::<tracing_subscriber::EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: log_level '{}' is not a valid tracing filter ({}); \
                     falling back to 'info'",
                    settings.log_level, e
                );
                tracing_subscriber::EnvFilter::new("info")
            }
        },
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %settings.base_url,
        "scholarship-chat starting"
    );

    // First run: leave an editable settings file behind
    if let Some(path) = settings_path() {
        if !path.exists() {
            if let Err(e) = save_settings(&settings) {
                warn!(path = %path.display(), error = %e, "could not write default settings");
            }
        }
    }

    let logger = transcript_logger(&settings)?;

    let stdin = io::stdin();
    let mut app = ChatApp::spawn(settings.base_url.clone(), stdin.lock(), io::stdout());
    if let Some(logger) = logger {
        info!(dir = %logger.dir().display(), "saving transcript");
        app = app.with_logger(logger);
    }

    app.run().context("terminal I/O failed")?;

    if let Some(reason) = &app.state.fatal {
        anyhow::bail!("backend stopped: {}", reason);
    }
    Ok(())
}

fn transcript_logger(settings: &Settings) -> anyhow::Result<Option<TranscriptLogger>> {
    if !settings.save_transcript {
        return Ok(None);
    }
    let logger = match &settings.transcript_dir {
        Some(dir) => TranscriptLogger::with_dir(dir.clone()),
        None => TranscriptLogger::new(),
    }
    .map_err(anyhow::Error::msg)?;
    Ok(Some(logger))
}
