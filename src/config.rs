use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Default configuration
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Root URL of the scholarship service (`/submit-info` and `/chat` live under it)
    pub base_url: String,
    /// tracing filter used when RUST_LOG is not set
    pub log_level: String,
    /// Append every displayed message to a dated HTML transcript
    pub save_transcript: bool,
    /// Overrides the platform data directory for transcripts
    pub transcript_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            save_transcript: false,
            transcript_dir: None,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("org", "scholarship-chat", "scholarship-chat")?;
    Some(proj.config_dir().join("settings.json"))
}

/// A settings file exists but could not be parsed.
#[derive(Debug, Error)]
#[error("invalid settings file {}: {source}", path.display())]
pub struct InvalidSettings {
    pub path: PathBuf,
    #[source]
    pub source: serde_json::Error,
}

/// Load settings from the platform config dir.
///
/// A missing file yields defaults. An invalid file is reported so the caller
/// can warn before falling back to defaults; this runs before logging is up.
pub fn load_settings() -> Result<Settings, InvalidSettings> {
    match settings_path() {
        Some(path) => Ok(load_settings_from(&path)?.unwrap_or_default()),
        None => Ok(Settings::default()),
    }
}

/// Load settings from an explicit file. Missing keys take their defaults.
/// `Ok(None)` when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Result<Option<Settings>, InvalidSettings> {
    let Ok(content) = fs::read_to_string(path) else {
        return Ok(None);
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| InvalidSettings {
            path: path.to_path_buf(),
            source,
        })
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    match settings_path() {
        Some(path) => save_settings_to(settings, &path),
        None => Ok(()),
    }
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
