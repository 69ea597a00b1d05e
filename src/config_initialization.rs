//! Configuration initialization and hierarchy management

use anyhow::{Context, Result};

use crate::adapters::FileConfig;
use crate::cli::SettingsArgs;

/// Default transcoder binary
pub const DEFAULT_FFMPEG: &str = "ffmpeg";
/// Default probe binary
pub const DEFAULT_FFPROBE: &str = "ffprobe";
/// Default logging level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub ffmpeg: String,
    pub ffprobe: String,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ffmpeg: DEFAULT_FFMPEG.to_string(),
            ffprobe: DEFAULT_FFPROBE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Merge following precedence: CLI > Env > File > Defaults
    ///
    /// clap has already folded environment variables into `args`.
    pub fn merge(args: &SettingsArgs, file: Option<&FileConfig>) -> Self {
        let defaults = Settings::default();
        let file = file.cloned().unwrap_or_default();

        Self {
            ffmpeg: args
                .ffmpeg
                .clone()
                .or(file.tools.ffmpeg)
                .unwrap_or(defaults.ffmpeg),
            ffprobe: args
                .ffprobe
                .clone()
                .or(file.tools.ffprobe)
                .unwrap_or(defaults.ffprobe),
            log_level: args
                .log_level
                .clone()
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
            log_json: args.log_json || file.logging.json.unwrap_or(defaults.log_json),
        }
    }
}

/// Load the settings file named by `--config`, if any, and merge it
pub fn initialize_settings(args: &SettingsArgs) -> Result<Settings> {
    let file = match &args.config {
        Some(path) => Some(
            FileConfig::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        ),
        None => None,
    };

    Ok(Settings::merge(args, file.as_ref()))
}
