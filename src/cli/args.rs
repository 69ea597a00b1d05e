//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

use crate::domain::errors::DomainError;
use crate::domain::model::{EditRequest, OpenTrimDuration, Timestamp};

/// What to do with the input video
#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// The video to edit
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Start time in HH:MM:SS format
    #[arg(long = "trim_start", value_name = "TIME", default_value = Timestamp::ZERO)]
    pub trim_start: String,

    /// End time in HH:MM:SS format
    #[arg(long = "trim_end", value_name = "TIME")]
    pub trim_end: Option<String>,

    /// Re-encode the video with libx265 (CRF 28) instead of stream copying
    #[arg(long)]
    pub compress: bool,

    /// Start time of the fade out in HH:MM:SS format
    #[arg(long = "fo_start", value_name = "TIME", default_value = Timestamp::ZERO)]
    pub fo_start: String,

    /// End time of the fade out in HH:MM:SS format; enables the fade out
    #[arg(long = "fo_end", value_name = "TIME")]
    pub fo_end: Option<String>,

    /// Duration used for a trim start without a trim end (source, remaining)
    #[arg(long, value_name = "MODE", default_value = "source")]
    pub open_trim: String,

    /// Overwrite the output file without asking
    #[arg(long)]
    pub overwrite: bool,
}

impl EditArgs {
    /// Convert into the immutable domain request
    pub fn into_request(self) -> Result<EditRequest, DomainError> {
        let open_trim = OpenTrimDuration::parse(&self.open_trim)?;

        Ok(EditRequest::new(self.input)
            .with_trim_start(Timestamp::new(self.trim_start))
            .with_trim_end(self.trim_end.map(Timestamp::new))
            .with_compress(self.compress)
            .with_fade_start(Timestamp::new(self.fo_start))
            .with_fade_end(self.fo_end.map(Timestamp::new))
            .with_overwrite(self.overwrite)
            .with_open_trim(open_trim))
    }
}

/// Tool locations and logging, merged with the settings file
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Path to the ffmpeg binary
    #[arg(long, value_name = "PATH", env = "COMPRESS_FADE_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// Path to the ffprobe binary
    #[arg(long, value_name = "PATH", env = "COMPRESS_FADE_FFPROBE")]
    pub ffprobe: Option<String>,

    /// Optional TOML settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", env = "COMPRESS_FADE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
