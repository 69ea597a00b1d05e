//! CLI module for compress-fade
//!
//! This module handles command-line argument parsing and command execution.

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::{EditArgs, SettingsArgs};

/// Compress video and/or add fade and/or cut.
///
/// Builds a single ffmpeg invocation from the flags and runs it. The output
/// is written next to the input as `<name>_out[_trim][_compr][_fade].<ext>`.
#[derive(Parser, Debug)]
#[command(name = "compress-fade")]
#[command(about = "Compress video and/or add fade and/or cut.")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub edit: EditArgs,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Print the planned ffmpeg command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the plan as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["compress-fade", "in.mp4"]).unwrap();
        assert_eq!(cli.edit.input.to_str(), Some("in.mp4"));
        assert_eq!(cli.edit.trim_start, "00:00:00");
        assert_eq!(cli.edit.trim_end, None);
        assert!(!cli.edit.compress);
        assert_eq!(cli.edit.fo_start, "00:00:00");
        assert_eq!(cli.edit.fo_end, None);
        assert_eq!(cli.edit.open_trim, "source");
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_underscore_flags() {
        let cli = Cli::try_parse_from([
            "compress-fade",
            "--fo_end",
            "00:00:15",
            "in.mp4",
            "--trim_start",
            "00:00:05",
            "--compress",
            "--trim_end",
            "00:01:00",
            "--fo_start",
            "00:00:10",
        ])
        .unwrap();
        assert_eq!(cli.edit.trim_start, "00:00:05");
        assert_eq!(cli.edit.trim_end.as_deref(), Some("00:01:00"));
        assert!(cli.edit.compress);
        assert_eq!(cli.edit.fo_start, "00:00:10");
        assert_eq!(cli.edit.fo_end.as_deref(), Some("00:00:15"));
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["compress-fade"]).is_err());
    }

    #[test]
    fn test_json_requires_dry_run() {
        assert!(Cli::try_parse_from(["compress-fade", "in.mp4", "--json"]).is_err());
        assert!(Cli::try_parse_from(["compress-fade", "in.mp4", "--dry-run", "--json"]).is_ok());
    }

    #[test]
    fn test_into_request_rejects_unknown_open_trim() {
        let cli =
            Cli::try_parse_from(["compress-fade", "in.mp4", "--open-trim", "exact"]).unwrap();
        assert!(cli.edit.into_request().is_err());
    }
}
