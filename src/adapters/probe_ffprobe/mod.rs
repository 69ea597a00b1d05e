//! FFprobe adapter for media file probing
//!
//! Reads the container duration only; nothing is decoded.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::domain::errors::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: String,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter running `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments that print the bare container duration
    fn duration_args(file_path: &Path) -> Vec<String> {
        vec![
            "-v".to_string(),
            "error".to_string(),
            "-show_entries".to_string(),
            "format=duration".to_string(),
            "-of".to_string(),
            "default=noprint_wrappers=1:nokey=1".to_string(),
            file_path.to_string_lossy().into_owned(),
        ]
    }
}

/// Parse the probe's stdout as seconds
pub fn parse_duration_output(output: &str) -> Result<f64, DomainError> {
    let trimmed = output.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| DomainError::ProbeParse {
            output: trimmed.to_string(),
        })
}

impl ProbePort for FFprobeAdapter {
    fn duration(&self, file_path: &Path) -> Result<f64, DomainError> {
        debug!("Probing duration of {}", file_path.display());

        let output = Command::new(&self.program)
            .args(Self::duration_args(file_path))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| DomainError::ProcessSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            warn!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let duration = parse_duration_output(&String::from_utf8_lossy(&output.stdout))?;
        debug!("Source duration: {}s", duration);
        Ok(duration)
    }
}
