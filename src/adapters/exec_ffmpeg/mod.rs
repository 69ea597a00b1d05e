//! FFmpeg execution adapter
//!
//! Spawns the transcoder with the terminal's stdio and waits for it.

use std::process::Command;

use tracing::{error, info};

use crate::domain::errors::*;
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    program: String,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter running `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ExecutePort for FFmpegAdapter {
    fn program(&self) -> &str {
        &self.program
    }

    fn execute(&self, args: &[String]) -> Result<(), DomainError> {
        info!("Running {} with {} arguments", self.program, args.len());

        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|source| DomainError::ProcessSpawn {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            error!("{} failed: {}", self.program, status);
            Err(DomainError::TranscodeFailed {
                code: status.code(),
            })
        }
    }
}
