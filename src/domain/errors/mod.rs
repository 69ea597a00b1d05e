// Domain errors - Error types for the domain layer

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug)]
pub enum DomainError {
    /// Time literal is not in `H:M:S` integer form
    #[error("Invalid time format: {time}. Expected HH:MM:SS")]
    InvalidTimestamp { time: String },

    /// Fade-out window ends before it starts
    #[error("Invalid fade-out window: end ({end}) is before start ({start})")]
    InvalidFadeWindow { start: String, end: String },

    /// Probe output could not be read as a duration
    #[error("Failed to parse probe output {output:?} as a duration")]
    ProbeParse { output: String },

    /// External tool could not be started
    #[error("Failed to run {program}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Transcoder exited unsuccessfully
    #[error("Transcoder exited with status {}", describe_exit(.code))]
    TranscodeFailed { code: Option<i32> },

    /// Settings file could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "unknown (terminated by signal)".to_string(),
    }
}

impl DomainError {
    /// Exit code the binary should terminate with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DomainError::TranscodeFailed { code: Some(code) } => *code,
            _ => 1,
        }
    }
}
