// Ports - Interface definitions (contracts)

use std::path::Path;

use crate::domain::errors::*;

/// Port for media duration lookup
pub trait ProbePort: Send + Sync {
    /// Source duration in seconds, read from container metadata
    fn duration(&self, file_path: &Path) -> Result<f64, DomainError>;
}

/// Port for running the external transcoder
pub trait ExecutePort: Send + Sync {
    /// Program name shown in logs and dry runs
    fn program(&self) -> &str;

    /// Run the transcoder once with the given arguments and wait for it.
    /// A non-zero exit status is returned as [`DomainError::TranscodeFailed`].
    fn execute(&self, args: &[String]) -> Result<(), DomainError>;
}
