//! compress-fade library
//!
//! Plans a single ffmpeg invocation that trims, compresses and/or fades out
//! a video, probing the source duration with ffprobe when needed.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{ArgGroup, EditPlan, EditRequest, OpenTrimDuration, Timestamp};
pub use planner::CommandPlanner;
