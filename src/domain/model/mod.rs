// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::errors::DomainError;


/// Video codec selected when compressing
pub const COMPRESS_VIDEO_CODEC: &str = "libx265";

/// Constant rate factor used with [`COMPRESS_VIDEO_CODEC`]
pub const COMPRESS_CRF: u8 = 28;

/// Time literal as typed by the user, e.g. `00:01:30`
///
/// The literal is handed to the transcoder verbatim. Only fade windows and
/// the remaining-duration trim mode need it as a number of seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timestamp {
    literal: String,
}

impl Timestamp {
    /// Literal used when no time is given
    pub const ZERO: &'static str = "00:00:00";

    /// Wrap a time literal
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// The `00:00:00` timestamp
    pub fn zero() -> Self {
        Self::new(Self::ZERO)
    }

    /// Literal as typed
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// True when the literal is exactly the default `00:00:00`
    pub fn is_default(&self) -> bool {
        self.literal == Self::ZERO
    }

    /// Whole seconds of an `H:M:S` literal (`H*3600 + M*60 + S`)
    ///
    /// Fractional seconds are rejected; minutes and seconds are not range
    /// checked, so `00:90:00` is 5400 seconds.
    pub fn to_seconds(&self) -> Result<f64, DomainError> {
        let invalid = || DomainError::InvalidTimestamp {
            time: self.literal.clone(),
        };

        let parts: Vec<&str> = self.literal.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut total: u64 = 0;
        for (part, scale) in parts.iter().zip([3600u64, 60, 1]) {
            let value: u64 = part.parse().map_err(|_| invalid())?;
            total = value
                .checked_mul(scale)
                .and_then(|v| total.checked_add(v))
                .ok_or_else(invalid)?;
        }

        Ok(total as f64)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// How the duration of an open-ended trim (start without end) is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenTrimDuration {
    /// Pass the full probed source duration, ignoring the trim start.
    /// Kept for compatibility with existing output files.
    #[default]
    SourceDuration,
    /// Pass the source duration minus the trim start
    Remaining,
}

impl OpenTrimDuration {
    /// Parse from a command-line/config string
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        match value.to_lowercase().as_str() {
            "source" | "source_duration" => Ok(OpenTrimDuration::SourceDuration),
            "remaining" => Ok(OpenTrimDuration::Remaining),
            _ => Err(DomainError::Config(format!(
                "Invalid open trim mode: {}. Valid modes: source, remaining",
                value
            ))),
        }
    }
}

/// A single edit of one input file
///
/// Built once from the command line and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRequest {
    input: PathBuf,
    trim_start: Timestamp,
    trim_end: Option<Timestamp>,
    compress: bool,
    fade_start: Timestamp,
    fade_end: Option<Timestamp>,
    overwrite: bool,
    open_trim: OpenTrimDuration,
}

impl EditRequest {
    /// Request with every option at its default: stream copy, no trim, no fade
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            trim_start: Timestamp::zero(),
            trim_end: None,
            compress: false,
            fade_start: Timestamp::zero(),
            fade_end: None,
            overwrite: false,
            open_trim: OpenTrimDuration::default(),
        }
    }

    pub fn with_trim_start(mut self, start: Timestamp) -> Self {
        self.trim_start = start;
        self
    }

    pub fn with_trim_end(mut self, end: Option<Timestamp>) -> Self {
        self.trim_end = end;
        self
    }

    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_fade_start(mut self, start: Timestamp) -> Self {
        self.fade_start = start;
        self
    }

    pub fn with_fade_end(mut self, end: Option<Timestamp>) -> Self {
        self.fade_end = end;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_open_trim(mut self, mode: OpenTrimDuration) -> Self {
        self.open_trim = mode;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn trim_start(&self) -> &Timestamp {
        &self.trim_start
    }

    pub fn trim_end(&self) -> Option<&Timestamp> {
        self.trim_end.as_ref()
    }

    pub fn compress(&self) -> bool {
        self.compress
    }

    pub fn fade_start(&self) -> &Timestamp {
        &self.fade_start
    }

    pub fn fade_end(&self) -> Option<&Timestamp> {
        self.fade_end.as_ref()
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub fn open_trim(&self) -> OpenTrimDuration {
        self.open_trim
    }
}

/// Token appended to the output stem for each active operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OperationSuffix {
    Trim,
    Compress,
    Fade,
}

impl OperationSuffix {
    /// Prefix every output stem starts with
    pub const BASE: &'static str = "_out";

    pub fn token(self) -> &'static str {
        match self {
            OperationSuffix::Trim => "_trim",
            OperationSuffix::Compress => "_compr",
            OperationSuffix::Fade => "_fade",
        }
    }
}

/// One logically related group of transcoder arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArgGroup {
    Input { path: PathBuf },
    SeekStart { at: Timestamp },
    Duration { seconds: f64 },
    SeekEnd { at: Timestamp },
    Encode { codec: String, crf: u8 },
    StreamCopy,
    FadeOut { start: f64, duration: f64 },
    Overwrite,
    Output { path: PathBuf },
}

impl ArgGroup {
    /// Append this group's arguments to `args`
    fn render_into(&self, args: &mut Vec<String>) {
        match self {
            ArgGroup::Input { path } => {
                args.push("-i".to_string());
                args.push(path.to_string_lossy().into_owned());
            }
            ArgGroup::SeekStart { at } => {
                args.push("-ss".to_string());
                args.push(at.as_str().to_string());
            }
            ArgGroup::Duration { seconds } => {
                args.push("-t".to_string());
                args.push(format_seconds(*seconds));
            }
            ArgGroup::SeekEnd { at } => {
                args.push("-to".to_string());
                args.push(at.as_str().to_string());
            }
            ArgGroup::Encode { codec, crf } => {
                args.push("-c:v".to_string());
                args.push(codec.clone());
                args.push("-crf".to_string());
                args.push(crf.to_string());
            }
            ArgGroup::StreamCopy => {
                args.push("-c".to_string());
                args.push("copy".to_string());
            }
            ArgGroup::FadeOut { start, duration } => {
                let window = format!(
                    "t=out:st={}:d={}",
                    format_seconds(*start),
                    format_seconds(*duration)
                );
                args.push("-vf".to_string());
                args.push(format!("fade={}", window));
                args.push("-af".to_string());
                args.push(format!("afade={}", window));
            }
            ArgGroup::Overwrite => args.push("-y".to_string()),
            ArgGroup::Output { path } => args.push(path.to_string_lossy().into_owned()),
        }
    }
}

/// Planned transcoder invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditPlan {
    pub output_path: PathBuf,
    pub groups: Vec<ArgGroup>,
}

impl EditPlan {
    /// Flatten the groups into the transcoder's argument list
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for group in &self.groups {
            group.render_into(&mut args);
        }
        args
    }

    /// Human-readable command line, for logs and dry runs
    pub fn command_line(&self, program: &str) -> String {
        std::iter::once(program.to_string())
            .chain(self.args().into_iter().map(|arg| quote_arg(&arg)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Render seconds as the shortest round-trip decimal, always with a
/// fractional part (`5.0`, `123.456`)
pub fn format_seconds(seconds: f64) -> String {
    format!("{:?}", seconds)
}

fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
