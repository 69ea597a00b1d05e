//! Command planning: turns an edit request into a transcoder invocation

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::ProbePort;

/// Builds the output path and argument groups for one edit
pub struct CommandPlanner {
    probe_port: Arc<dyn ProbePort>,
}

impl CommandPlanner {
    /// Create a planner that looks durations up through `probe_port`
    pub fn new(probe_port: Arc<dyn ProbePort>) -> Self {
        Self { probe_port }
    }

    /// Plan the transcoder invocation for `request`
    ///
    /// Groups are emitted in a fixed order: input, trim, codec, fade,
    /// output. The probe is consulted only for a trim start without a
    /// trim end.
    pub fn plan(&self, request: &EditRequest) -> Result<EditPlan, DomainError> {
        let mut groups = vec![ArgGroup::Input {
            path: request.input().to_path_buf(),
        }];
        let mut suffixes = Vec::new();

        if !request.trim_start().is_default() {
            groups.push(ArgGroup::SeekStart {
                at: request.trim_start().clone(),
            });
            if request.trim_end().is_none() {
                groups.push(ArgGroup::Duration {
                    seconds: self.open_trim_duration(request)?,
                });
                suffixes.push(OperationSuffix::Trim);
            }
        }

        if let Some(end) = request.trim_end() {
            groups.push(ArgGroup::SeekEnd { at: end.clone() });
            suffixes.push(OperationSuffix::Trim);
        }

        if request.compress() {
            groups.push(ArgGroup::Encode {
                codec: COMPRESS_VIDEO_CODEC.to_string(),
                crf: COMPRESS_CRF,
            });
            suffixes.push(OperationSuffix::Compress);
        } else {
            groups.push(ArgGroup::StreamCopy);
        }

        if let Some(end) = request.fade_end() {
            groups.push(fade_out_group(request.fade_start(), end)?);
            suffixes.push(OperationSuffix::Fade);
        }

        let output_path = output_path(request.input(), &suffixes);

        if request.overwrite() {
            groups.push(ArgGroup::Overwrite);
        }
        groups.push(ArgGroup::Output {
            path: output_path.clone(),
        });

        Ok(EditPlan {
            output_path,
            groups,
        })
    }

    /// Duration passed with `-t` when only a trim start is given
    fn open_trim_duration(&self, request: &EditRequest) -> Result<f64, DomainError> {
        match request.open_trim() {
            OpenTrimDuration::SourceDuration => {
                let source = self.probe_port.duration(request.input())?;
                warn!(
                    "Open-ended trim from {} uses the full source duration ({}s); \
                     pass --open-trim remaining to subtract the trim start",
                    request.trim_start(),
                    format_seconds(source)
                );
                Ok(source)
            }
            OpenTrimDuration::Remaining => {
                let start = request.trim_start().to_seconds()?;
                let source = self.probe_port.duration(request.input())?;
                let remaining = (source - start).max(0.0);
                debug!("Remaining duration after {}: {}s", request.trim_start(), remaining);
                Ok(remaining)
            }
        }
    }
}

/// Paired video and audio fade-out over `[start, end]`
fn fade_out_group(start: &Timestamp, end: &Timestamp) -> Result<ArgGroup, DomainError> {
    let start_seconds = start.to_seconds()?;
    let end_seconds = end.to_seconds()?;
    let duration = end_seconds - start_seconds;

    if duration < 0.0 {
        return Err(DomainError::InvalidFadeWindow {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(ArgGroup::FadeOut {
        start: start_seconds,
        duration,
    })
}

/// Output path next to `input`: `<stem>_out<suffixes>.<ext>`
pub fn output_path(input: &Path, suffixes: &[OperationSuffix]) -> PathBuf {
    let mut file_name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
    file_name.push(OperationSuffix::BASE);

    let mut ordered = suffixes.to_vec();
    ordered.sort();
    ordered.dedup();
    for suffix in ordered {
        file_name.push(suffix.token());
    }

    if let Some(ext) = input.extension() {
        file_name.push(".");
        file_name.push(ext);
    }

    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProbe {
        duration: f64,
        calls: AtomicUsize,
    }

    impl FixedProbe {
        fn new(duration: f64) -> Arc<Self> {
            Arc::new(Self {
                duration,
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl ProbePort for FixedProbe {
        fn duration(&self, _file_path: &Path) -> Result<f64, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.duration)
        }
    }

    fn planner(probe: &Arc<FixedProbe>) -> CommandPlanner {
        CommandPlanner::new(Arc::clone(probe) as Arc<dyn ProbePort>)
    }

    #[test]
    fn test_output_path_keeps_directory_and_extension() {
        assert_eq!(
            output_path(Path::new("/videos/holiday.mov"), &[]),
            PathBuf::from("/videos/holiday_out.mov")
        );
        assert_eq!(
            output_path(Path::new("holiday.mov"), &[OperationSuffix::Fade]),
            PathBuf::from("holiday_out_fade.mov")
        );
        assert_eq!(
            output_path(Path::new("raw"), &[OperationSuffix::Compress]),
            PathBuf::from("raw_out_compr")
        );
    }

    #[test]
    fn test_output_path_orders_suffixes() {
        let path = output_path(
            Path::new("a.mp4"),
            &[
                OperationSuffix::Fade,
                OperationSuffix::Trim,
                OperationSuffix::Compress,
            ],
        );
        assert_eq!(path, PathBuf::from("a_out_trim_compr_fade.mp4"));
    }

    #[test]
    fn test_output_path_differs_from_input() {
        for input in ["a.mp4", "/x/y/a_out.mp4", "noext", ".hidden"] {
            assert_ne!(output_path(Path::new(input), &[]), PathBuf::from(input));
        }
    }

    #[test]
    fn test_trim_start_with_end_skips_probe() {
        let probe = FixedProbe::new(42.0);
        let request = EditRequest::new("a.mp4")
            .with_trim_start(Timestamp::new("00:00:05"))
            .with_trim_end(Some(Timestamp::new("00:01:00")));

        let plan = planner(&probe).plan(&request).unwrap();

        assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            plan.args(),
            vec!["-i", "a.mp4", "-ss", "00:00:05", "-to", "00:01:00", "-c", "copy", "a_out_trim.mp4"]
        );
    }

    #[test]
    fn test_remaining_mode_subtracts_trim_start() {
        let probe = FixedProbe::new(100.5);
        let request = EditRequest::new("a.mp4")
            .with_trim_start(Timestamp::new("00:00:30"))
            .with_open_trim(OpenTrimDuration::Remaining);

        let plan = planner(&probe).plan(&request).unwrap();
        assert!(plan.groups.contains(&ArgGroup::Duration { seconds: 70.5 }));
    }

    #[test]
    fn test_remaining_mode_clamps_at_zero() {
        let probe = FixedProbe::new(10.0);
        let request = EditRequest::new("a.mp4")
            .with_trim_start(Timestamp::new("00:01:00"))
            .with_open_trim(OpenTrimDuration::Remaining);

        let plan = planner(&probe).plan(&request).unwrap();
        assert!(plan.groups.contains(&ArgGroup::Duration { seconds: 0.0 }));
    }

    #[test]
    fn test_remaining_mode_rejects_malformed_start_before_probing() {
        let probe = FixedProbe::new(10.0);
        let request = EditRequest::new("a.mp4")
            .with_trim_start(Timestamp::new("bogus"))
            .with_open_trim(OpenTrimDuration::Remaining);

        let err = planner(&probe).plan(&request).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimestamp { ref time } if time == "bogus"));
        assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_negative_fade_window_fails() {
        let probe = FixedProbe::new(10.0);
        let request = EditRequest::new("a.mp4")
            .with_fade_start(Timestamp::new("00:00:15"))
            .with_fade_end(Some(Timestamp::new("00:00:10")));

        let err = planner(&probe).plan(&request).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFadeWindow { .. }));
    }

    #[test]
    fn test_malformed_fade_time_fails() {
        let probe = FixedProbe::new(10.0);
        let request = EditRequest::new("a.mp4").with_fade_end(Some(Timestamp::new("15")));

        let err = planner(&probe).plan(&request).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimestamp { ref time } if time == "15"));
    }

    #[test]
    fn test_fade_start_unused_without_fade_end() {
        let probe = FixedProbe::new(10.0);
        let request = EditRequest::new("a.mp4").with_fade_start(Timestamp::new("bogus"));

        let plan = planner(&probe).plan(&request).unwrap();
        assert_eq!(plan.output_path, PathBuf::from("a_out.mp4"));
    }

    #[test]
    fn test_overwrite_precedes_output() {
        let probe = FixedProbe::new(10.0);
        let request = EditRequest::new("a.mp4").with_overwrite(true);

        let args = planner(&probe).plan(&request).unwrap().args();
        assert_eq!(&args[args.len() - 2..], ["-y", "a_out.mp4"]);
    }
}
