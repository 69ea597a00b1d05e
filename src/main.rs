//! compress-fade
//!
//! Compress a video and/or add a fade out and/or cut it, by building one
//! ffmpeg command from the flags.
//!
//! # Usage
//!
//! ```bash
//! compress-fade holiday.mp4 --trim_start 00:00:05 --trim_end 00:01:00
//! compress-fade holiday.mp4 --compress --fo_start 00:00:50 --fo_end 00:01:00
//! compress-fade holiday.mp4 --compress --dry-run
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use compress_fade::app::DefaultAppContainer;
use compress_fade::cli::{commands, Cli};
use compress_fade::config_initialization::initialize_settings;
use compress_fade::utils::logging::init_logging;
use compress_fade::DomainError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<DomainError>()
                .map_or(1, DomainError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = initialize_settings(&cli.settings)?;
    init_logging(&settings.log_level, settings.log_json)?;
    debug!("Effective settings: {:?}", settings);

    let container = DefaultAppContainer::new(&settings);
    let mut stdout = std::io::stdout().lock();
    commands::edit(cli, &container, &mut stdout)?;

    Ok(())
}
