//! Command implementations

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::app::{AppContainer, EditInteractor, EditResponse};
use crate::cli::Cli;

/// Execute the edit: plan, then run ffmpeg unless this is a dry run
pub fn edit(cli: Cli, container: &dyn AppContainer, out: &mut dyn Write) -> Result<EditResponse> {
    let interactor = container.edit_interactor();
    run_edit(cli, &interactor, out)
}

/// Same as [`edit`] with an explicit interactor
pub fn run_edit(cli: Cli, interactor: &EditInteractor, out: &mut dyn Write) -> Result<EditResponse> {
    let dry_run = cli.dry_run;
    let json = cli.json;
    let request = cli.edit.into_request().context("Invalid arguments")?;

    if !dry_run {
        return interactor
            .execute(request)
            .context("Edit failed");
    }

    let response = interactor.plan(&request).context("Planning failed")?;
    info!("Dry run, not starting {}", response.program);

    if json {
        let rendered = serde_json::to_string_pretty(&response)
            .context("Failed to serialize plan to JSON")?;
        writeln!(out, "{}", rendered)?;
    } else {
        writeln!(out, "{}", response.command_line())?;
    }

    Ok(response)
}
