// Edit interactor - Orchestrates the plan-then-transcode use case

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::planner::CommandPlanner;
use crate::ports::*;

/// Outcome of one edit
#[derive(Debug, Clone, Serialize)]
pub struct EditResponse {
    pub output_path: PathBuf,
    pub program: String,
    pub args: Vec<String>,
    pub plan: EditPlan,
    /// False for dry runs
    pub executed: bool,
}

impl EditResponse {
    /// Shell-style rendering of the planned command
    pub fn command_line(&self) -> String {
        self.plan.command_line(&self.program)
    }
}

/// Interactor for the edit use case
pub struct EditInteractor {
    planner: CommandPlanner,
    execute_port: Arc<dyn ExecutePort>,
}

impl EditInteractor {
    /// Create new edit interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>, execute_port: Arc<dyn ExecutePort>) -> Self {
        Self {
            planner: CommandPlanner::new(probe_port),
            execute_port,
        }
    }

    /// Plan the edit without running the transcoder
    pub fn plan(&self, request: &EditRequest) -> Result<EditResponse, DomainError> {
        let plan = self.planner.plan(request)?;
        let response = EditResponse {
            output_path: plan.output_path.clone(),
            program: self.execute_port.program().to_string(),
            args: plan.args(),
            plan,
            executed: false,
        };
        info!("Planned command: {}", response.command_line());
        Ok(response)
    }

    /// Plan the edit and run the transcoder once
    pub fn execute(&self, request: EditRequest) -> Result<EditResponse, DomainError> {
        info!("Editing {}", request.input().display());

        let mut response = self.plan(&request)?;
        self.execute_port.execute(&response.args)?;
        response.executed = true;

        info!("Wrote {}", response.output_path.display());
        Ok(response)
    }
}
