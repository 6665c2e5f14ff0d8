//! Workflow command implementation.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::app::api::{self, ConnectionOptions};
use crate::domain::{AppError, OperationOutcome, OutputFormat, PayloadInput, SingleOrBatchOptions};

#[derive(Subcommand)]
pub enum WorkflowCommands {
    /// Send a signal to one workflow or to every workflow matching a query
    #[clap(visible_alias = "s")]
    Signal {
        /// Signal name
        #[arg(long)]
        name: String,
        /// JSON argument; repeat for multiple arguments
        #[arg(short = 'i', long = "input")]
        input: Vec<String>,
        /// File holding one JSON argument; repeat for multiple arguments
        #[arg(long = "input-file")]
        input_file: Vec<PathBuf>,
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Request cancellation of one workflow or of every workflow matching a query
    Cancel {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Forcefully stop one workflow or every workflow matching a query
    Terminate {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Delete one workflow or every workflow matching a query
    Delete {
        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Selection flags shared by every mutating workflow command.
///
/// Mode exclusivity is checked by target resolution, not by clap, so the
/// reported conflict names the exact pair of options.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Workflow ID of a single execution
    #[arg(short = 'w', long = "workflow-id")]
    pub workflow_id: Option<String>,
    /// Run ID of the execution (requires --workflow-id)
    #[arg(short = 'r', long = "run-id")]
    pub run_id: Option<String>,
    /// Visibility query selecting executions for a batch job
    #[arg(short = 'q', long)]
    pub query: Option<String>,
    /// Audit reason recorded on the batch job (requires --query)
    #[arg(long)]
    pub reason: Option<String>,
    /// Start the batch without asking for confirmation (requires --query)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl From<TargetArgs> for SingleOrBatchOptions {
    fn from(args: TargetArgs) -> Self {
        Self {
            workflow_id: args.workflow_id,
            run_id: args.run_id,
            query: args.query,
            reason: args.reason,
            yes: args.yes,
        }
    }
}

pub fn run_workflow(
    command: WorkflowCommands,
    connection: &ConnectionOptions,
    format: OutputFormat,
) -> Result<(), AppError> {
    let outcome = dispatch(command, connection)?;
    print_outcome(&outcome, format)
}

fn dispatch(
    command: WorkflowCommands,
    connection: &ConnectionOptions,
) -> Result<OperationOutcome, AppError> {
    match command {
        WorkflowCommands::Signal { name, input, input_file, target } => {
            let payload = PayloadInput { inputs: input, files: input_file };
            api::signal_workflow(connection, &target.into(), &name, &payload)
        }
        WorkflowCommands::Cancel { target } => api::cancel_workflow(connection, &target.into()),
        WorkflowCommands::Terminate { target } => {
            api::terminate_workflow(connection, &target.into())
        }
        WorkflowCommands::Delete { target } => api::delete_workflow(connection, &target.into()),
    }
}

fn print_outcome(outcome: &OperationOutcome, format: OutputFormat) -> Result<(), AppError> {
    println!("{}", outcome.render(format)?);
    Ok(())
}
