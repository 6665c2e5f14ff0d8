//! API Facade for the application.
//!
//! Glues configuration, adapter construction, and command execution together
//! for callers that do not need to supply their own ports.

use std::path::PathBuf;

use crate::adapters::{HttpWorkflowService, SystemIdentity, TerminalConfirmer};
use crate::app::AppContext;
use crate::app::commands::{cancel, delete, signal, terminate};
use crate::app::config::{ConfigOverrides, load_client_config};
use crate::domain::{AppError, OperationOutcome, PayloadInput, SingleOrBatchOptions};

pub type LiveContext = AppContext<HttpWorkflowService, SystemIdentity, TerminalConfirmer>;

/// Where to find connection settings.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOptions {
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Build a context talking to the configured service.
pub fn connect(options: &ConnectionOptions) -> Result<LiveContext, AppError> {
    let config = load_client_config(options.config_path.as_deref(), &options.overrides)?;
    let service = HttpWorkflowService::new(&config)?;
    Ok(AppContext::new(service, SystemIdentity::new(), TerminalConfirmer, config.namespace))
}

/// Signal one execution or a query-selected batch.
pub fn signal_workflow(
    connection: &ConnectionOptions,
    options: &SingleOrBatchOptions,
    name: &str,
    input: &PayloadInput,
) -> Result<OperationOutcome, AppError> {
    signal::execute(&connect(connection)?, options, name, input)
}

/// Cancel one execution or a query-selected batch.
pub fn cancel_workflow(
    connection: &ConnectionOptions,
    options: &SingleOrBatchOptions,
) -> Result<OperationOutcome, AppError> {
    cancel::execute(&connect(connection)?, options)
}

/// Terminate one execution or a query-selected batch.
pub fn terminate_workflow(
    connection: &ConnectionOptions,
    options: &SingleOrBatchOptions,
) -> Result<OperationOutcome, AppError> {
    terminate::execute(&connect(connection)?, options)
}

/// Delete one execution or a query-selected batch.
pub fn delete_workflow(
    connection: &ConnectionOptions,
    options: &SingleOrBatchOptions,
) -> Result<OperationOutcome, AppError> {
    delete::execute(&connect(connection)?, options)
}
