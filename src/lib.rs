//! wfctl: dispatch workflow operations to a single execution or a server-side batch job.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{
    ConnectionOptions, cancel_workflow, delete_workflow, signal_workflow, terminate_workflow,
};
pub use app::commands::{BatchableOperation, resolve_target, run_operation, start_batch_job};
pub use domain::{
    AppError, BatchJobStarted, BatchOperation, BatchRequest, BatchShell, ExecutionRef,
    OperationOutcome, OutputFormat, PayloadInput, Payloads, SingleOrBatchOptions, Target,
};
