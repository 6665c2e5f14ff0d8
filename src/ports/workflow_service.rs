//! Workflow service port definition.

use crate::domain::{BatchRequest, ExecutionRef, Payloads, ServiceError};

/// Request to deliver a signal to one execution.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRequest {
    pub namespace: String,
    pub execution: ExecutionRef,
    pub signal_name: String,
    pub input: Payloads,
    pub identity: String,
}

/// Request to cancel, terminate, or delete one execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub namespace: String,
    pub execution: ExecutionRef,
    pub identity: String,
}

/// Remote operations the dispatch layer relies on.
///
/// Implementations perform exactly one remote call per method and never retry.
pub trait WorkflowService {
    /// Approximate number of executions matched by a visibility query.
    fn count_workflows(&self, namespace: &str, query: &str) -> Result<u64, ServiceError>;

    fn signal_workflow(&self, request: &SignalRequest) -> Result<(), ServiceError>;

    fn cancel_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError>;

    fn terminate_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError>;

    fn delete_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError>;

    /// Submit an asynchronous batch job keyed by the request's job ID.
    fn start_batch_operation(&self, request: &BatchRequest) -> Result<(), ServiceError>;
}
