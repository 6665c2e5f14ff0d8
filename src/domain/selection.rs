//! Selection inputs and the single-or-batch target they resolve to.

use super::batch::BatchShell;

/// User-supplied selection parameters shared by every mutating workflow command.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleOrBatchOptions {
    /// Workflow ID of a single execution.
    pub workflow_id: Option<String>,
    /// Run ID of the single execution; only meaningful with `workflow_id`.
    pub run_id: Option<String>,
    /// Visibility query selecting executions for a batch job.
    pub query: Option<String>,
    /// Audit reason recorded on the batch job.
    pub reason: Option<String>,
    /// Skip the batch confirmation prompt.
    pub yes: bool,
}

impl SingleOrBatchOptions {
    pub fn single(workflow_id: impl Into<String>, run_id: Option<String>) -> Self {
        Self { workflow_id: Some(workflow_id.into()), run_id, ..Self::default() }
    }

    pub fn batch(query: impl Into<String>, reason: Option<String>, yes: bool) -> Self {
        Self { query: Some(query.into()), reason, yes, ..Self::default() }
    }

    pub fn workflow_id(&self) -> Option<&str> {
        non_empty(&self.workflow_id)
    }

    pub fn run_id(&self) -> Option<&str> {
        non_empty(&self.run_id)
    }

    pub fn query(&self) -> Option<&str> {
        non_empty(&self.query)
    }

    pub fn reason(&self) -> Option<&str> {
        non_empty(&self.reason)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// One remote execution. An empty `run_id` addresses the latest run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionRef {
    pub workflow_id: String,
    pub run_id: String,
}

impl ExecutionRef {
    pub fn new(workflow_id: impl Into<String>, run_id: impl Into<String>) -> Self {
        Self { workflow_id: workflow_id.into(), run_id: run_id.into() }
    }
}

/// Where an operation is sent: exactly one execution, or a query-selected batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Single(ExecutionRef),
    Batch(BatchShell),
}
