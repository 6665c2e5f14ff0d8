//! Server-side batch job requests.

use serde::Serialize;

use super::payload::Payloads;

/// Batch request as produced by target resolution, before an operation is attached.
///
/// The resolver never knows which operation is being batched; a submittable
/// [`BatchRequest`] exists only after [`BatchShell::with_operation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchShell {
    pub namespace: String,
    pub job_id: String,
    pub visibility_query: String,
    pub reason: String,
}

impl BatchShell {
    pub fn with_operation(self, operation: BatchOperation) -> BatchRequest {
        BatchRequest {
            namespace: self.namespace,
            job_id: self.job_id,
            visibility_query: self.visibility_query,
            reason: self.reason,
            operation,
        }
    }
}

/// Fully-populated request for `start_batch_operation`.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    pub namespace: String,
    pub job_id: String,
    pub visibility_query: String,
    pub reason: String,
    pub operation: BatchOperation,
}

/// Operation-specific payload of a batch job.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOperation {
    Signal { signal: String, input: Payloads, identity: String },
    Cancel { identity: String },
    Terminate { identity: String },
    Delete { identity: String },
}

impl BatchOperation {
    pub fn kind(&self) -> &'static str {
        match self {
            BatchOperation::Signal { .. } => "signal",
            BatchOperation::Cancel { .. } => "cancel",
            BatchOperation::Terminate { .. } => "terminate",
            BatchOperation::Delete { .. } => "delete",
        }
    }
}

/// Report of a submitted batch job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchJobStarted {
    #[serde(rename = "batchJobId")]
    pub job_id: String,
}
