use std::sync::{Arc, Mutex};

use crate::domain::{BatchRequest, ServiceError};
use crate::ports::{ExecutionRequest, SignalRequest, WorkflowService};

/// Call observed by [`FakeWorkflowService`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Count { namespace: String, query: String },
    Signal(SignalRequest),
    Cancel(ExecutionRequest),
    Terminate(ExecutionRequest),
    Delete(ExecutionRequest),
    StartBatch(BatchRequest),
}

#[derive(Clone, Default)]
pub struct FakeWorkflowService {
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub count: u64,
    pub count_error: Option<ServiceError>,
    pub single_error: Option<ServiceError>,
    pub batch_error: Option<ServiceError>,
}

impl FakeWorkflowService {
    pub fn with_count(count: u64) -> Self {
        Self { count, ..Self::default() }
    }

    pub fn failing_count(error: ServiceError) -> Self {
        Self { count_error: Some(error), ..Self::default() }
    }

    pub fn failing_single(error: ServiceError) -> Self {
        Self { single_error: Some(error), ..Self::default() }
    }

    pub fn failing_batch(count: u64, error: ServiceError) -> Self {
        Self { count, batch_error: Some(error), ..Self::default() }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn batch_requests(&self) -> Vec<BatchRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::StartBatch(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: RecordedCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn single_result(&self) -> Result<(), ServiceError> {
        match &self.single_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl WorkflowService for FakeWorkflowService {
    fn count_workflows(&self, namespace: &str, query: &str) -> Result<u64, ServiceError> {
        self.record(RecordedCall::Count {
            namespace: namespace.to_string(),
            query: query.to_string(),
        });
        match &self.count_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.count),
        }
    }

    fn signal_workflow(&self, request: &SignalRequest) -> Result<(), ServiceError> {
        self.record(RecordedCall::Signal(request.clone()));
        self.single_result()
    }

    fn cancel_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError> {
        self.record(RecordedCall::Cancel(request.clone()));
        self.single_result()
    }

    fn terminate_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError> {
        self.record(RecordedCall::Terminate(request.clone()));
        self.single_result()
    }

    fn delete_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError> {
        self.record(RecordedCall::Delete(request.clone()));
        self.single_result()
    }

    fn start_batch_operation(&self, request: &BatchRequest) -> Result<(), ServiceError> {
        self.record(RecordedCall::StartBatch(request.clone()));
        match &self.batch_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
