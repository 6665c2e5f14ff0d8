//! Delete executions and their history. Running executions are terminated first by the service.

use crate::app::AppContext;
use crate::app::commands::operation::{BatchableOperation, run_operation};
use crate::domain::{AppError, BatchOperation, ExecutionRef, OperationOutcome, SingleOrBatchOptions};
use crate::ports::{Confirmer, ExecutionRequest, IdentityProvider, WorkflowService};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteWorkflow;

impl BatchableOperation for DeleteWorkflow {
    fn batch_operation(&self, identity: &str) -> BatchOperation {
        BatchOperation::Delete { identity: identity.to_string() }
    }

    fn execute_single(
        &self,
        service: &dyn WorkflowService,
        namespace: &str,
        execution: &ExecutionRef,
        identity: &str,
    ) -> Result<(), AppError> {
        let request = ExecutionRequest {
            namespace: namespace.to_string(),
            execution: execution.clone(),
            identity: identity.to_string(),
        };
        service.delete_workflow(&request).map_err(|e| AppError::remote("deleting workflow", e))
    }

    fn success_message(&self) -> &'static str {
        "Delete workflow succeeded"
    }
}

pub fn execute<S, I, C>(
    ctx: &AppContext<S, I, C>,
    options: &SingleOrBatchOptions,
) -> Result<OperationOutcome, AppError>
where
    S: WorkflowService,
    I: IdentityProvider,
    C: Confirmer,
{
    run_operation(ctx, options, &DeleteWorkflow)
}
