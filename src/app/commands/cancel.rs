//! Cancel one workflow execution or a query-selected batch.

use crate::app::AppContext;
use crate::app::commands::operation::{BatchableOperation, run_operation};
use crate::domain::{AppError, BatchOperation, ExecutionRef, OperationOutcome, SingleOrBatchOptions};
use crate::ports::{Confirmer, ExecutionRequest, IdentityProvider, WorkflowService};

#[derive(Debug, Clone, Copy, Default)]
pub struct CancelWorkflow;

impl BatchableOperation for CancelWorkflow {
    fn batch_operation(&self, identity: &str) -> BatchOperation {
        BatchOperation::Cancel { identity: identity.to_string() }
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
        service.cancel_workflow(&request).map_err(|e| AppError::remote("cancelling workflow", e))
    }

    fn success_message(&self) -> &'static str {
        "Cancel workflow succeeded"
    }
}

/// Execute the cancel command.
pub fn execute<S, I, C>(
    ctx: &AppContext<S, I, C>,
    options: &SingleOrBatchOptions,
) -> Result<OperationOutcome, AppError>
where
    S: WorkflowService,
    I: IdentityProvider,
    C: Confirmer,
{
    run_operation(ctx, options, &CancelWorkflow)
}
