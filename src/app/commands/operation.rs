//! Shared resolve → branch → dispatch skeleton for mutating workflow commands.

use tracing::debug;

use crate::app::AppContext;
use crate::app::commands::batch::start_batch_job;
use crate::app::commands::target::resolve_target;
use crate::domain::{
    AppError, BatchOperation, ExecutionRef, OperationOutcome, SingleOrBatchOptions, Target,
};
use crate::ports::{Confirmer, IdentityProvider, WorkflowService};

/// A mutating operation that can target one execution or a batch.
pub trait BatchableOperation {
    /// Payload attached to a batch request.
    fn batch_operation(&self, identity: &str) -> BatchOperation;

    /// Issue the single-execution remote call.
    fn execute_single(
        &self,
        service: &dyn WorkflowService,
        namespace: &str,
        execution: &ExecutionRef,
        identity: &str,
    ) -> Result<(), AppError>;

    /// Message reported after a successful single-execution call.
    fn success_message(&self) -> &'static str;
}

/// Resolve the target for `operation` and dispatch it.
pub fn run_operation<S, I, C, O>(
    ctx: &AppContext<S, I, C>,
    options: &SingleOrBatchOptions,
    operation: &O,
) -> Result<OperationOutcome, AppError>
where
    S: WorkflowService,
    I: IdentityProvider,
    C: Confirmer,
    O: BatchableOperation,
{
    let identity = ctx.identity().client_identity();

    match resolve_target(ctx, options)? {
        Target::Single(execution) => {
            debug!(workflow_id = %execution.workflow_id, "dispatching single-execution call");
            operation.execute_single(ctx.service(), ctx.namespace(), &execution, &identity)?;
            Ok(OperationOutcome::Single { message: operation.success_message() })
        }
        Target::Batch(shell) => {
            let request = shell.with_operation(operation.batch_operation(&identity));
            let started = start_batch_job(ctx, request)?;
            Ok(OperationOutcome::Batch(started))
        }
    }
}
