//! Signal one workflow execution or a query-selected batch.

use crate::app::AppContext;
use crate::app::commands::operation::{BatchableOperation, run_operation};
use crate::domain::{
    AppError, BatchOperation, ExecutionRef, OperationOutcome, PayloadInput, Payloads,
    SingleOrBatchOptions,
};
use crate::ports::{Confirmer, IdentityProvider, SignalRequest, WorkflowService};

/// Signal name and already-parsed arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalWorkflow {
    pub name: String,
    pub input: Payloads,
}

impl BatchableOperation for SignalWorkflow {
    fn batch_operation(&self, identity: &str) -> BatchOperation {
        BatchOperation::Signal {
            signal: self.name.clone(),
            input: self.input.clone(),
            identity: identity.to_string(),
        }
    }

    fn execute_single(
        &self,
        service: &dyn WorkflowService,
        namespace: &str,
        execution: &ExecutionRef,
        identity: &str,
    ) -> Result<(), AppError> {
        let request = SignalRequest {
            namespace: namespace.to_string(),
            execution: execution.clone(),
            signal_name: self.name.clone(),
            input: self.input.clone(),
            identity: identity.to_string(),
        };
        service.signal_workflow(&request).map_err(|e| AppError::remote("signalling workflow", e))
    }

    fn success_message(&self) -> &'static str {
        "Signal workflow succeeded"
    }
}

/// Execute the signal command.
///
/// Input is parsed before the target is resolved so malformed arguments are
/// reported without contacting the service.
pub fn execute<S, I, C>(
    ctx: &AppContext<S, I, C>,
    options: &SingleOrBatchOptions,
    name: &str,
    input: &PayloadInput,
) -> Result<OperationOutcome, AppError>
where
    S: WorkflowService,
    I: IdentityProvider,
    C: Confirmer,
{
    if name.trim().is_empty() {
        return Err(AppError::InvalidInput("signal name must not be empty".to_string()));
    }
    let operation = SignalWorkflow { name: name.to_string(), input: input.build()? };
    run_operation(ctx, options, &operation)
}
