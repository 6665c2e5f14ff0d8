//! Batch job submission.

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, BatchJobStarted, BatchRequest};
use crate::ports::{Confirmer, IdentityProvider, WorkflowService};

/// Submit a fully-populated batch request and report its job ID.
///
/// Exactly one remote call is made; a failed submission is returned to the
/// caller and never retried, since a retry would need the same job ID.
pub fn start_batch_job<S, I, C>(
    ctx: &AppContext<S, I, C>,
    request: BatchRequest,
) -> Result<BatchJobStarted, AppError>
where
    S: WorkflowService,
    I: IdentityProvider,
    C: Confirmer,
{
    ctx.service().start_batch_operation(&request).map_err(AppError::start_batch_failed)?;
    info!(
        job_id = %request.job_id,
        operation = request.operation.kind(),
        "started batch operation"
    );
    Ok(BatchJobStarted { job_id: request.job_id })
}
