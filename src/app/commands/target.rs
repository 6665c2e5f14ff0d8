//! Single-or-batch target resolution.

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::domain::{AppError, BatchShell, ExecutionRef, SingleOrBatchOptions, Target};
use crate::ports::{Confirmer, IdentityProvider, WorkflowService};

const UNKNOWN_USER: &str = "<unknown-user>";

/// Decide whether an operation targets one execution or a query-selected batch.
///
/// The single path makes no remote call. The batch path counts matching
/// executions, asks for confirmation (skipped when `yes` is set), and returns
/// a shell carrying a fresh job ID and the audit reason.
pub fn resolve_target<S, I, C>(
    ctx: &AppContext<S, I, C>,
    options: &SingleOrBatchOptions,
) -> Result<Target, AppError>
where
    S: WorkflowService,
    I: IdentityProvider,
    C: Confirmer,
{
    if let Some(workflow_id) = options.workflow_id() {
        let conflict = |field| AppError::OptionConflict { field, mode: "workflow ID" };
        if options.query().is_some() {
            return Err(conflict("query"));
        } else if options.reason().is_some() {
            return Err(conflict("reason"));
        } else if options.yes {
            return Err(conflict("'yes'"));
        }

        let execution = ExecutionRef::new(workflow_id, options.run_id().unwrap_or_default());
        debug!(
            workflow_id = %execution.workflow_id,
            run_id = %execution.run_id,
            "resolved single execution"
        );
        return Ok(Target::Single(execution));
    }

    let Some(query) = options.query() else {
        return Err(AppError::MissingSelection);
    };
    let conflict = |field| AppError::OptionConflict { field, mode: "query" };
    if options.workflow_id().is_some() {
        return Err(conflict("workflow ID"));
    } else if options.run_id().is_some() {
        return Err(conflict("run ID"));
    }

    let count =
        ctx.service().count_workflows(ctx.namespace(), query).map_err(AppError::count_failed)?;
    debug!(%query, count, "counted workflows for batch");

    let prompt = format!("Start batch against approximately {} workflow(s)? y/N", count);
    let confirmed = if options.yes {
        warn!("{} yes (auto-confirmed)", prompt);
        true
    } else {
        ctx.confirmer().confirm(&prompt)?
    };
    if !confirmed {
        return Err(AppError::ConfirmationDenied);
    }

    let reason = match options.reason() {
        Some(reason) => reason.to_string(),
        None => default_reason(ctx.identity()),
    };

    Ok(Target::Batch(BatchShell {
        namespace: ctx.namespace().to_string(),
        job_id: ctx.identity().new_job_id(),
        visibility_query: query.to_string(),
        reason,
    }))
}

fn default_reason<I: IdentityProvider>(identity: &I) -> String {
    let username = match identity.current_username() {
        Ok(name) if !name.is_empty() => name,
        Ok(_) => UNKNOWN_USER.to_string(),
        Err(err) => {
            debug!(error = %err, "username lookup failed");
            UNKNOWN_USER.to_string()
        }
    };
    format!("Requested from CLI by {}", username)
}
