mod confirmer;
mod identity;
mod workflow_service;

pub use confirmer::Confirmer;
pub use identity::IdentityProvider;
pub use workflow_service::{ExecutionRequest, SignalRequest, WorkflowService};
