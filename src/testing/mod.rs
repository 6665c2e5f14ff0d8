mod fake_identity;
mod fake_workflow_service;
mod scripted_confirmer;

pub use fake_identity::{FakeIdentity, UsernameLookup};
pub use fake_workflow_service::{FakeWorkflowService, RecordedCall};
pub use scripted_confirmer::ScriptedConfirmer;

use crate::app::AppContext;

pub type TestContext = AppContext<FakeWorkflowService, FakeIdentity, ScriptedConfirmer>;

/// Context over fakes in the `default` namespace.
pub fn test_context(
    service: FakeWorkflowService,
    identity: FakeIdentity,
    confirmer: ScriptedConfirmer,
) -> TestContext {
    AppContext::new(service, identity, confirmer, "default")
}
