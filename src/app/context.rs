use crate::ports::{Confirmer, IdentityProvider, WorkflowService};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: WorkflowService, I: IdentityProvider, C: Confirmer> {
    service: S,
    identity: I,
    confirmer: C,
    namespace: String,
}

impl<S: WorkflowService, I: IdentityProvider, C: Confirmer> AppContext<S, I, C> {
    /// Create a new application context.
    pub fn new(service: S, identity: I, confirmer: C, namespace: impl Into<String>) -> Self {
        Self { service, identity, confirmer, namespace: namespace.into() }
    }

    /// Get a reference to the workflow service client.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Get a reference to the identity provider.
    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Get a reference to the confirmation prompt.
    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }

    /// Namespace all requests are scoped to.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}
