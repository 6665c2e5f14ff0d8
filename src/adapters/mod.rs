pub mod system_identity;
pub mod terminal_confirmer;
pub mod workflow_service_http;

pub use system_identity::SystemIdentity;
pub use terminal_confirmer::TerminalConfirmer;
pub use workflow_service_http::HttpWorkflowService;
