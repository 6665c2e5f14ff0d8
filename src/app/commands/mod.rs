pub mod batch;
pub mod cancel;
pub mod delete;
pub mod operation;
pub mod signal;
pub mod target;
pub mod terminate;

pub use batch::start_batch_job;
pub use operation::{BatchableOperation, run_operation};
pub use target::resolve_target;
