pub mod batch;
pub mod configuration;
pub mod error;
pub mod outcome;
pub mod payload;
pub mod selection;

pub use batch::{BatchJobStarted, BatchOperation, BatchRequest, BatchShell};
pub use configuration::ClientConfig;
pub use error::{AppError, ServiceError, ServiceErrorKind};
pub use outcome::{OperationOutcome, OutputFormat};
pub use payload::{PayloadInput, Payloads};
pub use selection::{ExecutionRef, SingleOrBatchOptions, Target};
