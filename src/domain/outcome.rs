//! Command results and how they are rendered.

use serde::Serialize;

use super::AppError;
use super::batch::BatchJobStarted;

/// Output format selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result of a mutating workflow command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// A single execution was mutated.
    Single { message: &'static str },
    /// A batch job was started.
    Batch(BatchJobStarted),
}

#[derive(Serialize)]
struct SingleOutput<'a> {
    message: &'a str,
}

impl OperationOutcome {
    pub fn render(&self, format: OutputFormat) -> Result<String, AppError> {
        match (self, format) {
            (OperationOutcome::Single { message }, OutputFormat::Text) => Ok(message.to_string()),
            (OperationOutcome::Single { message }, OutputFormat::Json) => {
                to_json(&SingleOutput { message: *message })
            }
            (OperationOutcome::Batch(started), OutputFormat::Text) => {
                Ok(format!("Started batch for job ID: {}", started.job_id))
            }
            (OperationOutcome::Batch(started), OutputFormat::Json) => to_json(started),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::InvalidInput(format!("Failed to serialize output: {}", e)))
}
