use std::fmt;
use std::io;

use thiserror::Error;

/// Library-wide error type for wfctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Two selection options were supplied that belong to different modes.
    #[error("cannot set {field} when {mode} is set")]
    OptionConflict { field: &'static str, mode: &'static str },

    /// Neither a workflow ID nor a visibility query was supplied.
    #[error("must set either workflow ID or query")]
    MissingSelection,

    /// Counting the executions matched by a batch query failed.
    #[error("failed counting workflows from query: {0}")]
    CountWorkflows(#[source] ServiceError),

    /// A single-execution call failed.
    #[error("failed {action}: {source}")]
    Remote {
        action: &'static str,
        #[source]
        source: ServiceError,
    },

    /// Submitting a batch job failed.
    #[error("failed starting batch operation: {0}")]
    StartBatch(#[source] ServiceError),

    /// The operator answered "no" to the batch confirmation.
    #[error("user denied confirmation")]
    ConfirmationDenied,

    /// The invocation was interrupted or ran past its deadline.
    #[error("operation cancelled: {0}")]
    Cancelled(String),

    /// Reading an interactive answer failed.
    #[error("Failed to read confirmation: {0}")]
    Prompt(String),

    /// Operation input (payloads, arguments) is malformed.
    #[error("{0}")]
    InvalidInput(String),

    /// Configuration values are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    /// Wrap a remote failure for the given action, keeping deadline expiry as a
    /// cancellation rather than a domain failure.
    pub fn remote(action: &'static str, source: ServiceError) -> Self {
        match source.kind {
            ServiceErrorKind::DeadlineExceeded => AppError::Cancelled(source.message),
            _ => AppError::Remote { action, source },
        }
    }

    pub fn count_failed(source: ServiceError) -> Self {
        match source.kind {
            ServiceErrorKind::DeadlineExceeded => AppError::Cancelled(source.message),
            _ => AppError::CountWorkflows(source),
        }
    }

    pub fn start_batch_failed(source: ServiceError) -> Self {
        match source.kind {
            ServiceErrorKind::DeadlineExceeded => AppError::Cancelled(source.message),
            _ => AppError::StartBatch(source),
        }
    }

    /// Whether the error was raised before any remote call could be attempted.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::OptionConflict { .. } | AppError::MissingSelection | AppError::InvalidInput(_)
        )
    }
}

/// Classification of a failed remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// The request never produced a response (connection refused, DNS, TLS).
    Transport,
    /// The service answered with a non-success status.
    Status,
    /// The response body could not be decoded.
    Decode,
    /// The request deadline elapsed before a response arrived.
    DeadlineExceeded,
}

/// Failure reported by a [`crate::ports::WorkflowService`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: String,
    pub status: Option<u16>,
}

impl ServiceError {
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self { kind: ServiceErrorKind::Transport, message: message.into(), status: None }
    }

    pub fn status<S: Into<String>>(status: u16, message: S) -> Self {
        Self { kind: ServiceErrorKind::Status, message: message.into(), status: Some(status) }
    }

    pub fn decode<S: Into<String>>(status: u16, message: S) -> Self {
        Self { kind: ServiceErrorKind::Decode, message: message.into(), status: Some(status) }
    }

    pub fn deadline_exceeded<S: Into<String>>(message: S) -> Self {
        Self { kind: ServiceErrorKind::DeadlineExceeded, message: message.into(), status: None }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ServiceError {}
