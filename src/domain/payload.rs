//! Raw operation arguments.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use super::AppError;

/// Ordered JSON arguments passed to a signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payloads(Vec<Value>);

impl Payloads {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Payload sources given on the command line.
#[derive(Debug, Clone, Default)]
pub struct PayloadInput {
    /// Inline JSON values, one per argument.
    pub inputs: Vec<String>,
    /// Files each holding one JSON value.
    pub files: Vec<PathBuf>,
}

impl PayloadInput {
    /// Parse every source into JSON values, preserving argument order.
    pub fn build(&self) -> Result<Payloads, AppError> {
        if !self.inputs.is_empty() && !self.files.is_empty() {
            return Err(AppError::InvalidInput(
                "cannot set both input and input file".to_string(),
            ));
        }

        let mut values = Vec::with_capacity(self.inputs.len() + self.files.len());
        for (index, raw) in self.inputs.iter().enumerate() {
            let value = serde_json::from_str(raw).map_err(|e| {
                AppError::InvalidInput(format!("input #{} is not valid JSON: {}", index + 1, e))
            })?;
            values.push(value);
        }

        for path in &self.files {
            let content = fs::read_to_string(path).map_err(|e| {
                AppError::InvalidInput(format!(
                    "failed reading input file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let value = serde_json::from_str(&content).map_err(|e| {
                AppError::InvalidInput(format!(
                    "input file {} is not valid JSON: {}",
                    path.display(),
                    e
                ))
            })?;
            values.push(value);
        }

        Ok(Payloads(values))
    }
}
