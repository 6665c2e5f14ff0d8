use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError};

use crate::domain::AppError;
use crate::ports::Confirmer;

/// Reads a y/N answer from the controlling terminal; anything but "yes" declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        match Confirm::new().with_prompt(prompt).default(false).show_default(false).interact() {
            Ok(answer) => Ok(answer),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
                Err(AppError::Cancelled("confirmation prompt interrupted".to_string()))
            }
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}
