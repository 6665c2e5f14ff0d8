use crate::domain::AppError;

/// Port for interactive yes/no confirmation.
pub trait Confirmer {
    /// Ask the operator `prompt`; `Ok(false)` means the operator declined.
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;
}
