use crate::domain::AppError;

/// Port for process-wide identity lookups.
pub trait IdentityProvider {
    /// Identity string sent with every mutating request.
    fn client_identity(&self) -> String;

    /// Name of the invoking OS user.
    fn current_username(&self) -> Result<String, AppError>;

    /// Fresh, globally unique batch job identifier.
    fn new_job_id(&self) -> String;
}
