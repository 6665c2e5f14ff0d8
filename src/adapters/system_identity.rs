//! Identity provider backed by the process environment.

use std::env;
use std::io;

use uuid::Uuid;

use crate::domain::AppError;
use crate::ports::IdentityProvider;

const USERNAME_VARS: [&str; 2] = ["USER", "USERNAME"];

#[derive(Debug, Clone, Default)]
pub struct SystemIdentity;

impl SystemIdentity {
    pub fn new() -> Self {
        Self
    }
}

/// Host name as reported by the OS; empty when it cannot be read.
fn host_name() -> String {
    hostname::get().map(|h| h.to_string_lossy().into_owned()).unwrap_or_default()
}

impl IdentityProvider for SystemIdentity {
    fn client_identity(&self) -> String {
        let username = self.current_username().unwrap_or_default();
        format!("wfctl:{}@{}", username, host_name())
    }

    /// First non-empty value of `USER`, then `USERNAME`.
    fn current_username(&self) -> Result<String, AppError> {
        USERNAME_VARS
            .iter()
            .find_map(|var| env::var(var).ok().filter(|value| !value.is_empty()))
            .ok_or_else(|| {
                AppError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    "neither USER nor USERNAME is set",
                ))
            })
    }

    fn new_job_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
