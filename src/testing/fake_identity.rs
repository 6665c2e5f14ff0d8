use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::AppError;
use crate::ports::IdentityProvider;

/// How the fake answers username lookups.
#[derive(Debug, Clone)]
pub enum UsernameLookup {
    Found(String),
    Empty,
    Fails,
}

/// Identity provider with fixed answers and sequential job IDs.
#[derive(Debug)]
pub struct FakeIdentity {
    pub identity: String,
    pub username: UsernameLookup,
    job_prefix: String,
    issued: AtomicUsize,
}

impl FakeIdentity {
    pub fn new(username: UsernameLookup) -> Self {
        Self {
            identity: "wfctl-test@host".to_string(),
            username,
            job_prefix: "job".to_string(),
            issued: AtomicUsize::new(0),
        }
    }

    pub fn user(name: &str) -> Self {
        Self::new(UsernameLookup::Found(name.to_string()))
    }

    /// Job ID the next `new_job_id` call will return.
    pub fn next_job_id(&self) -> String {
        format!("{}-{}", self.job_prefix, self.issued.load(Ordering::SeqCst) + 1)
    }
}

impl Default for FakeIdentity {
    fn default() -> Self {
        Self::user("alice")
    }
}

impl IdentityProvider for FakeIdentity {
    fn client_identity(&self) -> String {
        self.identity.clone()
    }

    fn current_username(&self) -> Result<String, AppError> {
        match &self.username {
            UsernameLookup::Found(name) => Ok(name.clone()),
            UsernameLookup::Empty => Ok(String::new()),
            UsernameLookup::Fails => {
                Err(AppError::InvalidConfig("no user in test environment".to_string()))
            }
        }
    }

    fn new_job_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", self.job_prefix, n)
    }
}
