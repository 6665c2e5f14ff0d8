use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::Confirmer;

/// Confirmer that returns a fixed answer and records every prompt shown.
#[derive(Clone)]
pub struct ScriptedConfirmer {
    answer: Option<bool>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self { answer: Some(answer), prompts: Arc::new(Mutex::new(vec![])) }
    }

    /// Fails the test if it is ever asked.
    pub fn never_asked() -> Self {
        Self { answer: None, prompts: Arc::new(Mutex::new(vec![])) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.answer {
            Some(answer) => Ok(answer),
            None => panic!("confirmation prompt shown unexpectedly: {prompt}"),
        }
    }
}
