//! Canned generator for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::gemini::GeminiError;
use crate::generation::generator::{GenerationError, JobDescriptionGenerator};

pub(crate) struct FixedGenerator {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FixedGenerator {
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with a provider-side error.
    pub(crate) fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobDescriptionGenerator for FixedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or_else(|| {
            GenerationError::Provider(GeminiError::Api {
                status: 500,
                message: "internal model error".to_string(),
            })
        })
    }
}
