//! Job description generation — wraps a free-text prompt in the HR template
//! and returns the model's text.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::gemini::{GeminiClient, GeminiError};
use crate::generation::prompts::JOB_DESCRIPTION_PROMPT_TEMPLATE;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Provider(#[from] GeminiError),

    #[error("provider returned no text")]
    EmptyContent,
}

/// Carried in `AppState` as `Arc<dyn JobDescriptionGenerator>`.
#[async_trait]
pub trait JobDescriptionGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[async_trait]
impl JobDescriptionGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self.generate_content(&build_prompt(prompt)).await?;
        let text = response.text();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyContent);
        }

        info!(chars = text.len(), "Job description generated");
        Ok(text)
    }
}

pub fn build_prompt(user_prompt: &str) -> String {
    JOB_DESCRIPTION_PROMPT_TEMPLATE.replace("{prompt}", user_prompt)
}
