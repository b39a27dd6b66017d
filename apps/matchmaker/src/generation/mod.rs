// Job description generation from a free-text prompt.
// All LLM calls go through gemini::GeminiClient.

pub mod generator;
pub mod handlers;
pub mod prompts;

#[cfg(test)]
pub(crate) mod testing;
