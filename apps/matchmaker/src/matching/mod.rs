// Matchmaking pipeline: field extraction, embedding, cosine scoring, banding.
// All provider calls go through gemini::GeminiClient behind the Embedder trait.

pub mod embedding;
pub mod fields;
pub mod handlers;
pub mod matchmaker;
pub mod similarity;

#[cfg(test)]
pub(crate) mod testing;
