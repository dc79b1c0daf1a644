//! Answer generation against a hosted LLM

pub mod gemini;
pub mod prompt;

use async_trait::async_trait;

use crate::error::Result;

pub use gemini::GeminiClient;
pub use prompt::{build_context, FALLBACK_ANSWER, SYSTEM_INSTRUCTION};

/// Trait for LLM-based answer generation.
///
/// The prompt is three distinct segments in order: a system instruction, the
/// document context, and the question. `Ok(None)` means the provider returned
/// no textual content; callers substitute the fixed fallback answer.
#[async_trait]
pub trait AnswerEngine: Send + Sync {
    /// Generate an answer from a system instruction, context, and question
    async fn complete(
        &self,
        system: &str,
        context: &str,
        question: &str,
    ) -> Result<Option<String>>;

    /// Check if the provider is healthy and available
    async fn health_check(&self) -> Result<bool>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
