/// AI module for finfolio
///
/// This module provides the language-model seam used by the FinBot companion.
/// Gemini is reached over plain REST; OpenAI, Anthropic and Ollama go through
/// the Rig framework. The provider is picked from environment variables.
///
/// # Architecture
///
/// - `client` - `LanguageModel` trait, request type and the `CompanionAI` client
/// - `providers` - provider detection and the Gemini REST client
///
/// # Usage
///
/// ```rust,no_run
/// use finfolio::ai::{CompanionAI, GenerateRequest, LanguageModel};
///
/// # async fn example() -> Result<(), finfolio::ai::ChatError> {
/// let ai = CompanionAI::from_env()?;
/// let _reply = ai.generate(&GenerateRequest::new(Vec::new(), "Hello!")).await?;
/// # Ok(())
/// # }
/// ```
mod client;
mod providers;

// Re-export main types
pub use client::{
    ChatError, ChatResult, CompanionAI, GenerateRequest, LanguageModel, SYSTEM_INSTRUCTION,
    shared_model,
};
pub use providers::{GeminiClient, unset_defaults};
