pub mod gemini;

use super::{ChatError, ChatResult};
use rig::providers;
use std::env;

pub use gemini::GeminiClient;

const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Enum to hold different provider clients
pub enum ProviderClient {
    Gemini(GeminiClient),
    OpenAI(providers::openai::Client),
    Anthropic(providers::anthropic::Client),
    Ollama(providers::ollama::Client),
}

impl ProviderClient {
    /// Auto-detect and configure provider from environment variables
    pub fn from_env() -> ChatResult<Self> {
        // Priority order:
        // 1. GEMINI_API_KEY / API_KEY → Gemini
        // 2. OPENAI_API_KEY → OpenAI
        // 3. ANTHROPIC_API_KEY → Claude
        // 4. LLM_USE_OLLAMA=true → Ollama

        if let Some(key) = non_empty_var("GEMINI_API_KEY").or_else(|| non_empty_var("API_KEY")) {
            let model =
                non_empty_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
            let endpoint = non_empty_var("GEMINI_ENDPOINT");

            return Ok(Self::Gemini(GeminiClient::new(key, model, endpoint)));
        }

        if let Some(key) = non_empty_var("OPENAI_API_KEY") {
            return Ok(Self::OpenAI(providers::openai::Client::new(&key)));
        }

        if let Some(key) = non_empty_var("ANTHROPIC_API_KEY") {
            return Ok(Self::Anthropic(providers::anthropic::Client::new(&key)));
        }

        if env::var("LLM_USE_OLLAMA")
            .map(|v| is_truthy(&v))
            .unwrap_or(false)
        {
            // The Rig client reads OLLAMA_HOST (defaults to http://localhost:11434)
            return Ok(Self::Ollama(providers::ollama::Client::new()));
        }

        Err(ChatError::NotConfigured)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProviderClient::Gemini(_) => "gemini",
            ProviderClient::OpenAI(_) => "openai",
            ProviderClient::Anthropic(_) => "anthropic",
            ProviderClient::Ollama(_) => "ollama",
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(source: &str) -> Vec<(&str, &str)> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Entries of a bundled config file that the real environment does not set.
pub fn unset_defaults<'a>(
    source: &'a str,
    is_set: impl Fn(&str) -> bool,
) -> Vec<(&'a str, &'a str)> {
    parse_env_lines(source)
        .into_iter()
        .filter(|(key, _)| !is_set(key))
        .collect()
}
