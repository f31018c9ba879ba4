use crate::types::{ChatMessage, Role};
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use rig::client::CompletionClient;
use rig::completion::Chat;
use std::env;
use std::sync::Arc;

use super::providers::ProviderClient;

// ============================================
// Error Types
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(
        "No AI provider configured. Set GEMINI_API_KEY (or API_KEY), OPENAI_API_KEY, ANTHROPIC_API_KEY, or LLM_USE_OLLAMA=true"
    )]
    NotConfigured,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service error {status}: {body}")]
    Service { status: u16, body: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("provider error: {0}")]
    Provider(String),
}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::Provider(err.to_string())
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Request contract
// ============================================

/// Persona handed to the model with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are 'FinBot', a highly intelligent AI assistant for CA Sriharri's portfolio. You are knowledgeable about Finance, Taxation, Audit, and AI Technology. Your tone is professional yet futuristic and engaging. Keep answers concise.";

/// One outbound generation call: prior turns, persona, and the new user text.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
    pub system_instruction: String,
    pub history: Vec<ChatMessage>,
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(history: Vec<ChatMessage>, prompt: impl Into<String>) -> Self {
        Self {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            history,
            prompt: prompt.into(),
        }
    }

    /// History followed by the prompt as a final user turn.
    pub fn turns(&self) -> impl Iterator<Item = (Role, &str)> {
        self.history
            .iter()
            .map(|msg| (msg.role, msg.text.as_str()))
            .chain(std::iter::once((Role::User, self.prompt.as_str())))
    }
}

/// Anything that can turn a [`GenerateRequest`] into reply text.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> ChatResult<String>;
}

// ============================================
// Provider-backed client
// ============================================

/// Unified AI client for the companion widget.
/// Handles provider auto-detection and agent configuration.
pub struct CompanionAI {
    client: ProviderClient,
}

impl CompanionAI {
    /// Create AI client from environment configuration
    pub fn from_env() -> ChatResult<Self> {
        let client = ProviderClient::from_env()?;
        Ok(Self { client })
    }

    pub fn provider_name(&self) -> &'static str {
        self.client.name()
    }

    /// Multi-turn, non-streaming chat
    pub async fn chat(&self, request: &GenerateRequest) -> ChatResult<String> {
        match &self.client {
            ProviderClient::Gemini(client) => client.generate_content(request).await,
            ProviderClient::OpenAI(client) => {
                let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(&request.system_instruction)
                    .max_tokens(1024)
                    .temperature(0.7)
                    .build();

                agent
                    .chat(request.prompt.as_str(), to_rig_messages(&request.history))
                    .await
                    .map_err(|e| ChatError::Provider(e.to_string()))
            }
            ProviderClient::Anthropic(client) => {
                let model = env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| "claude-3-5-sonnet-20241022".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(&request.system_instruction)
                    .max_tokens(1024)
                    .temperature(0.7)
                    .build();

                agent
                    .chat(request.prompt.as_str(), to_rig_messages(&request.history))
                    .await
                    .map_err(|e| ChatError::Provider(e.to_string()))
            }
            ProviderClient::Ollama(client) => {
                let model = env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.1:latest".to_string());

                let agent = client
                    .agent(&model)
                    .preamble(&request.system_instruction)
                    .build();

                agent
                    .chat(request.prompt.as_str(), to_rig_messages(&request.history))
                    .await
                    .map_err(|e| ChatError::Provider(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl LanguageModel for CompanionAI {
    async fn generate(&self, request: &GenerateRequest) -> ChatResult<String> {
        tracing::debug!(
            provider = self.provider_name(),
            turns = request.history.len() + 1,
            "generating reply"
        );
        self.chat(request).await
    }
}

/// Convert transcript messages to Rig's message format
fn to_rig_messages(messages: &[ChatMessage]) -> Vec<rig::message::Message> {
    messages
        .iter()
        .map(|msg| match msg.role {
            Role::User => rig::message::Message::user(&msg.text),
            Role::Model => rig::message::Message::assistant(&msg.text),
        })
        .collect()
}

// ============================================
// Process-wide client
// ============================================

static SHARED_MODEL: OnceCell<Arc<CompanionAI>> = OnceCell::new();

/// Client built once from the startup environment and shared by every widget.
pub fn shared_model() -> ChatResult<Arc<dyn LanguageModel>> {
    let ai = SHARED_MODEL.get_or_try_init(|| CompanionAI::from_env().map(Arc::new))?;
    let model: Arc<dyn LanguageModel> = ai.clone();
    Ok(model)
}
