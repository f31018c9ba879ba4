use crate::ai::{ChatError, ChatResult, GenerateRequest};
use crate::types::Role;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// REST client for Gemini's `generateContent` endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

// Gemini request types
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: SystemInstruction<'a>,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize, Debug)]
struct SystemInstruction<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

// Gemini response types
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, endpoint: Option<String>) -> Self {
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    pub async fn generate_content(&self, request: &GenerateRequest) -> ChatResult<String> {
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&build_body(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ChatError::Service {
                status: status.as_u16(),
                body,
            });
        }

        parse_reply(&body)
    }
}

/// Map a request onto Gemini's `contents` + `systemInstruction` shape.
pub fn build_body(request: &GenerateRequest) -> GenerateContentBody<'_> {
    GenerateContentBody {
        contents: request
            .turns()
            .map(|(role, text)| Content {
                role: match role {
                    Role::User => "user",
                    Role::Model => "model",
                },
                parts: [Part { text }],
            })
            .collect(),
        system_instruction: SystemInstruction {
            parts: [Part {
                text: &request.system_instruction,
            }],
        },
    }
}

/// Concatenated text parts of the first candidate; `""` when there is none.
pub fn parse_reply(body: &str) -> ChatResult<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}
