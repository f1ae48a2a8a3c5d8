use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

const SUMMARY_MODEL: &str = "google/gemma-3-27b-it:featherless-ai";
const SUMMARY_MAX_TOKENS: u32 = 500;
const SUMMARY_TEMPERATURE: f32 = 0.3;

const SUMMARY_PROMPT: &str = "Summarize the following YouTube transcript into EXACTLY 10 concise bullet points. \
Use bold titles where helpful. No intro or outro text. Add a conclusion at the end too.";

/// Returned to the caller when the completion call fails for any reason.
pub const FALLBACK_SUMMARY: &str = "Failed to generate summary.";

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Missing API key")]
    MissingApiKey,
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl LlmClient {
    pub fn new() -> Result<Self, LlmError> {
        let api_key = env::var("HF_TOKEN").map_err(|_| LlmError::MissingApiKey)?;

        if api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let base_url = env::var("HF_BASE_URL")
            .unwrap_or_else(|_| "https://router.huggingface.co/v1".to_string());

        Self::with_base_url(base_url, api_key)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(Duration::from_secs(60)).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub async fn complete(
        &self,
        prompt: &str,
        model: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                return Err(LlmError::ApiError(error_response.error.message));
            }
            return Err(LlmError::ApiError(error_text));
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| LlmError::InvalidResponse("No choices in response".to_string()))
    }

    /// Summarize a transcript into ten bullet points plus a conclusion.
    ///
    /// Summarization is best-effort: any failure degrades to
    /// [`FALLBACK_SUMMARY`] instead of propagating, so a request that got
    /// this far still completes.
    pub async fn summarize(&self, transcript: &str) -> String {
        let prompt = format!("{SUMMARY_PROMPT}{transcript}");

        match self
            .complete(&prompt, SUMMARY_MODEL, SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE)
            .await
        {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "summarization failed, returning fallback");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }
}
