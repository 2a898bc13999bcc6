//! Completion models speaking the OpenAI-compatible chat API.
//!
//! Both DeepSeek and OpenRouter expose `POST {base_url}/chat/completions`
//! with the same request and response shape, so one client serves both.

use crate::error::LlmError;
use crate::provider::Provider;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Something that can complete a chat prompt.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Backend serving this model.
    fn provider(&self) -> Provider;

    /// Provider-side model identifier, e.g. `deepseek-chat`.
    fn model_id(&self) -> &str;

    /// Sends the request and returns the first choice.
    async fn generate_completion(&self, request: &CompletionRequest)
        -> Result<Completion, LlmError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Provider-independent completion request.
#[derive(Debug, Clone, Default)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Single user turn with provider defaults.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(prompt)],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.messages.insert(0, ChatMessage::system(system));
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Result of a completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub provider: Provider,
    pub model: String,
    pub content: String,
    /// Chain-of-thought text, returned by reasoning models only.
    pub reasoning: Option<String>,
    pub usage: Usage,
}

#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    // DeepSeek uses `reasoning_content`, OpenRouter `reasoning`.
    #[serde(default, alias = "reasoning")]
    reasoning_content: Option<String>,
}

/// A model hosted by one provider.
#[derive(Clone)]
pub struct ChatModel {
    http_client: Client,
    provider: Provider,
    model_id: String,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for ChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatModel")
            .field("provider", &self.provider)
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

impl ChatModel {
    pub fn new(
        http_client: Client,
        provider: Provider,
        model_id: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http_client,
            provider,
            model_id: model_id.into(),
            base_url: base_url.into(),
            api_key,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    fn parse_response(&self, response: ChatCompletionResponse) -> Result<Completion, LlmError> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse(self.provider))?;

        Ok(Completion {
            provider: self.provider,
            model: self.model_id.clone(),
            content: choice.message.content.unwrap_or_default(),
            reasoning: choice.message.reasoning_content,
            usage: response.usage,
        })
    }
}

#[async_trait]
impl CompletionModel for ChatModel {
    fn provider(&self) -> Provider {
        self.provider
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<Completion, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingApiKey(self.provider))?;

        let body = ChatCompletionBody {
            model: &self.model_id,
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(
            provider = %self.provider,
            model = %self.model_id,
            messages = request.messages.len(),
            "Requesting completion"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("{} returned {} for {}", self.provider, status, self.model_id);
            return Err(LlmError::Api {
                provider: self.provider,
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response.json().await?;
        let completion = self.parse_response(parsed)?;

        tracing::debug!(
            total_tokens = completion.usage.total_tokens,
            "Completion received from {}",
            self.provider
        );

        Ok(completion)
    }
}
