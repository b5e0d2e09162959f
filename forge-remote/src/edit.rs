//! AI edit client
//!
//! This module forwards the current source plus a free-text instruction to
//! a chat-completion endpoint and returns the replacement text, with code
//! fence markers stripped from the reply. The caller decides whether to
//! adopt the returned text; nothing is mutated in place.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::error::{truncate, Error, Result};

pub const DEFAULT_EDIT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_EDIT_MODEL: &str = "gpt-4.1-2025-04-14";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 2000;

const SYSTEM_PROMPT: &str = "You are a C++ code editor. Your task is to modify the provided C++ code based on the user's edit request.

Rules:
1. Only output the modified C++ code, nothing else
2. Maintain the original code style and formatting as much as possible
3. Make only the changes requested by the user
4. Ensure the code remains syntactically correct
5. If the request is unclear or impossible, make your best interpretation
6. Preserve comments and structure unless specifically asked to change them";

/// One edit invocation: the source to transform and what to do to it.
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub source: String,
    pub instruction: String,
}

impl EditRequest {
    pub fn new(source: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            instruction: instruction.into(),
        }
    }

    /// Reject blank inputs before any network call is made.
    pub fn validate(&self) -> Result<()> {
        if self.instruction.trim().is_empty() {
            return Err(Error::validation(
                "no edit instruction provided: describe the change to make",
            ));
        }
        if self.source.trim().is_empty() {
            return Err(Error::validation(
                "no code to edit: generate or load some code first",
            ));
        }
        Ok(())
    }
}

/// Text transformation capability, injectable so callers can test against
/// fakes instead of a live endpoint.
#[async_trait]
pub trait TextEditService: Send + Sync {
    /// Transform `request.source` per `request.instruction`, returning the
    /// replacement text.
    async fn edit(&self, request: &EditRequest) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Live client against an OpenAI-compatible chat-completions endpoint.
pub struct ChatEditClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatEditClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl TextEditService for ChatEditClient {
    async fn edit(&self, request: &EditRequest) -> Result<String> {
        request.validate()?;

        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": compose_user_prompt(request) },
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        debug!(endpoint = %self.endpoint, model = %self.model, "sending edit request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(format!(
                "edit service error {}: {}",
                status,
                truncate(&body, 320)
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::remote(format!("invalid edit response: {e}")))?;

        let content = body
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("")
            .trim();

        if content.is_empty() {
            return Err(Error::remote("edit response carried no replacement text"));
        }

        Ok(strip_code_fences(content))
    }
}

fn compose_user_prompt(request: &EditRequest) -> String {
    format!(
        "Here is the C++ code to edit:\n\n```cpp\n{}\n```\n\nEdit request: {}\n\nPlease provide only the modified C++ code:",
        request.source, request.instruction
    )
}

/// Strip a leading fenced-code marker (optionally tagged cpp/c++) and a
/// trailing fence from a model reply.
fn strip_code_fences(reply: &str) -> String {
    let mut text = reply.trim();

    for marker in ["```cpp\n", "```c++\n", "```\n", "```cpp", "```c++"] {
        if let Some(rest) = text.strip_prefix(marker) {
            text = rest;
            break;
        }
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim().to_string()
}
