//! Ollama `/api/chat` client.

use super::{ChatClient, ChatMessage, ClientError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Blocking client for a local (or remote) Ollama server.
pub struct OllamaClient {
    client: reqwest::blocking::Client,
    chat_url: String,
}

impl OllamaClient {
    /// Create a client for the server at `host` (e.g. `http://localhost:11434`).
    ///
    /// `timeout` of `None` means a request may block indefinitely.
    pub fn new(host: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            chat_url: chat_url(host),
        })
    }
}

impl ChatClient for OllamaClient {
    fn send(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ClientError> {
        let request = ChatRequest {
            model,
            messages,
            stream: false,
        };

        log::debug!(
            "POST {} model={} messages={}",
            self.chat_url,
            model,
            messages.len()
        );
        let response = self.client.post(&self.chat_url).json(&request).send()?;
        let status = response.status();
        let body = response.text()?;
        log::debug!("model service answered {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_chat_response(&body)
    }
}

/// Build the chat endpoint URL from a server base URL.
fn chat_url(host: &str) -> String {
    format!("{}/api/chat", host.trim_end_matches('/'))
}

/// Extract the reply text from a non-streaming `/api/chat` response body.
fn parse_chat_response(body: &str) -> Result<String, ClientError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;
    response
        .message
        .map(|m| m.content)
        .ok_or(ClientError::EmptyReply)
}

/// Ollama reports failures as `{"error": "..."}`; fall back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(e) => e.error,
        Err(_) => body.trim().to_string(),
    }
}
