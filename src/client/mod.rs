//! Chat-completion client.
//!
//! The generate flow talks to the model through [`ChatClient`], one request
//! and one reply per call. [`OllamaClient`] is the production implementation;
//! tests substitute a canned client.

mod ollama;

pub use ollama::OllamaClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// A `user`-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Error type for model service calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, TLS, timeout, or other transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("model service returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The reply body was not the expected JSON shape.
    #[error("failed to decode model reply: {0}")]
    Decode(String),

    /// The reply decoded but carried no message.
    #[error("model returned no message content")]
    EmptyReply,
}

/// A chat-completion service.
pub trait ChatClient {
    /// Send `messages` to `model` and return the text of the reply message.
    fn send(&self, model: &str, messages: &[ChatMessage]) -> Result<String, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = ChatMessage::user("hi");
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "hi");
    }

    #[test]
    fn test_message_serializes_as_role_and_content() {
        let json = serde_json::to_string(&ChatMessage::user("generate")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"generate"}"#);
    }

    #[test]
    fn test_status_error_message() {
        let err = ClientError::Status {
            status: 404,
            message: "model 'llama9' not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "model service returned status 404: model 'llama9' not found"
        );
    }
}
