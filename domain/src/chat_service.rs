//! Coach chat: the in-memory conversation and the bridge to the text
//! generation backend.
//!
//! The conversation is never persisted. A failed request leaves the
//! conversation as it was apart from the user's own message.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use shared::{AppMode, ChatMessage, ChatRole};
use thiserror::Error;

use crate::config::ChatConfig;
use crate::mock_data::{QUICK_PROMPTS, WELCOME_MESSAGE};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("No API key configured for the chat backend")]
    MissingApiKey,
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Could not read backend response: {0}")]
    MalformedResponse(String),
    #[error("Backend returned no text")]
    EmptyReply,
}

/// What gets sent to the backend for one user turn
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub system_instruction: String,
    pub contents: String,
}

/// A text generation backend. Runs on the browser event loop, so it is not
/// required to be `Send`.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, ChatError>;
}

pub struct ChatService<B: ChatBackend> {
    backend: B,
    system_instruction: String,
}

impl<B: ChatBackend> ChatService<B> {
    pub fn new(backend: B, config: &ChatConfig) -> Self {
        Self {
            backend,
            system_instruction: config.system_instruction.clone(),
        }
    }

    pub fn compose_request(&self, mode: AppMode, text: &str) -> GenerateRequest {
        GenerateRequest {
            system_instruction: self.system_instruction.clone(),
            contents: format!("[Current mode: {} Mode]\n{}", mode, text.trim()),
        }
    }

    /// Ask the backend for a reply to `text`
    pub async fn send_message(&self, mode: AppMode, text: &str) -> Result<String, ChatError> {
        let request = self.compose_request(mode, text);
        debug!("Sending chat message ({} chars) in {} mode", text.len(), mode);

        match self.backend.generate(&request).await {
            Ok(reply) => {
                info!("Chat reply received ({} chars)", reply.len());
                Ok(reply)
            }
            Err(e) => {
                error!("Chat request failed: {}", e);
                Err(e)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    is_loading: bool,
}

impl ChatSession {
    /// New conversation opened by the coach's welcome message
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Model, WELCOME_MESSAGE, now)],
            is_loading: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn quick_prompts(&self) -> &'static [&'static str] {
        &QUICK_PROMPTS
    }

    /// Whether the send button should be enabled for `input`
    pub fn can_send(&self, input: &str) -> bool {
        !input.trim().is_empty() && !self.is_loading
    }

    /// Append the user's message and mark the session as waiting. Blank
    /// input is ignored and returns `None`.
    pub fn push_user(&mut self, text: &str, now: DateTime<Utc>) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, text, now));
        self.is_loading = true;
        self.messages.last()
    }

    pub fn push_reply(&mut self, text: &str, now: DateTime<Utc>) {
        self.messages.push(ChatMessage::new(ChatRole::Model, text, now));
        self.is_loading = false;
    }

    /// Apply the outcome of a request. Errors only clear the loading flag.
    pub fn finish(&mut self, outcome: Result<String, ChatError>, now: DateTime<Utc>) {
        match outcome {
            Ok(reply) => self.push_reply(&reply, now),
            Err(_) => self.is_loading = false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockBackend {
        reply: Result<String, ChatError>,
        seen: RefCell<Vec<GenerateRequest>>,
    }

    impl MockBackend {
        fn replying(reply: Result<String, ChatError>) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatBackend for MockBackend {
        async fn generate(&self, request: &GenerateRequest) -> Result<String, ChatError> {
            self.seen.borrow_mut().push(request.clone());
            self.reply.clone()
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_702_516_122, 0).unwrap()
    }

    #[test]
    fn test_session_starts_with_welcome() {
        let session = ChatSession::new(now());

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, ChatRole::Model);
        assert_eq!(session.messages()[0].text, WELCOME_MESSAGE);
        assert!(!session.is_loading());
        assert_eq!(session.quick_prompts()[1], "Can I spend ₹200?");
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new(now());

        assert!(session.push_user("   ", now()).is_none());
        assert!(!session.can_send(""));
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_user_then_reply() {
        let mut session = ChatSession::new(now());

        let sent = session.push_user("Show predictions", now()).cloned().unwrap();
        assert_eq!(sent.role, ChatRole::User);
        assert!(session.is_loading());
        assert!(!session.can_send("again"));

        session.finish(Ok("Tomorrow looks slow 📉".to_string()), now());
        assert!(!session.is_loading());
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[2].text, "Tomorrow looks slow 📉");
    }

    #[test]
    fn test_failed_request_keeps_conversation() {
        let mut session = ChatSession::new(now());
        session.push_user("Hi", now());

        session.finish(Err(ChatError::Transport("offline".into())), now());

        assert!(!session.is_loading());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.messages()[1].role, ChatRole::User);
    }

    #[tokio::test]
    async fn test_send_message_composes_request() {
        let backend = MockBackend::replying(Ok("Sure!".to_string()));
        let config = ChatConfig {
            system_instruction: "Be kind.".to_string(),
            ..ChatConfig::default()
        };
        let service = ChatService::new(backend, &config);

        let reply = service.send_message(AppMode::Joy, "  Can I spend ₹200? ").await;

        assert_eq!(reply, Ok("Sure!".to_string()));
        let seen = service.backend.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].system_instruction, "Be kind.");
        assert_eq!(seen[0].contents, "[Current mode: Joy Mode]\nCan I spend ₹200?");
    }

    #[tokio::test]
    async fn test_send_message_passes_errors_through() {
        let backend = MockBackend::replying(Err(ChatError::Http {
            status: 403,
            body: "forbidden".into(),
        }));
        let service = ChatService::new(backend, &ChatConfig::default());

        let reply = service.send_message(AppMode::Survival, "Hi").await;

        assert!(matches!(reply, Err(ChatError::Http { status: 403, .. })));
    }
}
