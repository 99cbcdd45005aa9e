use async_trait::async_trait;
use gloo::net::http::Request;
use steady_domain::gemini::{build_request_body, endpoint_url, extract_reply_text};
use steady_domain::{ChatBackend, ChatConfig, ChatError, GenerateRequest};

/// Gemini `generateContent` client over the browser fetch API
#[derive(Clone)]
pub struct GeminiClient {
    config: ChatConfig,
}

impl GeminiClient {
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl ChatBackend for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, ChatError> {
        let url = endpoint_url(&self.config)?;
        let body = build_request_body(request);

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ChatError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(ChatError::Http {
                status: response.status(),
                body: text,
            });
        }

        extract_reply_text(&text)
    }
}
