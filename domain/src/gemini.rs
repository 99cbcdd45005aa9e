//! Request and response shapes for the Gemini `generateContent` endpoint.
//!
//! The HTTP call itself lives in the frontend; this module only builds the
//! URL and body and pulls the reply text back out, so both halves can be
//! tested without a network.
//!
//! The generateContent body uses snake_case `system_instruction`.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::chat_service::{ChatError, GenerateRequest};
use crate::config::ChatConfig;

/// `{api_base}/models/{model}:generateContent?key={api_key}`
pub fn endpoint_url(config: &ChatConfig) -> Result<String, ChatError> {
    let api_key = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or(ChatError::MissingApiKey)?;

    Ok(format!(
        "{}/models/{}:generateContent?key={}",
        config.api_base.trim_end_matches('/'),
        config.model,
        api_key
    ))
}

fn text_part(text: &str) -> Value {
    json!({ "text": text })
}

pub fn build_request_body(request: &GenerateRequest) -> Value {
    json!({
        "system_instruction": {
            "parts": [text_part(&request.system_instruction)]
        },
        "contents": [{
            "role": "user",
            "parts": [text_part(&request.contents)]
        }]
    })
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Concatenated text of the first candidate's parts
pub fn extract_reply_text(body: &str) -> Result<String, ChatError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(ChatError::EmptyReply);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            system_instruction: "You are a coach.".to_string(),
            contents: "Can I spend ₹200?".to_string(),
        }
    }

    #[test]
    fn builds_request_with_system_instruction() {
        let body = build_request_body(&request());

        assert_eq!(body["system_instruction"]["parts"][0]["text"], "You are a coach.");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Can I spend ₹200?");
        assert_eq!(body["contents"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn endpoint_includes_model_and_key() {
        let config = ChatConfig {
            api_base: "https://example.test/v1beta/".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: Some("k123".to_string()),
            ..ChatConfig::default()
        };

        assert_eq!(
            endpoint_url(&config).unwrap(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent?key=k123"
        );
    }

    #[test]
    fn endpoint_requires_api_key() {
        let mut config = ChatConfig::default();
        assert_eq!(endpoint_url(&config), Err(ChatError::MissingApiKey));

        config.api_key = Some("  ".to_string());
        assert_eq!(endpoint_url(&config), Err(ChatError::MissingApiKey));
    }

    #[test]
    fn extracts_and_joins_parts() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Yes, "}, {"text": "go ahead 👍"}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }"#;

        assert_eq!(extract_reply_text(body).unwrap(), "Yes, go ahead 👍");
    }

    #[test]
    fn empty_or_malformed_replies_are_errors() {
        assert_eq!(extract_reply_text(r#"{"candidates": []}"#), Err(ChatError::EmptyReply));
        assert_eq!(
            extract_reply_text(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#),
            Err(ChatError::EmptyReply)
        );
        assert!(matches!(
            extract_reply_text("not json"),
            Err(ChatError::MalformedResponse(_))
        ));
    }
}
