//! Generation request/response types and the decoded outcome of a submission.

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ClientError, ClientErrorKind, FormError};

/// Shown when a failed response carries no `error` message
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to generate image";

/// Body of `POST /generate`.
///
/// Optional fields are left out entirely when the form has no matching control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_code: Option<String>,
    /// Free-text style, only sent with `style_id == "custom"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_style: Option<String>,
}

/// Diagnostics attached to a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DebugInfo {
    #[serde(deserialize_with = "scalar_as_text")]
    pub time_elapsed: String,
    #[serde(deserialize_with = "scalar_as_text")]
    pub estimated_tokens: String,
}

/// Servers report these as numbers or preformatted strings.
fn scalar_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Body of a 2xx `POST /generate` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateResponse {
    pub image_url: String,
    #[serde(default)]
    pub model_used: String,
    #[serde(default)]
    pub style_used: Option<String>,
    #[serde(default)]
    pub original_prompt: Option<String>,
    #[serde(default)]
    pub final_prompt: Option<String>,
    #[serde(default)]
    pub debug_info: Option<DebugInfo>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// A generation reply decoded at the HTTP boundary.
#[derive(Debug)]
pub enum GenerateOutcome {
    Success(GenerateResponse),
    /// Non-success status, with the server's message or the default one
    Failure(String),
    /// No usable status/body was obtained
    TransportFault(ClientError),
}

/// Decode a reply from `url` that came back with `status` and `body`.
pub fn decode_generate_reply(url: &str, status: StatusCode, body: &str) -> GenerateOutcome {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        log::warn!("Generation request to {} failed with status {}: {}", url, status, message);
        return GenerateOutcome::Failure(message);
    }

    match serde_json::from_str::<GenerateResponse>(body) {
        Ok(response) => GenerateOutcome::Success(response),
        Err(e) => GenerateOutcome::TransportFault(ClientError::new_with_source(
            ClientErrorKind::Format,
            format!(
                "Failed to parse response from {url}. Response: {}",
                truncate(body, 200)
            ),
            e,
        )),
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ─── Request outcome ──────────────────────────────────────────────────────────

/// Where a failed generation broke down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The server answered with a non-success status
    Server,
    /// The request never produced a usable response
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerationFailure {
    pub fn to_error(&self) -> FormError {
        match self.kind {
            FailureKind::Server => FormError::Server(self.message.clone()),
            FailureKind::Transport => FormError::Transport(self.message.clone()),
        }
    }
}

/// State of the most recent submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestOutcome {
    #[default]
    Idle,
    Pending,
    Success(GenerateResponse),
    Failure(GenerationFailure),
}

impl RequestOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestOutcome::Pending)
    }

    pub fn success(&self) -> Option<&GenerateResponse> {
        match self {
            RequestOutcome::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&GenerationFailure> {
        match self {
            RequestOutcome::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<GenerateOutcome> for RequestOutcome {
    fn from(outcome: GenerateOutcome) -> Self {
        match outcome {
            GenerateOutcome::Success(response) => RequestOutcome::Success(response),
            GenerateOutcome::Failure(message) => RequestOutcome::Failure(GenerationFailure {
                kind: FailureKind::Server,
                message,
            }),
            GenerateOutcome::TransportFault(fault) => RequestOutcome::Failure(GenerationFailure {
                kind: FailureKind::Transport,
                message: fault.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://127.0.0.1:5000/generate";

    #[test]
    fn test_request_omits_absent_fields() {
        let request = GenerateRequest {
            prompt: "a cat".into(),
            model_id: Some("model_2".into()),
            style_id: Some("s1".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"prompt": "a cat", "model_id": "model_2", "style_id": "s1"})
        );
    }

    #[test]
    fn test_decode_success() {
        let body = r#"{"image_url":"/img/1.png","model_used":"B","style_used":"Sketch","final_prompt":"a cat, sketch style"}"#;
        let GenerateOutcome::Success(response) = decode_generate_reply(URL, StatusCode::OK, body) else {
            panic!("expected success");
        };
        assert_eq!(response.image_url, "/img/1.png");
        assert_eq!(response.model_used, "B");
        assert_eq!(response.style_used.as_deref(), Some("Sketch"));
        assert_eq!(response.final_prompt.as_deref(), Some("a cat, sketch style"));
        assert!(response.debug_info.is_none());
    }

    #[test]
    fn test_decode_debug_info_numbers_and_strings() {
        let body = r#"{"image_url":"u","model_used":"B","debug_info":{"time_elapsed":"2.41s","estimated_tokens":57}}"#;
        let GenerateOutcome::Success(response) = decode_generate_reply(URL, StatusCode::OK, body) else {
            panic!("expected success");
        };
        let debug = response.debug_info.unwrap();
        assert_eq!(debug.time_elapsed, "2.41s");
        assert_eq!(debug.estimated_tokens, "57");
    }

    #[test]
    fn test_decode_server_error_message() {
        let outcome = decode_generate_reply(URL, StatusCode::BAD_REQUEST, r#"{"error":"bad prompt"}"#);
        assert!(matches!(outcome, GenerateOutcome::Failure(ref m) if m == "bad prompt"));
    }

    #[test]
    fn test_decode_error_without_message_uses_default() {
        for body in [r#"{}"#, r#"{"error":""}"#, "<html>Bad Gateway</html>"] {
            let outcome = decode_generate_reply(URL, StatusCode::BAD_GATEWAY, body);
            assert!(matches!(outcome, GenerateOutcome::Failure(ref m) if m == DEFAULT_FAILURE_MESSAGE));
        }
    }

    #[test]
    fn test_decode_malformed_success_is_transport_fault() {
        let outcome = decode_generate_reply(URL, StatusCode::OK, r#"{"model_used":"B"}"#);
        let GenerateOutcome::TransportFault(fault) = outcome else {
            panic!("expected transport fault");
        };
        assert_eq!(fault.kind(), ClientErrorKind::Format);
        assert!(fault.message().starts_with("Failed to parse response from"));
    }

    #[test]
    fn test_outcome_conversion() {
        let outcome = RequestOutcome::from(GenerateOutcome::Failure("bad prompt".into()));
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::Server);
        assert!(matches!(failure.to_error(), FormError::Server(ref m) if m == "bad prompt"));

        let fault = ClientError::new(ClientErrorKind::Network, "connection refused");
        let outcome = RequestOutcome::from(GenerateOutcome::TransportFault(fault));
        assert_eq!(outcome.failure().unwrap().kind, FailureKind::Transport);
        assert_eq!(outcome.failure().unwrap().message, "connection refused");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 200), "hi");
    }
}
