//! Error types for the HTTP boundary and the generate form.

/// Broad classification of a failed exchange with the generation server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    /// The request could not be sent or the response could not be read
    Network,
    /// The server answered with a non-success status
    Response,
    /// The response body did not match the expected shape
    Format,
    /// The client itself is misconfigured (bad URL, TLS backend, ...)
    Config,
}

/// Error raised by [`crate::ImageGenClient`] and other backends.
///
/// The message is meant to be shown to the user as-is; the source (when
/// present) carries the underlying transport or decoding fault for logs.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    kind: ClientErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ClientError {
    pub fn new(kind: ClientErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn new_with_source<E>(kind: ClientErrorKind, message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn kind(&self) -> ClientErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Everything that can go wrong while loading the catalog or submitting the form.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[source] ClientError),
    #[error("Prompt is empty")]
    Validation,
    #[error("A generation request is already in flight")]
    SubmitInFlight,
    #[error("Server rejected the request: {0}")]
    Server(String),
    #[error("Request failed: {0}")]
    Transport(String),
}

impl FormError {
    /// Returns the text shown on the user-facing channel (alert or error panel)
    pub fn user_message(&self) -> String {
        match self {
            FormError::ConfigLoad(_) => {
                "Failed to load configuration. Is the server running?".to_string()
            }
            FormError::Validation => "Please enter a prompt first.".to_string(),
            FormError::SubmitInFlight => {
                "Please wait for the current image to finish.".to_string()
            }
            FormError::Server(msg) | FormError::Transport(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_client_error_display_is_message() {
        let err = ClientError::new(ClientErrorKind::Format, "bad body");
        assert_eq!(err.to_string(), "bad body");
        assert_eq!(err.kind(), ClientErrorKind::Format);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_client_error_keeps_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientError::new_with_source(ClientErrorKind::Format, "bad body", parse);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_user_messages() {
        let load = FormError::ConfigLoad(ClientError::new(ClientErrorKind::Network, "down"));
        assert_eq!(
            load.user_message(),
            "Failed to load configuration. Is the server running?"
        );
        assert_eq!(FormError::Validation.user_message(), "Please enter a prompt first.");
        assert_eq!(FormError::Server("bad prompt".into()).user_message(), "bad prompt");
    }
}
