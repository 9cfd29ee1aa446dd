//! Client configuration: where the generation server lives and how to talk to it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ClientError, ClientErrorKind};

pub const ENV_SERVER_URL: &str = "CANVAS_SERVER_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "CANVAS_REQUEST_TIMEOUT_SECS";
pub const ENV_DEFAULT_MODEL: &str = "CANVAS_DEFAULT_MODEL";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL serving `/config` and `/generate`
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Transport timeout; image generation can take minutes
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Model selected on load when the catalog offers it
    #[serde(default = "default_model_id")]
    pub default_model_id: String,
}

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    600
}

fn default_model_id() -> String {
    "model_2".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
            default_model_id: default_model_id(),
        }
    }
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ClientError> {
        serde_json::from_str(json).map_err(|e| {
            ClientError::new_with_source(ClientErrorKind::Config, "Invalid client configuration", e)
        })
    }

    /// Defaults overlaid with `CANVAS_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_SERVER_URL).filter(|v| !v.trim().is_empty()) {
            self.server_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(e) => log::warn!(
                    "ClientConfig: ignoring {}={:?}: {}",
                    ENV_REQUEST_TIMEOUT_SECS,
                    raw,
                    e
                ),
            }
        }
        if let Some(model) = lookup(ENV_DEFAULT_MODEL).filter(|v| !v.trim().is_empty()) {
            self.default_model_id = model.trim().to_string();
        }
        self
    }

    /// Resolve an endpoint path against `server_url`.
    ///
    /// The base is treated as a directory, so `http://host/app` + `config`
    /// gives `http://host/app/config`.
    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        let mut base = Url::parse(&self.server_url).map_err(|e| {
            ClientError::new_with_source(
                ClientErrorKind::Config,
                format!("Invalid server URL: {}", self.server_url),
                e,
            )
        })?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        base.join(path.trim_start_matches('/')).map_err(|e| {
            ClientError::new_with_source(
                ClientErrorKind::Config,
                format!("Invalid endpoint path: {}", path),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_from_partial_json() {
        let config = ClientConfig::from_json_str(r#"{"server_url":"http://gen.local:8000"}"#).unwrap();
        assert_eq!(config.server_url, "http://gen.local:8000");
        assert_eq!(config.request_timeout_secs, 600);
        assert_eq!(config.default_model_id, "model_2");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ClientConfig::from_json_str("{").unwrap_err();
        assert_eq!(err.kind(), ClientErrorKind::Config);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_SERVER_URL, " http://10.0.0.2:5000 "),
            (ENV_REQUEST_TIMEOUT_SECS, "not-a-number"),
            (ENV_DEFAULT_MODEL, "model_1"),
        ]
        .into_iter()
        .collect();
        let config = ClientConfig::default().with_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.server_url, "http://10.0.0.2:5000");
        assert_eq!(config.request_timeout_secs, 600);
        assert_eq!(config.default_model_id, "model_1");
    }

    #[test]
    fn test_endpoint_joining() {
        let config = ClientConfig::new("http://127.0.0.1:5000");
        assert_eq!(config.endpoint("config").unwrap().as_str(), "http://127.0.0.1:5000/config");

        let config = ClientConfig::new("https://example.com/canvas");
        assert_eq!(
            config.endpoint("/generate").unwrap().as_str(),
            "https://example.com/canvas/generate"
        );
    }

    #[test]
    fn test_endpoint_rejects_bad_base() {
        let err = ClientConfig::new("not a url").endpoint("config").unwrap_err();
        assert_eq!(err.kind(), ClientErrorKind::Config);
    }
}
