//! Image Client - HTTP boundary to the generation server
//!
//! Two endpoints are used:
//!
//!   GET  /config    → catalog of models and styles
//!   POST /generate  → one image for a prompt + model + style
//!
//! Replies are decoded here into [`Catalog`] and [`GenerateOutcome`] so the
//! form never sees raw HTTP.

use futures::future::BoxFuture;
use url::Url;

use crate::catalog::Catalog;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientErrorKind};
use crate::generation::{decode_generate_reply, GenerateOutcome, GenerateRequest};

/// The server as seen by the form.
///
/// [`ImageGenClient`] talks HTTP; tests substitute an in-memory backend.
pub trait ImageGenBackend {
    /// `GET /config`
    fn fetch_config(&self) -> BoxFuture<'_, Result<Catalog, ClientError>>;

    /// `POST /generate`. Every failure mode is folded into the outcome.
    fn generate(&self, request: GenerateRequest) -> BoxFuture<'_, GenerateOutcome>;
}

/// reqwest-backed [`ImageGenBackend`].
///
/// ## Example
///
/// ```rust,no_run
/// # use canvas_data::{ClientConfig, ImageGenClient};
/// let client = ImageGenClient::new(&ClientConfig::new("http://127.0.0.1:5000"))?;
/// assert_eq!(client.generate_url().as_str(), "http://127.0.0.1:5000/generate");
/// # Ok::<(), canvas_data::ClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ImageGenClient {
    config_url: Url,
    generate_url: Url,
    client: reqwest::Client,
}

impl ImageGenClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                ClientError::new_with_source(
                    ClientErrorKind::Config,
                    "Could not initialise the HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            config_url: config.endpoint("config")?,
            generate_url: config.endpoint("generate")?,
            client,
        })
    }

    pub fn config_url(&self) -> &Url {
        &self.config_url
    }

    pub fn generate_url(&self) -> &Url {
        &self.generate_url
    }

    async fn load_catalog(&self) -> Result<Catalog, ClientError> {
        let url = self.config_url.as_str();
        log::debug!("Fetching catalog from {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            ClientError::new_with_source(
                ClientErrorKind::Network,
                format!("Could not send request to {url}. Verify your connection and the server status."),
                e,
            )
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            ClientError::new_with_source(
                ClientErrorKind::Network,
                format!("Could not read the response from {url}."),
                e,
            )
        })?;

        if !status.is_success() {
            return Err(ClientError::new(
                ClientErrorKind::Response,
                format!("Request to {url} failed with status {status}"),
            ));
        }

        serde_json::from_str(&text).map_err(|e| {
            ClientError::new_with_source(
                ClientErrorKind::Format,
                format!("Failed to parse configuration from {url}."),
                e,
            )
        })
    }

    async fn send_generate(&self, request: GenerateRequest) -> GenerateOutcome {
        let url = self.generate_url.as_str();
        log::debug!(
            "Image generation request to {}: model={:?}, style={:?}",
            url,
            request.model_id,
            request.style_id
        );

        let response = match self.client.post(url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                return GenerateOutcome::TransportFault(ClientError::new_with_source(
                    ClientErrorKind::Network,
                    format!("Could not send request to {url}. Verify your connection and the server status."),
                    e,
                ))
            }
        };

        let status = response.status();
        match response.text().await {
            Ok(text) => decode_generate_reply(url, status, &text),
            Err(e) => GenerateOutcome::TransportFault(ClientError::new_with_source(
                ClientErrorKind::Network,
                format!("Could not read the response from {url}."),
                e,
            )),
        }
    }
}

impl ImageGenBackend for ImageGenClient {
    fn fetch_config(&self) -> BoxFuture<'_, Result<Catalog, ClientError>> {
        Box::pin(self.load_catalog())
    }

    fn generate(&self, request: GenerateRequest) -> BoxFuture<'_, GenerateOutcome> {
        Box::pin(self.send_generate(request))
    }
}
