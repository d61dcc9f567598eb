//! HTTP client for the NGO backend's REST endpoints.
//!
//! [`ApiClient`] is constructed once at setup time and cloned into every
//! resource client; there is no process-wide instance. No retries and no
//! timeouts beyond the transport defaults.

use myron_core::image::resolve_image_url;
use myron_core::resource::{FormValue, Payload};

use crate::config::ClientConfig;

/// Errors from the REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never reached the server or no response came back
    /// (connection, DNS, TLS, body decoding, ...).
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Shared HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with a fresh connection pool.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: format!("{}/", base_url.trim_end_matches('/')),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolve an image path returned by the backend for display.
    pub fn image_url(&self, path: &str) -> String {
        resolve_image_url(&self.base_url, path)
    }

    /// `GET path`, returning the decoded JSON body.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        Self::parse_response(response).await
    }

    /// `POST path` with the given payload.
    pub async fn post(&self, path: &str, payload: &Payload) -> Result<(), ApiError> {
        let request = self.client.post(self.endpoint(path));
        let response = Self::with_payload(request, payload)?.send().await?;
        Self::check_status(response).await
    }

    /// `PATCH path` with the given payload (partial update).
    pub async fn patch(&self, path: &str, payload: &Payload) -> Result<(), ApiError> {
        let request = self.client.patch(self.endpoint(path));
        let response = Self::with_payload(request, payload)?.send().await?;
        Self::check_status(response).await
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.client.delete(self.endpoint(path)).send().await?;
        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Attach a JSON or multipart body.
    fn with_payload(
        request: reqwest::RequestBuilder,
        payload: &Payload,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        match payload {
            Payload::Json(body) => Ok(request.json(body)),
            Payload::Multipart(parts) => {
                let mut form = reqwest::multipart::Form::new();
                for part in parts {
                    form = match &part.value {
                        FormValue::Text(text) => form.text(part.name, text.clone()),
                        FormValue::File(upload) => {
                            let file = reqwest::multipart::Part::bytes(upload.bytes.clone())
                                .file_name(upload.file_name.clone())
                                .mime_str(upload.content_type())?;
                            form.part(part.name, file)
                        }
                    };
                }
                Ok(request.multipart(form))
            }
        }
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Server`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Read a successful body as JSON. A body that is not JSON is returned
    /// as `Value::Null` so envelope handling can treat it as empty.
    async fn parse_response(response: reqwest::Response) -> Result<serde_json::Value, ApiError> {
        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Response body is not JSON");
            serde_json::Value::Null
        }))
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
