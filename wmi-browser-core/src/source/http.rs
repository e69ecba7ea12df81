//! HTTP data source
//!
//! A single `GET base_url + resource_path` returning a JSON array of
//! records. No query parameters, pagination or authentication.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::{CoreError, CoreResult};
use crate::types::WmiRecord;
use crate::utils::log_sanitizer::preview_body;

use super::WmiSource;

/// Default endpoint base (local development server)
pub const DEFAULT_BASE_URL: &str = "https://localhost:5001/";
/// Default resource path appended to the base
pub const DEFAULT_RESOURCE_PATH: &str = "wmi";

/// Where and how to fetch the record list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub base_url: String,
    pub resource_path: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Accept self-signed certificates (development servers)
    pub accept_invalid_certs: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
            timeout: None,
            accept_invalid_certs: false,
        }
    }
}

impl SourceConfig {
    /// Join base and resource path with exactly one `/` between them.
    pub fn endpoint(&self) -> CoreResult<Url> {
        let base = self.base_url.trim_end_matches('/');
        let path = self.resource_path.trim_start_matches('/');
        let joined = if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        };

        Url::parse(&joined).map_err(|e| CoreError::Config(format!("invalid URL {joined:?}: {e}")))
    }
}

/// Decode a response body into records
pub fn parse_records(body: &str) -> CoreResult<Vec<WmiRecord>> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("[wmi] JSON parse failed: {e}");
        log::error!("[wmi] Raw response: {}", preview_body(body));
        CoreError::Parse(e.to_string())
    })
}

/// [`WmiSource`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpWmiSource {
    client: Client,
    endpoint: Url,
}

impl HttpWmiSource {
    pub fn new(config: &SourceConfig) -> CoreResult<Self> {
        let endpoint = config.endpoint()?;

        let mut builder = Client::builder();
        // Without a TLS backend only http:// endpoints work and there are no certificates
        #[cfg(any(feature = "rustls", feature = "native-tls"))]
        {
            builder = builder.danger_accept_invalid_certs(config.accept_invalid_certs);
        }
        #[cfg(not(any(feature = "rustls", feature = "native-tls")))]
        {
            if config.accept_invalid_certs {
                log::warn!("[wmi] built without TLS support, ignoring accept_invalid_certs");
            }
        }
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CoreError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl WmiSource for HttpWmiSource {
    async fn load_all(&self) -> CoreResult<Vec<WmiRecord>> {
        let url = self.endpoint.as_str();
        log::debug!("[wmi] GET {url}");

        let response = self.client.get(self.endpoint.clone()).send().await.map_err(|e| {
            log::warn!("[wmi] request to {url} failed: {e}");
            if e.is_timeout() {
                CoreError::Timeout(e.to_string())
            } else {
                CoreError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        log::debug!("[wmi] Response Status: {}", status.as_u16());
        if !status.is_success() {
            log::warn!("[wmi] {url} answered HTTP {}", status.as_u16());
            return Err(CoreError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CoreError::Timeout(e.to_string())
            } else {
                CoreError::Network(format!("Failed to read response body: {e}"))
            }
        })?;
        log::debug!("[wmi] Response Body: {}", preview_body(&body));

        let records = parse_records(&body)?;
        log::info!("[wmi] loaded {} records from {url}", records.len());
        Ok(records)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}
