//! Core HTTPS client for the blpapi-http gateway.
//!
//! The [`BlpClient`] struct is the main entry point. It wraps
//! [`reqwest::Client`] with the mutual-TLS identity and trust root installed
//! at construction time, and provides a typed `post` method.
//!
//! Gateway request methods are added to `BlpClient` via `impl` blocks in the
//! [`crate::api`] module.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Certificate, Identity};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::TlsConfig;
use crate::constants::DEFAULT_TIMEOUT_SECS;
use crate::error::{BlpError, Result};

/// HTTPS client authenticated by a mutual-TLS certificate/key pair.
///
/// Construction reads the credential files and builds the TLS identity, so
/// every configuration problem surfaces before the first byte goes out on
/// the wire. Each request is sent exactly once; nothing is retried.
///
/// # Example
///
/// ```no_run
/// use blphttp_rs::client::BlpClient;
/// use blphttp_rs::config::TlsConfig;
///
/// # fn main() -> blphttp_rs::error::Result<()> {
/// let tls = TlsConfig::default().with_trust_root("bloomberg.crt");
/// let client = BlpClient::new("api.example.com", &tls)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BlpClient {
    http: reqwest::Client,
    /// Base URL for gateway requests (`https://{host}`).
    base_url: String,
}

impl BlpClient {
    /// Create a client for the gateway at `host` (hostname or address,
    /// optionally with an explicit port).
    ///
    /// Reads the credential files named by `tls` immediately.
    pub fn new(host: &str, tls: &TlsConfig) -> Result<Self> {
        Self::with_base_url(format!("https://{host}"), tls)
    }

    /// Create a client pointing at a full base URL.
    ///
    /// Useful for testing against a mock gateway on a non-standard port.
    pub fn with_base_url(base_url: impl Into<String>, tls: &TlsConfig) -> Result<Self> {
        let identity = Identity::from_pem(&tls.identity_pem()?).map_err(BlpError::Identity)?;

        let mut builder = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .identity(identity);

        // A supplied trust root is exclusive: the server must chain to it,
        // not merely to something in the system store.
        if let Some(pem) = tls.trust_root_pem()? {
            let root = Certificate::from_pem(&pem).map_err(BlpError::Identity)?;
            builder = builder
                .tls_built_in_root_certs(false)
                .add_root_certificate(root);
        }

        let http = builder.build().map_err(BlpError::Identity)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a POST request with a JSON body and deserialize the response.
    ///
    /// One attempt only: a transport, TLS, or status failure is returned to
    /// the caller, never retried.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let resp = self.http.post(&url).json(body).send().await?;

        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Read a response, returning either the deserialized body or a `BlpError`.
    ///
    /// Uses `bytes()` + `serde_json::from_slice()` to avoid the overhead of
    /// UTF-8 validation that `text()` + `from_str()` would incur.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(BlpError::Json)
        } else {
            Err(BlpError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}
