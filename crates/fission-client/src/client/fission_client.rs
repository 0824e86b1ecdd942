//! Fission client implementation
//!
//! This module provides the anonymous client interface for the Fission
//! gateway. It handles connection pooling, request routing, and response
//! decoding; authenticated operations live on [`FissionUser`].

use std::sync::Arc;

use reqwest::{Client as HttpClient, ClientBuilder, Response};
use tracing::{debug, error, info, instrument};
use url::Url;

use super::{FissionConfig, FissionCredentials, FissionUser, OCTET_STREAM};
use crate::types::{Cid, Content};
use crate::{Error, Result, TRACING_TARGET_CLIENT};

/// Inner client that holds the HTTP client and configuration.
struct FissionClientInner {
    http: HttpClient,
    config: FissionConfig,
}

/// Anonymous client for the Fission gateway.
///
/// Cloning is cheap: the HTTP connection pool and configuration are shared.
///
/// # Examples
///
/// ```rust
/// use fission_client::{Cid, FissionClient, FissionConfig};
///
/// # fn example() -> fission_client::Result<()> {
/// let client = FissionClient::new(FissionConfig::default())?;
///
/// let cid = Cid::new("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
/// let url = client.url(&cid)?;
/// assert_eq!(url.path(), "/ipfs/QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FissionClient {
    inner: Arc<FissionClientInner>,
}

impl std::fmt::Debug for FissionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FissionClient")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl FissionClient {
    /// Creates a new Fission client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: FissionConfig) -> Result<Self> {
        debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis(),
            "Creating Fission client"
        );

        let http = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        let inner = FissionClientInner { http, config };
        let client = Self {
            inner: Arc::new(inner),
        };

        info!(
            target: TRACING_TARGET_CLIENT,
            "Fission client created successfully"
        );

        Ok(client)
    }

    /// Creates a new Fission client with default configuration against the
    /// given gateway URL.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Result<Self> {
        let config = FissionConfig::builder()
            .with_base_url(base_url.as_ref())?
            .build()
            .map_err(|e| Error::invalid_config(e.to_string()))?;

        Self::new(config)
    }

    /// Gets the client configuration.
    pub fn config(&self) -> &FissionConfig {
        &self.inner.config
    }

    /// Gets the underlying HTTP client.
    pub(crate) fn http(&self) -> &HttpClient {
        &self.inner.http
    }

    /// Resolves a path against the configured gateway base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        self.inner.config.base_url.join(path).map_err(|e| {
            Error::invalid_config(format!("Invalid request URL '{}': {}", path, e))
        })
    }

    /// Returns the gateway URL serving the given CID.
    pub fn url(&self, cid: &Cid) -> Result<Url> {
        self.endpoint(&format!("ipfs/{}", cid))
    }

    /// Fetches the content stored under the given CID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the gateway responds with a
    /// non-success status, or the body is not valid JSON.
    #[instrument(skip(self), target = TRACING_TARGET_CLIENT, fields(cid = %cid))]
    pub async fn content(&self, cid: &Cid) -> Result<Content> {
        let url = self.url(cid)?;

        debug!(target: TRACING_TARGET_CLIENT, %url, "Fetching content");

        let response = self
            .inner
            .http
            .get(url)
            .header(reqwest::header::CONTENT_TYPE, OCTET_STREAM)
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// Opens an authenticated session for the given account.
    pub fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> FissionUser {
        FissionUser::new(self.clone(), FissionCredentials::new(username, password))
    }

    /// Maps a non-success gateway response to [`Error::Api`].
    pub(crate) async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error!(
            target: TRACING_TARGET_CLIENT,
            status = status.as_u16(),
            message,
            "Gateway request failed"
        );

        Err(Error::api_error(status.as_u16(), message))
    }
}
