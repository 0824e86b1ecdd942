//! Authenticated gateway operations
//!
//! This module provides [`FissionUser`], a session that attaches basic-auth
//! credentials to every request. Uploads are checked against the configured
//! content-length ceiling before any bytes are sent; an oversized payload
//! fails with [`Error::SizeLimit`] carrying a ready-to-display diagnostic.

use bytes::Bytes;
use reqwest::RequestBuilder;
use tracing::{debug, instrument, warn};
use url::Url;

use super::{FissionClient, FissionCredentials, OCTET_STREAM};
use crate::error::FileSizeError;
use crate::types::{Cid, Content};
use crate::{Error, Result, TRACING_TARGET_OPERATIONS};

/// Authenticated session against the Fission gateway.
///
/// Created via [`FissionClient::login`]. Also exposes the anonymous read
/// operations, delegated to the underlying client.
#[derive(Debug, Clone)]
pub struct FissionUser {
    client: FissionClient,
    credentials: FissionCredentials,
}

impl FissionUser {
    pub(crate) fn new(client: FissionClient, credentials: FissionCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Returns the underlying anonymous client.
    pub fn client(&self) -> &FissionClient {
        &self.client
    }

    /// Returns the account username.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Attaches basic-auth credentials to a request.
    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(self.credentials.username(), Some(self.credentials.password()))
    }

    /// Fetches the content stored under the given CID.
    pub async fn content(&self, cid: &Cid) -> Result<Content> {
        self.client.content(cid).await
    }

    /// Returns the gateway URL serving the given CID.
    pub fn url(&self, cid: &Cid) -> Result<Url> {
        self.client.url(cid)
    }

    /// Lists the CIDs associated with this account.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS, fields(username = %self.credentials.username()))]
    pub async fn cids(&self) -> Result<Vec<Cid>> {
        let url = self.client.endpoint("ipfs/cids")?;

        let response = self.authed(self.client.http().get(url)).send().await?;
        let response = FissionClient::check(response).await?;

        Ok(response.json().await?)
    }

    /// Adds JSON content to the gateway, returning its CID.
    ///
    /// The size ceiling applies to the serialized form. An optional `name`
    /// labels the upload on the gateway.
    pub async fn add(&self, content: &Content, name: Option<&str>) -> Result<Cid> {
        let bytes = Bytes::from(serde_json::to_vec(content)?);
        self.add_bytes(bytes, name).await
    }

    /// Adds raw bytes to the gateway, returning their CID.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::SizeLimit`] before sending anything when the
    /// payload exceeds the configured `max_content_length`; any other
    /// transport failure is propagated unmodified.
    #[instrument(skip(self, bytes), target = TRACING_TARGET_OPERATIONS, fields(size = bytes.len()))]
    pub async fn add_bytes(&self, bytes: Bytes, name: Option<&str>) -> Result<Cid> {
        let size = bytes.len() as u64;
        let max = self.client.config().max_content_length;

        if size > max {
            warn!(
                target: TRACING_TARGET_OPERATIONS,
                size,
                max,
                "Upload exceeds configured max content length"
            );
            return Err(Error::SizeLimit(FileSizeError::new(size, Some(max))));
        }

        let mut url = self.client.endpoint("ipfs")?;
        if let Some(name) = name {
            url.query_pairs_mut().append_pair("name", name);
        }

        debug!(target: TRACING_TARGET_OPERATIONS, %url, size, "Uploading content");

        let request = self
            .client
            .http()
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, OCTET_STREAM)
            .body(bytes);
        let response = self.authed(request).send().await?;
        let response = FissionClient::check(response).await?;

        Ok(response.json().await?)
    }

    /// Removes the content stored under the given CID from this account.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS, fields(cid = %cid))]
    pub async fn remove(&self, cid: &Cid) -> Result<()> {
        let url = self.client.url(cid)?;

        let response = self.authed(self.client.http().delete(url)).send().await?;
        FissionClient::check(response).await?;

        Ok(())
    }

    /// Pins the content stored under the given CID to this account.
    #[instrument(skip(self), target = TRACING_TARGET_OPERATIONS, fields(cid = %cid))]
    pub async fn pin(&self, cid: &Cid) -> Result<()> {
        let url = self.client.url(cid)?;

        let request = self.client.http().put(url).json(&serde_json::json!({}));
        let response = self.authed(request).send().await?;
        FissionClient::check(response).await?;

        Ok(())
    }
}
