//! Sources of the identity provider's JSON Web Key Set.
//!
//! Production uses [`RemoteKeySource`], which fetches the published key set
//! on every verification. [`StaticKeySource`] serves a fixed in-memory set
//! and backs the test suites.

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::jwk::JwkSet;

use super::AuthError;

/// Timeout for a single key set fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Provides the signing keys used to verify access tokens.
#[async_trait]
pub trait KeySource: Send + Sync {
    async fn key_set(&self) -> Result<JwkSet, AuthError>;
}

/// Key set fetched over HTTP from the issuer's `jwks.json` endpoint.
#[derive(Debug, Clone)]
pub struct RemoteKeySource {
    url: String,
    client: reqwest::Client,
}

impl RemoteKeySource {
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self::with_client(url, client))
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl KeySource for RemoteKeySource {
    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(format!("invalid key set: {e}")))
    }
}

/// A fixed, in-memory key set.
#[derive(Debug, Clone)]
pub struct StaticKeySource(JwkSet);

impl StaticKeySource {
    pub fn new(keys: JwkSet) -> Self {
        Self(keys)
    }
}

#[async_trait]
impl KeySource for StaticKeySource {
    async fn key_set(&self) -> Result<JwkSet, AuthError> {
        Ok(self.0.clone())
    }
}
