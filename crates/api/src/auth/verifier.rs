//! Access-token verification against the issuer's published signing keys.
//!
//! A token is accepted only when its header names a key (`kid`) present in
//! the issuer's key set, its signature verifies with that key under one of
//! the configured algorithms, and its `aud`, `iss` and `exp` claims check
//! out.

use std::str::FromStr;
use std::sync::Arc;

use axum::http::HeaderValue;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use super::header::bearer_token;
use super::jwks::KeySource;
use super::{AuthError, Claims};

/// Identity provider settings.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issuer domain, e.g. `agency.eu.auth0.com`.
    pub domain: String,
    /// Expected `aud` claim.
    pub audience: String,
    /// Accepted signing algorithms.
    pub algorithms: Vec<Algorithm>,
    /// Where the key set is published.
    pub jwks_url: String,
    /// Report the precise auth failure instead of a generic 401.
    pub expose_errors: bool,
}

impl AuthConfig {
    /// Load identity provider settings from environment variables.
    ///
    /// | Env Var              | Required | Default                                  |
    /// |----------------------|----------|------------------------------------------|
    /// | `AUTH0_DOMAIN`       | **yes**  | --                                       |
    /// | `AUTH0_API_AUDIENCE` | **yes**  | --                                       |
    /// | `AUTH0_ALGORITHMS`   | no       | `RS256`                                  |
    /// | `AUTH0_JWKS_URL`     | no       | `https://{domain}/.well-known/jwks.json` |
    /// | `AUTH_EXPOSE_ERRORS` | no       | `false`                                  |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing or an algorithm is unknown.
    pub fn from_env() -> Self {
        let domain = std::env::var("AUTH0_DOMAIN").expect("AUTH0_DOMAIN must be set");
        assert!(!domain.is_empty(), "AUTH0_DOMAIN must not be empty");

        let audience =
            std::env::var("AUTH0_API_AUDIENCE").expect("AUTH0_API_AUDIENCE must be set");

        let algorithms = parse_algorithms(
            &std::env::var("AUTH0_ALGORITHMS").unwrap_or_else(|_| "RS256".into()),
        )
        .unwrap_or_else(|e| panic!("AUTH0_ALGORITHMS is invalid: {e}"));

        let jwks_url = std::env::var("AUTH0_JWKS_URL")
            .unwrap_or_else(|_| format!("https://{domain}/.well-known/jwks.json"));

        let expose_errors = std::env::var("AUTH_EXPOSE_ERRORS")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Self {
            domain,
            audience,
            algorithms,
            jwks_url,
            expose_errors,
        }
    }

    /// Expected `iss` claim. Auth0 issuers carry a trailing slash.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }
}

/// Parse a comma-separated algorithm list such as `"RS256,RS384"`.
pub fn parse_algorithms(raw: &str) -> Result<Vec<Algorithm>, String> {
    let algorithms = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Algorithm::from_str(s).map_err(|_| format!("unknown algorithm '{s}'")))
        .collect::<Result<Vec<_>, _>>()?;

    if algorithms.is_empty() {
        return Err("at least one algorithm is required".into());
    }
    Ok(algorithms)
}

/// Verifies bearer tokens and returns their claims.
pub struct TokenVerifier {
    keys: Arc<dyn KeySource>,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &AuthConfig, keys: Arc<dyn KeySource>) -> Self {
        let mut validation =
            Validation::new(config.algorithms.first().copied().unwrap_or(Algorithm::RS256));
        validation.algorithms = config.algorithms.clone();
        validation.set_audience(&[config.audience.as_str()]);
        validation.set_issuer(&[config.issuer()]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);
        // A token is expired the second `exp` passes.
        validation.leeway = 0;

        Self { keys, validation }
    }

    /// Verify the token carried by an `Authorization` header value.
    pub async fn verify(&self, header: Option<&HeaderValue>) -> Result<Claims, AuthError> {
        let token = bearer_token(header)?;
        self.verify_token(token).await
    }

    /// Verify a raw compact-serialized token.
    pub async fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token)
            .map_err(|_| AuthError::InvalidHeader("Authorization malformed."))?;
        let kid = header
            .kid
            .ok_or(AuthError::InvalidHeader("Authorization malformed."))?;

        let key_set = self.keys.key_set().await?;
        let jwk = key_set
            .find(&kid)
            .ok_or(AuthError::InvalidHeader("Unable to find the appropriate key."))?;
        let key = DecodingKey::from_jwk(jwk)
            .map_err(|_| AuthError::InvalidHeader("Unable to parse authentication token."))?;

        let data = decode::<Claims>(token, &key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, kid = %kid, "Token rejected");
            classify(e.kind())
        })?;
        Ok(data.claims)
    }
}

fn classify(kind: &ErrorKind) -> AuthError {
    match kind {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => {
            AuthError::InvalidClaims
        }
        _ => AuthError::InvalidHeader("Unable to parse authentication token."),
    }
}
