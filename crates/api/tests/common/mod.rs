#![allow(dead_code)]

use std::sync::Arc;

use agency_api::auth::jwks::StaticKeySource;
use agency_api::auth::{AuthConfig, TokenVerifier};
use agency_api::config::ServerConfig;
use agency_api::router::{build_app_router, App};
use agency_api::state::AppState;
use agency_core::roles::permissions_for_role;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

pub const SIGNING_KEY: &str = include_str!("../fixtures/signing_key.pem");
pub const FOREIGN_KEY: &str = include_str!("../fixtures/foreign_signing_key.pem");
pub const JWKS: &str = include_str!("../fixtures/jwks.json");
pub const KID: &str = "test-key";

pub const DOMAIN: &str = "agency.test";
pub const AUDIENCE: &str = "casting";

/// Build a test `AuthConfig` whose issuer matches [`mint_token`].
pub fn test_auth_config(expose_errors: bool) -> AuthConfig {
    AuthConfig {
        domain: DOMAIN.to_string(),
        audience: AUDIENCE.to_string(),
        algorithms: vec![Algorithm::RS256],
        jwks_url: format!("https://{DOMAIN}/.well-known/jwks.json"),
        expose_errors,
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        base_path: String::new(),
        request_timeout_secs: 30,
        auth: test_auth_config(false),
    }
}

/// Build the full application with the production middleware stack, the
/// given database pool and configuration, and the fixture key set.
pub fn build_app_with(pool: PgPool, config: ServerConfig) -> App {
    let keys: JwkSet = serde_json::from_str(JWKS).expect("fixture key set parses");
    let verifier = TokenVerifier::new(&config.auth, Arc::new(StaticKeySource::new(keys)));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        verifier: Arc::new(verifier),
    };
    build_app_router(state, &config)
}

pub fn build_test_app(pool: PgPool) -> App {
    build_app_with(pool, test_config())
}

// ---------------------------------------------------------------------------
// Tokens
// ---------------------------------------------------------------------------

/// Standard claims for a token valid for one hour.
pub fn base_claims(permissions: &[&str]) -> Value {
    let now = chrono::Utc::now().timestamp();
    json!({
        "iss": format!("https://{DOMAIN}/"),
        "aud": AUDIENCE,
        "sub": "auth0|test-user",
        "iat": now,
        "exp": now + 3600,
        "permissions": permissions,
    })
}

/// Sign arbitrary claims with the given key and `kid`.
pub fn sign(claims: &Value, kid: Option<&str>, pem: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);
    let key = EncodingKey::from_rsa_pem(pem.as_bytes()).expect("fixture key parses");
    encode(&header, claims, &key).expect("token encodes")
}

/// Mint a valid token granting exactly `permissions`.
pub fn mint_token(permissions: &[&str]) -> String {
    sign(&base_claims(permissions), Some(KID), SIGNING_KEY)
}

/// Mint a valid token for one of the well-known roles.
pub fn role_token(role: &str) -> String {
    let permissions = permissions_for_role(role).expect("known role");
    mint_token(permissions)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: App,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: App, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: App, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(app: App, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(app: App, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: App, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
