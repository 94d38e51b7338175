use std::fmt;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::auth::assertion::{sign_assertion, SignedAssertion};
use crate::auth::claims::TokenClaims;
use crate::auth::credential::ServiceAccountCredential;
use crate::auth::error::MintError;
use crate::helpers::time::get_instant;
use crate::observability::metrics::get_metrics;
use crate::utils::constants::JWT_BEARER_GRANT_TYPE;

/// Opaque bearer token returned by the token endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    expires_in: Option<u64>,
    #[allow(dead_code)]
    token_type: Option<String>,
}

/// Exchanges signed service-account assertions for access tokens.
///
/// Stateless apart from the HTTP client: one `mint` is one assertion and
/// exactly one POST to the token endpoint. No caching, no retry.
#[derive(Debug, Clone)]
pub struct TokenMinter {
    client: Client,
    token_url: String,
}

impl TokenMinter {
    pub fn new(client: Client, token_url: impl Into<String>) -> Self {
        Self {
            client,
            token_url: token_url.into(),
        }
    }

    /// Minter whose exchange call is bounded by `timeout_ms`.
    pub fn with_timeout(token_url: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .context("failed to build token exchange HTTP client")?;
        Ok(Self::new(client, token_url))
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Signs a fresh assertion (`iat = now`, `exp = iat + 3600`).
    pub fn assertion(
        credential: &ServiceAccountCredential,
        scope: &str,
        audience: &str,
    ) -> Result<SignedAssertion, MintError> {
        let claims = TokenClaims::issued_now(&credential.issuer_email, scope, audience);
        sign_assertion(credential, &claims)
    }

    pub async fn mint(
        &self,
        credential: &ServiceAccountCredential,
        scope: &str,
        audience: &str,
    ) -> Result<AccessToken, MintError> {
        let metrics = get_metrics().await;
        let start = get_instant();
        metrics.token_mint_requests.inc();

        let result = self.mint_inner(credential, scope, audience).await;

        metrics
            .token_mint_duration
            .observe(start.elapsed().as_secs_f64());
        if let Err(e) = &result {
            metrics
                .token_mint_failures
                .with_label_values(&[e.reason()])
                .inc();
        }
        result
    }

    async fn mint_inner(
        &self,
        credential: &ServiceAccountCredential,
        scope: &str,
        audience: &str,
    ) -> Result<AccessToken, MintError> {
        let assertion = Self::assertion(credential, scope, audience)?;
        debug!(
            "assertion signed for issuer '{}', exchanging at {}",
            credential.issuer_email, self.token_url
        );

        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT_TYPE),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MintError::TokenExchange {
                status: None,
                body: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| MintError::TokenExchange {
            status: Some(status.as_u16()),
            body: e.to_string(),
        })?;

        if !status.is_success() {
            error!("token endpoint returned {}: {}", status, body);
            return Err(MintError::TokenExchange {
                status: Some(status.as_u16()),
                body,
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| MintError::TokenExchange {
                status: Some(status.as_u16()),
                body: format!("malformed token response: {}", e),
            })?;

        info!("access token minted for issuer '{}'", credential.issuer_email);
        Ok(AccessToken::new(token.access_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_renders_bearer_header() {
        let token = AccessToken::new("abc123");
        assert_eq!(token.bearer(), "Bearer abc123");
        assert_eq!(format!("{:?}", token), "AccessToken(<redacted>)");
    }

    #[test]
    fn token_response_ignores_extra_fields() {
        let parsed: TokenResponse = serde_json::from_str(
            r#"{"access_token":"ya29.x","expires_in":3599,"token_type":"Bearer","scope":"s"}"#,
        )
        .unwrap();
        assert_eq!(parsed.access_token, "ya29.x");
    }
}
