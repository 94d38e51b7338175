use serde::{Deserialize, Serialize};

use crate::helpers::time::now_u64;
use crate::utils::constants::TOKEN_VALIDITY_SECONDS;

/// Fixed JOSE header for RS256 assertions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self {
            alg: "RS256".to_owned(),
            typ: "JWT".to_owned(),
        }
    }
}

/// Claim set of a service-account bearer assertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    #[serde(rename = "iss")]
    pub issuer: String,
    pub scope: String,
    #[serde(rename = "aud")]
    pub audience: String,
    #[serde(rename = "exp")]
    pub expires_at: u64,
    #[serde(rename = "iat")]
    pub issued_at: u64,
}

impl TokenClaims {
    /// invariant: `expires_at - issued_at == TOKEN_VALIDITY_SECONDS`
    pub fn new(issuer: &str, scope: &str, audience: &str, issued_at: u64) -> Self {
        Self {
            issuer: issuer.to_owned(),
            scope: scope.to_owned(),
            audience: audience.to_owned(),
            expires_at: issued_at + TOKEN_VALIDITY_SECONDS,
            issued_at,
        }
    }

    pub fn issued_now(issuer: &str, scope: &str, audience: &str) -> Self {
        Self::new(issuer, scope, audience, now_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_one_hour_after_issue() {
        for iat in [0u64, 1, 1_700_000_000, 4_102_444_800] {
            let claims = TokenClaims::new("iss", "scope", "aud", iat);
            assert_eq!(claims.expires_at - claims.issued_at, 3600);
        }
    }

    #[test]
    fn serializes_with_registered_claim_names() {
        let claims = TokenClaims::new(
            "rsvp@wedding.iam.gserviceaccount.com",
            "https://www.googleapis.com/auth/spreadsheets",
            "https://oauth2.googleapis.com/token",
            1_000,
        );
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["iss"], "rsvp@wedding.iam.gserviceaccount.com");
        assert_eq!(value["scope"], "https://www.googleapis.com/auth/spreadsheets");
        assert_eq!(value["aud"], "https://oauth2.googleapis.com/token");
        assert_eq!(value["iat"], 1_000);
        assert_eq!(value["exp"], 4_600);
    }

    #[test]
    fn default_header_is_rs256_jwt() {
        let header = serde_json::to_string(&JwtHeader::default()).unwrap();
        assert_eq!(header, r#"{"alg":"RS256","typ":"JWT"}"#);
    }
}
