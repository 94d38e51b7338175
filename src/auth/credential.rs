use std::fmt;
use std::path::Path;
use std::{env, fs};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// Service-account identity used to sign bearer assertions.
///
/// Deserializes straight from a Google service-account JSON key; fields
/// other than `client_email` and `private_key` are ignored.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountCredential {
    #[serde(rename = "client_email")]
    pub issuer_email: String,
    #[serde(rename = "private_key")]
    pub private_key_pem: String,
}

impl ServiceAccountCredential {
    pub fn new(issuer_email: impl Into<String>, private_key_pem: impl Into<String>) -> Self {
        Self {
            issuer_email: issuer_email.into(),
            private_key_pem: private_key_pem.into(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("service account key is not valid JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read service account key '{}'", path.display()))?;
        Self::from_json(&raw)
    }

    /// Reads the whole JSON key document from an environment variable.
    pub fn from_env(var: &str) -> Result<Self> {
        let raw = env::var(var).map_err(|e| anyhow!("env '{}': {}", var, e))?;
        Self::from_json(&raw)
    }
}

impl fmt::Debug for ServiceAccountCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredential")
            .field("issuer_email", &self.issuer_email)
            .field("private_key_pem", &"<redacted>")
            .finish()
    }
}
