use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::auth::credential::ServiceAccountCredential;
use crate::config::settings::SettingsConfig;
use crate::utils::constants::{
    GOOGLE_TOKEN_URL, SHEETS_BASE_URL, SHEETS_DEFAULT_RANGE, SHEETS_VALUE_INPUT_OPTION,
    SPREADSHEETS_SCOPE,
};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub settings: SettingsConfig,
    pub credential: CredentialSource,
    #[serde(default)]
    pub oauth: OAuthConfig,
    pub sheets: SheetsConfig,
}

/// ================================
/// Credential
/// ================================
/// Where the service-account key comes from.
#[derive(Deserialize, Clone)]
#[serde(untagged)]
pub enum CredentialSource {
    /// Whole JSON key document held in an environment variable.
    FromEnv { from_env: String },
    /// JSON key file on disk.
    FromFile { path: String },
    Inline {
        client_email: String,
        private_key: String,
    },
}

impl CredentialSource {
    pub fn load(&self) -> Result<ServiceAccountCredential> {
        match self {
            CredentialSource::FromEnv { from_env } => ServiceAccountCredential::from_env(from_env),
            CredentialSource::FromFile { path } => {
                ServiceAccountCredential::from_file(Path::new(path))
            }
            CredentialSource::Inline {
                client_email,
                private_key,
            } => Ok(ServiceAccountCredential::new(
                client_email.to_owned(),
                private_key.to_owned(),
            )),
        }
    }
}

impl std::fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialSource::FromEnv { from_env } => {
                f.debug_struct("FromEnv").field("from_env", from_env).finish()
            }
            CredentialSource::FromFile { path } => {
                f.debug_struct("FromFile").field("path", path).finish()
            }
            CredentialSource::Inline { client_email, .. } => f
                .debug_struct("Inline")
                .field("client_email", client_email)
                .field("private_key", &"<redacted>")
                .finish(),
        }
    }
}

/// ================================
/// OAuth token endpoint
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct OAuthConfig {
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    /// `aud` claim; the token URL when absent
    pub audience: Option<String>,
}

impl OAuthConfig {
    pub fn audience(&self) -> &str {
        self.audience.as_deref().unwrap_or(&self.token_url)
    }
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            token_url: default_token_url(),
            scope: default_scope(),
            audience: None,
        }
    }
}

/// ================================
/// Spreadsheet target
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SheetsConfig {
    #[serde(default = "default_sheets_base_url")]
    pub base_url: String,
    pub spreadsheet_id: String,
    #[serde(default = "default_range")]
    pub range: String,
    #[serde(default = "default_value_input_option")]
    pub value_input_option: String,
}

fn default_token_url() -> String {
    GOOGLE_TOKEN_URL.to_string()
}

fn default_scope() -> String {
    SPREADSHEETS_SCOPE.to_string()
}

fn default_sheets_base_url() -> String {
    SHEETS_BASE_URL.to_string()
}

fn default_range() -> String {
    SHEETS_DEFAULT_RANGE.to_string()
}

fn default_value_input_option() -> String {
    SHEETS_VALUE_INPUT_OPTION.to_string()
}
