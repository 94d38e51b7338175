use thiserror::Error;

/// Failures surfaced by the token minter.
///
/// None of the variants carry key material. `TokenExchange` keeps the
/// endpoint's status and body for diagnostics; callers facing end users
/// are expected to log it and answer with a generic error.
#[derive(Error, Debug)]
pub enum MintError {
    /// The private key could not be parsed or imported.
    #[error("credential error: {0}")]
    Credential(String),

    /// The signing primitive (or assertion serialization) failed.
    #[error("signing error: {0}")]
    Signing(String),

    /// The token endpoint was unreachable, answered non-2xx, or returned
    /// a body without a usable `access_token`.
    #[error("token exchange failed (status {}): {body}", fmt_status(.status))]
    TokenExchange { status: Option<u16>, body: String },
}

fn fmt_status(status: &Option<u16>) -> String {
    status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_owned())
}

impl MintError {
    /// Short, stable label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            MintError::Credential(_) => "credential",
            MintError::Signing(_) => "signing",
            MintError::TokenExchange { status: Some(_), .. } => "exchange_status",
            MintError::TokenExchange { status: None, .. } => "exchange_transport",
        }
    }
}
