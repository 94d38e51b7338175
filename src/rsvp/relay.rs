use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::auth::credential::ServiceAccountCredential;
use crate::auth::error::MintError;
use crate::auth::minter::TokenMinter;
use crate::config::service::{OAuthConfig, ServiceConfig};
use crate::observability::metrics::get_metrics;
use crate::rsvp::notify::send_confirmation;
use crate::rsvp::submission::RsvpSubmission;
use crate::sheets::append::SheetsClient;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("missing required fields")]
    MissingFields,

    #[error("token mint failed: {0}")]
    TokenMint(#[from] MintError),

    #[error("sheets append failed: {0:#}")]
    Sheets(anyhow::Error),
}

impl RelayError {
    fn outcome(&self) -> &'static str {
        match self {
            RelayError::MissingFields => "rejected",
            RelayError::TokenMint(_) => "mint_failed",
            RelayError::Sheets(_) => "append_failed",
        }
    }
}

/// Validates a submission, mints a token and stores the row.
#[derive(Debug, Clone)]
pub struct RsvpRelay {
    minter: TokenMinter,
    credential: Arc<ServiceAccountCredential>,
    oauth: OAuthConfig,
    sheets: SheetsClient,
}

impl RsvpRelay {
    pub fn new(
        minter: TokenMinter,
        credential: ServiceAccountCredential,
        oauth: OAuthConfig,
        sheets: SheetsClient,
    ) -> Self {
        Self {
            minter,
            credential: Arc::new(credential),
            oauth,
            sheets,
        }
    }

    pub fn from_config(cfg: &ServiceConfig) -> Result<Self> {
        let credential = cfg.credential.load()?;
        let minter = TokenMinter::with_timeout(
            cfg.oauth.token_url.to_owned(),
            cfg.settings.token_exchange.timeout_ms,
        )?;
        let sheets = SheetsClient::new(Client::new(), cfg.sheets.clone());
        info!(
            "relay ready: issuer '{}', spreadsheet '{}'",
            credential.issuer_email, cfg.sheets.spreadsheet_id
        );
        Ok(Self::new(minter, credential, cfg.oauth.clone(), sheets))
    }

    pub fn minter(&self) -> &TokenMinter {
        &self.minter
    }

    pub fn credential(&self) -> &ServiceAccountCredential {
        &self.credential
    }

    pub fn oauth(&self) -> &OAuthConfig {
        &self.oauth
    }

    pub async fn submit(&self, submission: &RsvpSubmission) -> Result<(), RelayError> {
        let metrics = get_metrics().await;
        let result = self.submit_inner(submission).await;
        let outcome = match &result {
            Ok(()) => "accepted",
            Err(e) => e.outcome(),
        };
        metrics.rsvp_submissions.with_label_values(&[outcome]).inc();
        result
    }

    async fn submit_inner(&self, submission: &RsvpSubmission) -> Result<(), RelayError> {
        if !submission.has_required_fields() {
            return Err(RelayError::MissingFields);
        }

        let token = self
            .minter
            .mint(&self.credential, &self.oauth.scope, self.oauth.audience())
            .await
            .inspect_err(|e| error!("access token mint failed: {}", e))?;

        if let Err(e) = self.sheets.append_row(&token, &submission.to_row()).await {
            error!("append to sheets failed: {:#}", e);
            get_metrics().await.sheets_append_failures.inc();
            return Err(RelayError::Sheets(e));
        }

        if let Err(e) = send_confirmation(submission).await {
            warn!("confirmation failed: {:#}", e);
        }
        Ok(())
    }
}
