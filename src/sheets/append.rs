use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use crate::auth::minter::AccessToken;
use crate::config::service::SheetsConfig;

#[derive(Debug, Serialize)]
struct AppendBody<'a> {
    values: [&'a [Value]; 1],
}

/// Appends rows to one range of one spreadsheet.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    cfg: SheetsConfig,
}

impl SheetsClient {
    pub fn new(client: Client, cfg: SheetsConfig) -> Self {
        Self { client, cfg }
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}:append?valueInputOption={option}`
    pub fn append_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.cfg.base_url)
            .with_context(|| format!("invalid sheets base url '{}'", self.cfg.base_url))?;
        let range_segment = format!("{}:append", self.cfg.range);
        url.path_segments_mut()
            .map_err(|_| anyhow!("sheets base url '{}' cannot be a base", self.cfg.base_url))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                self.cfg.spreadsheet_id.as_str(),
                "values",
                range_segment.as_str(),
            ]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", &self.cfg.value_input_option);
        Ok(url)
    }

    pub async fn append_row(&self, token: &AccessToken, row: &[Value]) -> Result<()> {
        let url = self.append_url()?;
        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, token.bearer())
            .json(&AppendBody { values: [row] })
            .send()
            .await
            .context("sheets append request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("sheets API error {}: {}", status, body);
            return Err(anyhow!("sheets append failed with status {}", status));
        }

        info!("appended row to '{}'", self.cfg.range);
        Ok(())
    }
}
