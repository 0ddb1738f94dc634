use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{auth, http_client};
use crate::shared::config::SheetsConfig;

/// The three spreadsheet operations the waiting-list flow needs. The real
/// implementation talks to the Sheets values API; tests substitute a
/// recording mock.
#[async_trait]
pub trait SheetsBackend: Send + Sync {
    /// Read a bounded range. An empty vec means the range holds no values.
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>>;

    /// Write literal values into a bounded range.
    async fn update_values(&self, range: &str, values: Vec<Vec<String>>) -> Result<()>;

    /// Append one row after the last populated row of a column range.
    async fn append_row(&self, range: &str, row: Vec<String>) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// HTTP client for the Google Sheets v4 values API, bound to one spreadsheet
/// and one short-lived access token.
pub struct SheetsApiClient {
    access_token: String,
    spreadsheet_id: String,
    base_url: String,
}

impl SheetsApiClient {
    /// Authenticate with the configured service account and bind to the
    /// configured spreadsheet.
    pub async fn connect(config: &SheetsConfig) -> Result<Self> {
        let access_token = auth::fetch_access_token(http_client(), &config.key).await?;
        Ok(Self {
            access_token,
            spreadsheet_id: config.spreadsheet_id.clone(),
            base_url: "https://sheets.googleapis.com".to_string(),
        })
    }

    fn values_url(&self, range: &str, suffix: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}{}",
            self.base_url,
            self.spreadsheet_id,
            urlencoding::encode(range),
            suffix
        )
    }

    async fn check(response: reqwest::Response, what: &str) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Sheets {} failed: {}", what, body);
            anyhow::bail!("Sheets {} failed with status {}", what, status);
        }
        Ok(response)
    }
}

#[async_trait]
impl SheetsBackend for SheetsApiClient {
    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let response = http_client()
            .get(self.values_url(range, ""))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .send()
            .await?;

        let response = Self::check(response, "values.get").await?;
        let value_range: ValueRange = response.json().await?;
        Ok(value_range.values)
    }

    async fn update_values(&self, range: &str, values: Vec<Vec<String>>) -> Result<()> {
        let response = http_client()
            .put(self.values_url(range, ""))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": values }))
            .send()
            .await?;

        Self::check(response, "values.update").await?;
        Ok(())
    }

    async fn append_row(&self, range: &str, row: Vec<String>) -> Result<()> {
        let response = http_client()
            .post(self.values_url(range, ":append"))
            .header("Authorization", format!("Bearer {}", self.access_token))
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": [row] }))
            .send()
            .await?;

        Self::check(response, "values.append").await?;
        Ok(())
    }
}
