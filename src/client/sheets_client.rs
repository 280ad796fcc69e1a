use reqwest::Url;
use serde_json::{json, Value};

use crate::constants::{INSERT_DATA_OPTION, VALUE_INPUT_OPTION};
use crate::error::{ReportError, ReportResult};
use crate::logging::log_debug;

#[allow(async_fn_in_trait)]
pub trait SheetAppender {
    async fn append_row(&self, range: &str, row: &[Value]) -> ReportResult<()>;
}

pub struct SheetsClient {
    client: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
    access_token: String,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: String, access_token: String, api_url: &str) -> ReportResult<Self> {
        Self::with_client(reqwest::Client::builder().build()?, spreadsheet_id, access_token, api_url)
    }

    pub fn with_client(
        client: reqwest::Client,
        spreadsheet_id: String,
        access_token: String,
        api_url: &str,
    ) -> ReportResult<Self> {
        let base_url = Url::parse(api_url)
            .map_err(|e| ReportError::ConfigError(format!("Invalid Sheets API URL '{}': {}", api_url, e)))?;

        Ok(Self {
            client,
            base_url,
            spreadsheet_id,
            access_token,
        })
    }

    pub fn append_url(&self, range: &str) -> ReportResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ReportError::ConfigError(format!("Sheets API URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .push(&self.spreadsheet_id)
            .push("values")
            .push(&format!("{}:append", range));

        url.query_pairs_mut()
            .append_pair("valueInputOption", VALUE_INPUT_OPTION)
            .append_pair("insertDataOption", INSERT_DATA_OPTION);

        Ok(url)
    }
}

impl SheetAppender for SheetsClient {
    async fn append_row(&self, range: &str, row: &[Value]) -> ReportResult<()> {
        let url = self.append_url(range)?;
        log_debug(&format!("POST {}", url));

        let body = json!({ "values": [row] });

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ReportError::ApiError(format!(
                "Append to '{}' failed with status {}: {}",
                range, status, error_text
            )));
        }

        Ok(())
    }
}
