use std::collections::HashMap;

use crate::client::{ClubhouseClient, SheetsClient};
use crate::config::Config;
use crate::constants::{
    API_TOKEN_ENV, CLUBHOUSE_API_URL, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, DEFAULT_SOURCE_LABEL,
    SHEETS_API_URL, SHEETS_TOKEN_ENV, SPREADSHEET_ID_ENV,
};
use crate::error::{ReportError, ReportResult};

/// Settings for one run, resolved once at start-up and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReportContext {
    api_token: String,
    pub api_url: String,
    pub spreadsheet_id: Option<String>,
    sheets_access_token: Option<String>,
    pub sheets_api_url: String,
    pub source_label: String,
    pub page_size: u32,
    pub max_pages: usize,
    pub headcounts: HashMap<String, u32>,
}

impl ReportContext {
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn clubhouse_client(&self) -> ReportResult<ClubhouseClient> {
        ClubhouseClient::new(self.api_token.clone(), &self.api_url)
    }

    /// Fails before any network traffic when publishing is not configured.
    pub fn sheets_client(&self) -> ReportResult<SheetsClient> {
        let spreadsheet_id = self
            .spreadsheet_id
            .clone()
            .ok_or(ReportError::SpreadsheetNotConfigured)?;
        let access_token = self
            .sheets_access_token
            .clone()
            .ok_or(ReportError::SheetsTokenNotFound)?;

        SheetsClient::new(spreadsheet_id, access_token, &self.sheets_api_url)
    }
}

/// Layers config file, environment and command-line values (later wins).
#[derive(Debug, Default)]
pub struct ReportContextBuilder {
    config: Config,
}

impl ReportContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Apply environment overrides through `lookup` (normally `std::env::var`).
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(API_TOKEN_ENV) {
            self.config.api_token = Some(token);
        }
        if let Some(token) = non_empty(SHEETS_TOKEN_ENV) {
            self.config.sheets_access_token = Some(token);
        }
        if let Some(id) = non_empty(SPREADSHEET_ID_ENV) {
            self.config.spreadsheet_id = Some(id);
        }
        self
    }

    pub fn with_api_token(mut self, token: String) -> Self {
        self.config.api_token = Some(token);
        self
    }

    pub fn with_spreadsheet_id(mut self, id: String) -> Self {
        self.config.spreadsheet_id = Some(id);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.config.page_size = Some(page_size);
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = Some(max_pages);
        self
    }

    pub fn with_headcount(mut self, team: &str, count: u32) -> Self {
        self.config.headcounts.insert(team.to_string(), count);
        self
    }

    pub fn build(self) -> ReportResult<ReportContext> {
        let config = self.config;

        let api_token = config
            .api_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ReportError::ApiTokenNotFound)?;

        let page_size = config.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ReportError::InvalidInput("page size must be at least 1".to_string()));
        }
        let max_pages = config.max_pages.unwrap_or(DEFAULT_MAX_PAGES);
        if max_pages == 0 {
            return Err(ReportError::InvalidInput("max pages must be at least 1".to_string()));
        }

        Ok(ReportContext {
            api_token,
            api_url: config.api_url.unwrap_or_else(|| CLUBHOUSE_API_URL.to_string()),
            spreadsheet_id: config.spreadsheet_id,
            sheets_access_token: config.sheets_access_token,
            sheets_api_url: config.sheets_api_url.unwrap_or_else(|| SHEETS_API_URL.to_string()),
            source_label: config
                .source_label
                .unwrap_or_else(|| DEFAULT_SOURCE_LABEL.to_string()),
            page_size,
            max_pages,
            headcounts: config.headcounts,
        })
    }
}
