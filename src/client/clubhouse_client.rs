use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::Deserialize;

use crate::error::{ReportError, ReportResult};
use crate::logging::log_debug;
use crate::models::{Page, SearchPage, Team};
use crate::constants::TEAMS_PATH;

#[allow(async_fn_in_trait)]
pub trait StoryApi {
    async fn get_teams(&self) -> ReportResult<Vec<Team>>;

    /// `path` is the initial search path or the previous page's `next` cursor.
    async fn get_page(&self, path: &str) -> ReportResult<Page>;
}

pub struct ClubhouseClient {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl ClubhouseClient {
    pub fn new(token: String, api_url: &str) -> ReportResult<Self> {
        Self::with_client(reqwest::Client::builder().build()?, token, api_url)
    }

    pub fn with_client(client: reqwest::Client, token: String, api_url: &str) -> ReportResult<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(api_url)?,
            token,
        })
    }

    /// Relative paths hang off the versioned API root, absolute ones (as `next`
    /// cursors are) off the host.
    pub fn resolve(&self, path: &str) -> ReportResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ReportError::MalformedResponse(format!("Invalid API path '{}': {}", path, e)))
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> ReportResult<T> {
        let url = self.resolve(path)?;
        log_debug(&format!("GET {}", url));

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .query(&[("token", self.token.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ReportError::ApiError(format!(
                "GET {} failed with status {}: {}",
                path, status, body
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| ReportError::MalformedResponse(format!("{}: {}", path, e)))
    }
}

impl StoryApi for ClubhouseClient {
    async fn get_teams(&self) -> ReportResult<Vec<Team>> {
        self.get_json(TEAMS_PATH).await
    }

    async fn get_page(&self, path: &str) -> ReportResult<Page> {
        let raw: SearchPage = self.get_json(path).await?;
        Page::try_from(raw)
    }
}

fn parse_base_url(api_url: &str) -> ReportResult<Url> {
    // Url::join drops the last segment unless the base ends with a slash.
    let normalized = if api_url.ends_with('/') {
        api_url.to_string()
    } else {
        format!("{}/", api_url)
    };

    Url::parse(&normalized)
        .map_err(|e| ReportError::ConfigError(format!("Invalid API URL '{}': {}", api_url, e)))
}
