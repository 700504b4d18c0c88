use crate::errors::{AppError, AppResult};
use crate::notion::page::{Page, collect_pages};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const BODY_CONTENT_TYPE: &str = "application/json";
const NOTION_VERSION: &str = "notion-version";

/// Request body of `POST /v1/databases/{id}/query`.
#[derive(Debug, Serialize)]
struct QueryBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'a str>,
}

#[derive(Debug, Default)]
pub struct NotionClientBuilder {
    timeout: Option<Duration>,
    notion_version: Option<String>,
}

impl NotionClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn notion_version(mut self, version: &str) -> Self {
        self.notion_version = Some(version.to_string());
        self
    }

    pub fn build(self, base_url: &str, token: &str) -> AppResult<NotionClient> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static(BODY_CONTENT_TYPE));

        let bearer = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| AppError::Config("API token is not a valid header value".to_string()))?;
        default_headers.insert(AUTHORIZATION, bearer);

        let version = self.notion_version.as_deref().unwrap_or("2022-06-28");
        let version = HeaderValue::from_str(version)
            .map_err(|_| AppError::Config(format!("invalid API version: {version}")))?;
        default_headers.insert(NOTION_VERSION, version);

        let mut builder = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(default_headers);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(NotionClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            inner: builder.build()?,
        })
    }
}

/// Blocking client for the workspace database query endpoint.
#[derive(Debug, Clone)]
pub struct NotionClient {
    base_url: String,
    inner: Client,
}

impl NotionClient {
    pub fn builder() -> NotionClientBuilder {
        NotionClientBuilder::default()
    }

    pub fn query_url(&self, database_id: &str) -> String {
        format!("{}/v1/databases/{}/query", self.base_url, database_id)
    }

    /// Fetch a single page of `database_id`.
    pub fn query_page<T: DeserializeOwned>(
        &self,
        database_id: &str,
        filter: Option<&Value>,
        cursor: Option<&str>,
    ) -> AppResult<Page<T>> {
        let url = self.query_url(database_id);
        debug!(%url, cursor = cursor.unwrap_or("-"), "querying database");

        let body = QueryBody {
            filter,
            start_cursor: cursor,
        };

        let res = self.inner.post(&url).json(&body).send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                body: res.text().unwrap_or_default(),
            });
        }

        let text = res.text()?;
        trace!(%text, "response");

        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch every page of `database_id`, following cursors to the end.
    pub fn query_all<T: DeserializeOwned>(
        &self,
        database_id: &str,
        filter: Option<&Value>,
    ) -> AppResult<Vec<T>> {
        collect_pages(|cursor| self.query_page(database_id, filter, cursor))
    }
}
