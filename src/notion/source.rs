use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{InterviewEvent, Member};
use crate::notion::client::NotionClient;
use crate::notion::page::{Page, collect_pages};
use crate::notion::properties::{MemberPage, StampRallyPage};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// Where the update run reads its two datasets from.
pub trait DataSource {
    /// Every entry of the stamp rally log.
    fn fetch_events(&self) -> AppResult<Vec<InterviewEvent>>;

    /// Every member record, unfiltered and unsorted.
    fn fetch_members(&self) -> AppResult<Vec<Member>>;
}

/// Live workspace API.
pub struct NotionSource {
    client: NotionClient,
    events_database: String,
    members_database: String,
    events_filter: Option<Value>,
    members_filter: Option<Value>,
}

impl NotionSource {
    pub fn from_config(cfg: &Config, token: Option<&str>) -> AppResult<Self> {
        let token = cfg.resolve_token(token)?;
        let events_database = cfg.events_database()?.to_string();
        let members_database = cfg.members_database()?.to_string();

        let client = NotionClient::builder()
            .notion_version(&cfg.api.notion_version)
            .timeout(Duration::from_secs(cfg.api.timeout_secs))
            .build(&cfg.api.base_url, &token)?;

        Ok(Self {
            client,
            events_database,
            members_database,
            events_filter: cfg.api.events_filter.clone(),
            members_filter: cfg.api.members_filter.clone(),
        })
    }
}

impl DataSource for NotionSource {
    fn fetch_events(&self) -> AppResult<Vec<InterviewEvent>> {
        let pages: Vec<StampRallyPage> = self
            .client
            .query_all(&self.events_database, self.events_filter.as_ref())?;
        info!(count = pages.len(), "stamp rally entries fetched");
        Ok(pages.into_iter().map(InterviewEvent::from).collect())
    }

    fn fetch_members(&self) -> AppResult<Vec<Member>> {
        let pages: Vec<MemberPage> = self
            .client
            .query_all(&self.members_database, self.members_filter.as_ref())?;
        info!(count = pages.len(), "member records fetched");
        Ok(pages.into_iter().map(Member::from).collect())
    }
}

/// Saved query responses on disk, one file per database.
///
/// A file holds either a single response page or a JSON array of pages in
/// the order they were returned.
pub struct FileSource {
    events: PathBuf,
    members: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Dump<T> {
    Pages(Vec<Page<T>>),
    Single(Page<T>),
}

impl FileSource {
    pub fn new(events: impl Into<PathBuf>, members: impl Into<PathBuf>) -> Self {
        Self {
            events: events.into(),
            members: members.into(),
        }
    }
}

impl DataSource for FileSource {
    fn fetch_events(&self) -> AppResult<Vec<InterviewEvent>> {
        let pages: Vec<StampRallyPage> = read_dump(&self.events)?;
        Ok(pages.into_iter().map(InterviewEvent::from).collect())
    }

    fn fetch_members(&self) -> AppResult<Vec<Member>> {
        let pages: Vec<MemberPage> = read_dump(&self.members)?;
        Ok(pages.into_iter().map(Member::from).collect())
    }
}

/// Replay a saved response through the same cursor loop as the live client.
fn read_dump<T: DeserializeOwned>(path: &Path) -> AppResult<Vec<T>> {
    let content = fs::read_to_string(path)?;
    let pages = match serde_json::from_str::<Dump<T>>(&content)? {
        Dump::Pages(pages) => pages,
        Dump::Single(page) => vec![page],
    };

    let mut pages = pages.into_iter();
    collect_pages(|cursor| {
        pages.next().ok_or_else(|| {
            AppError::Source(format!(
                "{} ends before cursor {}",
                path.display(),
                cursor.unwrap_or("-")
            ))
        })
    })
}
