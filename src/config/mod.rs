use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides `api.token`.
pub const TOKEN_ENV: &str = "STAMPCHART_TOKEN";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub markers: Markers,
    #[serde(default)]
    pub labels: Labels,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_notion_version")]
    pub notion_version: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub events_database: Option<String>,
    #[serde(default)]
    pub members_database: Option<String>,
    /// Optional query filters, passed through to the API verbatim.
    #[serde(default)]
    pub events_filter: Option<serde_json::Value>,
    #[serde(default)]
    pub members_filter: Option<serde_json::Value>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Name the output sheet must carry before anything is written.
    #[serde(default = "default_sheet_name")]
    pub name: String,
    /// Offset used for the "updated at" stamp (Asia/Tokyo by default).
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
}

/// Literal strings written into grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    #[serde(default = "default_self_marker")]
    pub own: String,
    #[serde(default = "default_done_marker")]
    pub done: String,
    #[serde(default = "default_scheduled_marker")]
    pub scheduled: String,
    #[serde(default)]
    pub empty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_updated_at")]
    pub updated_at: String,
    #[serde(default = "default_rank")]
    pub rank: String,
    #[serde(default = "default_received")]
    pub received: String,
    #[serde(default = "default_given")]
    pub given: String,
    #[serde(default = "default_corner")]
    pub corner_formula: String,
    #[serde(default = "default_interviewer")]
    pub interviewer: String,
}

fn default_base_url() -> String {
    "https://api.notion.com".to_string()
}
fn default_notion_version() -> String {
    "2022-06-28".to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_sheet_name() -> String {
    "星取表".to_string()
}
fn default_utc_offset() -> i32 {
    9
}
fn default_self_marker() -> String {
    "-".to_string()
}
fn default_done_marker() -> String {
    "◎".to_string()
}
fn default_scheduled_marker() -> String {
    "予".to_string()
}
fn default_updated_at() -> String {
    "更新日時：".to_string()
}
fn default_rank() -> String {
    "社員番号".to_string()
}
fn default_received() -> String {
    "もらったスタンプの数".to_string()
}
fn default_given() -> String {
    "あげたスタンプの数".to_string()
}
fn default_corner() -> String {
    "=CHAR(HEX2DEC(\"1F4AE\"))".to_string()
}
fn default_interviewer() -> String {
    "interviewer".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            notion_version: default_notion_version(),
            token: None,
            events_database: None,
            members_database: None,
            events_filter: None,
            members_filter: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            name: default_sheet_name(),
            utc_offset_hours: default_utc_offset(),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            own: default_self_marker(),
            done: default_done_marker(),
            scheduled: default_scheduled_marker(),
            empty: String::new(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            updated_at: default_updated_at(),
            rank: default_rank(),
            received: default_received(),
            given: default_given(),
            corner_formula: default_corner(),
            interviewer: default_interviewer(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stampchart")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stampchart.conf")
    }

    /// Load configuration from `path` (or the default file), falling back to
    /// defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Write a default configuration file, unless running in test mode.
    pub fn init_file(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if is_test {
            return Ok(path);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        success(format!("Config file: {}", path.display()));

        Ok(path)
    }

    /// Resolve the API token: explicit flag first, then environment, then file.
    pub fn resolve_token(&self, flag: Option<&str>) -> AppResult<String> {
        // blank values fall through to the next candidate
        let present = |t: &String| !t.trim().is_empty();

        flag.map(str::to_string)
            .filter(present)
            .or_else(|| std::env::var(TOKEN_ENV).ok().filter(present))
            .or_else(|| self.api.token.clone().filter(present))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "no API token: pass --token, set {TOKEN_ENV} or api.token"
                ))
            })
    }

    pub fn events_database(&self) -> AppResult<&str> {
        database_id("api.events_database", self.api.events_database.as_deref())
    }

    pub fn members_database(&self) -> AppResult<&str> {
        database_id("api.members_database", self.api.members_database.as_deref())
    }
}

fn database_id<'a>(key: &str, value: Option<&'a str>) -> AppResult<&'a str> {
    let id = value.ok_or_else(|| AppError::Config(format!("{key} is not set")))?;
    if is_valid_database_id(id) {
        Ok(id)
    } else {
        Err(AppError::Config(format!("{key} is not a valid database id: {id}")))
    }
}

static DATABASE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(?:[0-9a-f]{32}|[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})$")
        .expect("static regex")
});

/// Database ids are 32 hex digits, optionally grouped 8-4-4-4-12 with hyphens.
pub fn is_valid_database_id(id: &str) -> bool {
    DATABASE_ID.is_match(id)
}
