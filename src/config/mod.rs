use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub resources: ResourceConfig,
    pub display: DisplayConfig,
}

/// Where the raw text files come from
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Http,
    Dir,
}

/// Text acquisition configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_kind")]
    pub kind: SourceKind,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_true")]
    pub cache_bust: bool,
}

/// Resource names, one per content kind
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceConfig {
    #[serde(default = "default_news")]
    pub news: String,

    #[serde(default = "default_standings")]
    pub standings: String,

    #[serde(default = "default_last_round")]
    pub last_round: String,

    #[serde(default = "default_next_round")]
    pub next_round: String,

    #[serde(default = "default_prediction")]
    pub prediction: String,
}

/// Presentation limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_max_listed_matches")]
    pub max_listed_matches: usize,

    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,

    #[serde(default = "default_sidebar_top")]
    pub sidebar_top: usize,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_source_kind() -> SourceKind {
    SourceKind::Http
}
fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_timeout_secs() -> u64 {
    15
}
fn default_user_agent() -> String {
    "liga-feed/0.1 (league content loader)".to_string()
}
fn default_true() -> bool {
    true
}
fn default_news() -> String {
    "noticias.txt".to_string()
}
fn default_standings() -> String {
    "clasificacion.txt".to_string()
}
fn default_last_round() -> String {
    "ultimaJ.txt".to_string()
}
fn default_next_round() -> String {
    "proximaJ.txt".to_string()
}
fn default_prediction() -> String {
    "ligaPredict.txt".to_string()
}
fn default_max_listed_matches() -> usize {
    10
}
fn default_snippet_chars() -> usize {
    180
}
fn default_sidebar_top() -> usize {
    5
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(config::Environment::with_prefix("LIGA").separator("__"))
            .build()?;

        let app_cfg: AppConfig = cfg.try_deserialize().unwrap_or_else(|_| AppConfig::default());
        Ok(app_cfg)
    }

    /// Point the source at a base URL, switching to HTTP acquisition.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.source.kind = SourceKind::Http;
        self.source.base_url = base_url.into();
        self
    }

    /// Point the source at a local directory of text files.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source.kind = SourceKind::Dir;
        self.source.data_dir = dir.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                kind: default_source_kind(),
                base_url: default_base_url(),
                data_dir: default_data_dir(),
                timeout_secs: default_timeout_secs(),
                user_agent: default_user_agent(),
                cache_bust: true,
            },
            resources: ResourceConfig {
                news: default_news(),
                standings: default_standings(),
                last_round: default_last_round(),
                next_round: default_next_round(),
                prediction: default_prediction(),
            },
            display: DisplayConfig {
                max_listed_matches: default_max_listed_matches(),
                snippet_chars: default_snippet_chars(),
                sidebar_top: default_sidebar_top(),
            },
        }
    }
}
