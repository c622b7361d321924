pub mod http_client;

use crate::config::{SourceConfig, SourceKind};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use self::http_client::HttpClient;

// ── Errors ────────────────────────────────────────────────────────────────────

/// Why a resource could not be read. Only ever logged: callers of
/// `TextSource` see `None`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid resource url for {name}: {source}")]
    Url {
        name: String,
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: url::Url,
    },

    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ── Source trait ──────────────────────────────────────────────────────────────

/// Fetch a named text resource. Any failure is reported as `None`.
#[async_trait]
pub trait TextSource: Send + Sync {
    async fn fetch_text(&self, name: &str) -> Option<String>;
}

/// Build the source the configuration asks for.
pub fn from_config(config: &SourceConfig) -> Result<Arc<dyn TextSource>> {
    Ok(match config.kind {
        SourceKind::Http => Arc::new(HttpTextSource::new(config)?),
        SourceKind::Dir => Arc::new(DirTextSource::new(config.data_dir.clone())),
    })
}

// ── HTTP ──────────────────────────────────────────────────────────────────────

pub struct HttpTextSource {
    client: HttpClient,
}

impl HttpTextSource {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
        })
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    async fn fetch_text(&self, name: &str) -> Option<String> {
        match self.client.get_text(name).await {
            Ok(text) => {
                debug!("{}: {} bytes", name, text.len());
                Some(text)
            }
            Err(e) => {
                warn!("{}: {}", name, e);
                None
            }
        }
    }
}

// ── Local directory ───────────────────────────────────────────────────────────

/// Reads resources from files in a directory. Invalid UTF-8 is replaced.
pub struct DirTextSource {
    dir: PathBuf,
}

impl DirTextSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read(&self, name: &str) -> Result<String, FetchError> {
        let path = self.dir.join(name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| FetchError::Io { path, source })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl TextSource for DirTextSource {
    async fn fetch_text(&self, name: &str) -> Option<String> {
        match self.read(name).await {
            Ok(text) => Some(text),
            Err(FetchError::Io { path, source }) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!("{}: {:?} does not exist", name, path);
                None
            }
            Err(e) => {
                warn!("{}: {}", name, e);
                None
            }
        }
    }
}

// ── In-memory ─────────────────────────────────────────────────────────────────

/// Fixed texts keyed by resource name.
#[derive(Debug, Clone, Default)]
pub struct StaticTextSource {
    texts: HashMap<String, String>,
}

impl StaticTextSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(name.into(), text.into());
        self
    }
}

#[async_trait]
impl TextSource for StaticTextSource {
    async fn fetch_text(&self, name: &str) -> Option<String> {
        self.texts.get(name).cloned()
    }
}
