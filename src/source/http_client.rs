use crate::config::SourceConfig;
use crate::source::FetchError;
use anyhow::{Context, Result};
use chrono::Utc;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub struct HttpClient {
    inner: reqwest::Client,
    base: Url,
    cache_bust: bool,
}

impl HttpClient {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            inner,
            base: base_url(&config.base_url)?,
            cache_bust: config.cache_bust,
        })
    }

    /// Fetch one resource as text. Single attempt; any non-2xx is an error.
    pub async fn get_text(&self, name: &str) -> Result<String, FetchError> {
        let stamp = self.cache_bust.then(|| Utc::now().timestamp_millis());
        let url = resource_url(&self.base, name, stamp).map_err(|source| FetchError::Url {
            name: name.to_string(),
            source,
        })?;

        debug!("GET {}", url);
        let resp = self.inner.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status, url });
        }

        Ok(resp.text().await?)
    }
}

/// Parse the configured base, making sure relative names resolve beneath it.
fn base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&with_slash).with_context(|| format!("Invalid base URL {:?}", raw))
}

/// `base` + `name`, with `_=<stamp>` appended so caches never answer.
pub fn resource_url(base: &Url, name: &str, stamp: Option<i64>) -> Result<Url, url::ParseError> {
    let mut url = base.join(name)?;
    if let Some(stamp) = stamp {
        url.query_pairs_mut().append_pair("_", &stamp.to_string());
    }
    Ok(url)
}
