//! Load cycle: fetch the league's text files → parse → application state.
//!
//! ## Entry points
//!
//! `load()` — page initialisation: the four content resources are fetched
//!   concurrently, each failure-isolated (a missing or failing resource only
//!   means `None` for that one), then parsed into a fresh `AppState`.
//!   Calling it again starts an independent cycle; whichever finishes last
//!   is the state the caller keeps.
//!
//! `fetch_standings()` / `fetch_prediction()` — the two table views
//!   re-fetched on demand. Both go through the same standings parser.

use crate::config::{AppConfig, ResourceConfig};
use crate::models::{MatchRecord, NewsArticle, StandingsRow};
use crate::parser::{parse_matches, parse_news, parse_standings, BuiltinSamples, SampleDataset};
use crate::source::{self, TextSource};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Everything the presentation layer renders, owned by whoever ran the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub news: Vec<NewsArticle>,
    pub standings: Vec<StandingsRow>,
    pub last_round: Vec<MatchRecord>,
    pub next_round: Vec<MatchRecord>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub resources_fetched: usize,
    pub resources_missing: usize,
    pub news: usize,
    pub standings: usize,
    pub last_round: usize,
    pub next_round: usize,
}

pub struct Pipeline {
    resources: ResourceConfig,
    source: Arc<dyn TextSource>,
    samples: Arc<dyn SampleDataset>,
}

impl Pipeline {
    /// Pipeline over the configured source with the bundled sample data.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let source = source::from_config(&config.source).context("Failed to build text source")?;
        Ok(Self::new(config.resources.clone(), source, Arc::new(BuiltinSamples)))
    }

    pub fn new(
        resources: ResourceConfig,
        source: Arc<dyn TextSource>,
        samples: Arc<dyn SampleDataset>,
    ) -> Self {
        Self { resources, source, samples }
    }

    pub fn samples(&self) -> &dyn SampleDataset {
        self.samples.as_ref()
    }

    pub async fn load(&self) -> (AppState, LoadStats) {
        let names = [
            self.resources.news.clone(),
            self.resources.standings.clone(),
            self.resources.last_round.clone(),
            self.resources.next_round.clone(),
        ];

        let mut handles = Vec::with_capacity(names.len());
        for name in &names {
            let name = name.clone();
            let source = Arc::clone(&self.source);
            handles.push(tokio::spawn(async move { source.fetch_text(&name).await }));
        }

        let mut texts: Vec<Option<String>> = Vec::with_capacity(names.len());
        for (name, handle) in names.iter().zip(handles) {
            let text = match handle.await {
                Ok(text) => text,
                Err(e) => {
                    error!("Fetch task for {} failed: {}", name, e);
                    None
                }
            };
            if text.is_none() {
                warn!("{}: not available, falling back", name);
            }
            texts.push(text);
        }

        let mut stats = LoadStats {
            resources_fetched: texts.iter().filter(|t| t.is_some()).count(),
            resources_missing: texts.iter().filter(|t| t.is_none()).count(),
            ..Default::default()
        };

        let [news, standings, last_round, next_round]: [Option<String>; 4] = texts
            .try_into()
            .unwrap_or_else(|_| [None, None, None, None]);

        let samples = self.samples.as_ref();
        let state = AppState {
            news: parse_news(news.as_deref(), samples),
            standings: parse_standings(standings.as_deref(), samples),
            last_round: parse_matches(last_round.as_deref()),
            next_round: parse_matches(next_round.as_deref()),
        };

        stats.news = state.news.len();
        stats.standings = state.standings.len();
        stats.last_round = state.last_round.len();
        stats.next_round = state.next_round.len();

        info!(
            "Loaded: {} news | {} table rows | {} last-round | {} next-round ({} of 4 resources missing)",
            stats.news, stats.standings, stats.last_round, stats.next_round, stats.resources_missing,
        );

        (state, stats)
    }

    /// Re-fetch the live table.
    pub async fn fetch_standings(&self) -> Vec<StandingsRow> {
        let text = self.source.fetch_text(&self.resources.standings).await;
        parse_standings(text.as_deref(), self.samples.as_ref())
    }

    /// Fetch the predicted final table. Absent text means no prediction, not
    /// the sample table.
    pub async fn fetch_prediction(&self) -> Vec<StandingsRow> {
        match self.source.fetch_text(&self.resources.prediction).await {
            Some(text) => parse_standings(Some(&text), self.samples.as_ref()),
            None => {
                info!("{}: no prediction available", self.resources.prediction);
                Vec::new()
            }
        }
    }
}
