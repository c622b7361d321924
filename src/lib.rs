//! Loader for the league site's content files: news, the standings table and
//! the last/next round of matches. Each file may be pipe- or comma-delimited
//! or written as `key: value` blocks; parsing never fails, it degrades.

pub mod config;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod present;
pub mod source;
pub mod utils;

pub use config::AppConfig;
pub use models::{MatchRecord, NewsArticle, StandingsRow, TeamContext};
pub use parser::{parse_matches, parse_news, parse_standings, BuiltinSamples, SampleDataset};
pub use pipeline::{AppState, LoadStats, Pipeline};
pub use source::{FetchError, TextSource};
