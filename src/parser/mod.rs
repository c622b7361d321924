//! Tolerant parsers for the league's plain-text data files.
//!
//! Every parser takes the raw text (or `None` when the resource could not be
//! fetched) and never fails: malformed lines degrade to empty fields.

pub mod cleaner;
pub mod format;
pub mod matches;
pub mod news;
pub mod samples;
pub mod standings;

pub use format::TextFormat;
pub use matches::parse_matches;
pub use news::{parse_news, MAX_NEWS};
pub use samples::{BuiltinSamples, SampleDataset};
pub use standings::parse_standings;
