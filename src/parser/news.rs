use std::cmp::Reverse;

use tracing::debug;

use crate::models::NewsArticle;
use crate::parser::cleaner::date_sort_key;
use crate::parser::format::{
    col, meaningful_lines, sniff_records, split_blocks, split_delimited, split_key_value, strip_bom,
    TextFormat,
};
use crate::parser::samples::SampleDataset;

pub const MAX_NEWS: usize = 10;

/// Parse the news resource. Absent text yields the sample articles; otherwise
/// the newest `MAX_NEWS` articles, newest first.
pub fn parse_news(raw: Option<&str>, samples: &dyn SampleDataset) -> Vec<NewsArticle> {
    let Some(raw) = raw else {
        debug!("No news text, using sample articles");
        return samples.news();
    };
    let raw = strip_bom(raw);

    let lines = meaningful_lines(raw);
    let mut items = match sniff_records(&lines) {
        TextFormat::DelimitedPipe => parse_pipe(&lines),
        TextFormat::Block => split_blocks(raw).iter().map(|b| parse_block(b)).collect(),
        TextFormat::DelimitedComma | TextFormat::Unrecognized => Vec::new(),
    };

    // stable: equal dates keep file order
    items.sort_by_key(|a| Reverse(date_sort_key(&a.date)));
    items.truncate(MAX_NEWS);
    items
}

/// `date|title|lead|body...`: extra columns are more body text.
fn parse_pipe(lines: &[&str]) -> Vec<NewsArticle> {
    split_delimited(lines, b'|')
        .into_iter()
        .map(|cols| {
            let lead = col(&cols, 2);
            let body = cols.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();
            let body = body.trim();

            NewsArticle {
                title: col(&cols, 1).to_string(),
                date: col(&cols, 0).to_string(),
                author: String::new(),
                body: if body.is_empty() { lead.to_string() } else { body.to_string() },
            }
        })
        .collect()
}

fn parse_block(block: &str) -> NewsArticle {
    let mut article = NewsArticle::default();
    let mut body = String::new();

    for line in block.lines() {
        let Some((key, value)) = split_key_value(line) else {
            body.push_str(line);
            body.push('\n');
            continue;
        };

        match key.to_lowercase().as_str() {
            "title" => article.title = value.to_string(),
            "date" => article.date = value.to_string(),
            "author" => article.author = value.to_string(),
            "body" => {
                body.push_str(value);
                body.push('\n');
            }
            _ => {}
        }
    }

    article.body = body.trim().to_string();
    article
}
