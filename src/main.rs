use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use liga_feed::config::AppConfig;
use liga_feed::models::MatchRecord;
use liga_feed::parser::SampleDataset;
use liga_feed::pipeline::{AppState, Pipeline};
use liga_feed::present::{self, html, text, MatchDetail, RoundKind};
use liga_feed::utils::Timer;

#[derive(Parser)]
#[command(name = "liga-feed", about = "League content loader: news, table and rounds", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fetch the text files from this base URL
    #[arg(long, global = true, env = "LIGA_BASE_URL", conflicts_with = "dir")]
    base_url: Option<String>,

    /// Read the text files from a local directory instead
    #[arg(long, global = true)]
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Load everything and print the state as JSON
    Dump,

    /// List the news, newest first
    News,

    /// Show the standings table
    Table {
        /// Show the predicted final table instead
        #[arg(long)]
        prediction: bool,
    },

    /// List the last round's results
    Last,

    /// List the upcoming fixtures
    Next,

    /// Show one match with table context and scorers
    Match {
        /// Position in the listing, as printed by `last`/`next`
        index: usize,

        /// Pick from the upcoming fixtures instead of the last round
        #[arg(long)]
        next: bool,
    },

    /// Write a static page with every widget
    Render {
        #[arg(short, long, default_value = "index.html")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "liga_feed=info,warn",
        1 => "liga_feed=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    let mut config = AppConfig::load()?;
    if let Some(url) = cli.base_url {
        config = config.with_base_url(url);
    }
    if let Some(dir) = cli.dir {
        config = config.with_data_dir(dir);
    }

    let pipeline = Pipeline::from_config(&config)?;
    let display = &config.display;

    match cli.command {
        Command::Dump => {
            let (state, _) = pipeline.load().await;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }

        Command::News => {
            let (state, _) = pipeline.load().await;
            print!("{}", text::news_list(&state.news, display.snippet_chars));
        }

        Command::Table { prediction } => {
            let rows = if prediction {
                pipeline.fetch_prediction().await
            } else {
                pipeline.fetch_standings().await
            };
            if prediction && rows.is_empty() {
                println!("Predicción no disponible.");
            } else {
                print!("{}", text::standings_table(&rows));
            }
        }

        Command::Last => {
            let (state, _) = pipeline.load().await;
            let round = pick_round(&pipeline, &state, RoundKind::Last);
            print!("{}", text::match_list(RoundKind::Last, &round, display.max_listed_matches));
        }

        Command::Next => {
            let (state, _) = pipeline.load().await;
            let round = pick_round(&pipeline, &state, RoundKind::Next);
            print!("{}", text::match_list(RoundKind::Next, &round, display.max_listed_matches));
        }

        Command::Match { index, next } => {
            let kind = if next { RoundKind::Next } else { RoundKind::Last };
            let (state, _) = pipeline.load().await;
            let round = pick_round(&pipeline, &state, kind);
            let m = round
                .get(index)
                .ok_or_else(|| anyhow!("No match at index {} ({} listed)", index, round.len()))?;
            let detail = MatchDetail::build(m, &state.standings);
            print!("{}", text::match_detail(&detail));
        }

        Command::Render { out } => {
            let _t = Timer::start("Render page");
            let (state, stats) = pipeline.load().await;
            let page = html::render_page(&state, display, pipeline.samples());
            std::fs::write(&out, page).with_context(|| format!("Failed to write {:?}", out))?;
            info!(
                "Wrote {:?} ({} of 4 resources fetched)",
                out, stats.resources_fetched
            );
        }
    }

    Ok(())
}

/// The loaded round, or the sample round when nothing parsed.
fn pick_round(pipeline: &Pipeline, state: &AppState, kind: RoundKind) -> Vec<MatchRecord> {
    let samples = pipeline.samples();
    match kind {
        RoundKind::Last => present::round_or_sample(&state.last_round, || samples.last_round()),
        RoundKind::Next => present::round_or_sample(&state.next_round, || samples.next_round()),
    }
}
