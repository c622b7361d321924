//! Plain-text views for the terminal.

use crate::models::{MatchRecord, NewsArticle, StandingsRow, TeamContext};
use crate::present::{
    display_author, display_date, display_title, form_badges, listed, snippet, MatchDetail, RoundKind,
    NO_GOALS, NO_NEWS, NO_STANDINGS,
};

const RULE: &str = "─────────────────────────────────────────────────────────────";

pub fn news_list(news: &[NewsArticle], snippet_chars: usize) -> String {
    if news.is_empty() {
        return format!("{}\n", NO_NEWS);
    }

    let mut out = String::new();
    for (idx, n) in news.iter().enumerate() {
        out.push_str(&format!(
            "#{} {}\n   {} · {}\n   {}\n\n",
            idx + 1,
            display_title(n),
            display_date(&n.date),
            display_author(n),
            snippet(&n.body, snippet_chars),
        ));
    }
    out
}

pub fn standings_table(rows: &[StandingsRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", NO_STANDINGS);
    }

    let width = rows.iter().map(|r| r.team.chars().count()).max().unwrap_or(0).max(6);
    let mut out = format!(
        "{:>3}  {:<width$}  {:>4} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4}  Últ.\n{}\n",
        "#", "Equipo", "Pts", "PJ", "V", "E", "P", "GF", "GC", "DG", RULE,
        width = width,
    );
    for r in rows {
        let form: String = form_badges(&r.form).iter().map(|b| b.symbol()).collect();
        out.push_str(&format!(
            "{:>3}  {:<width$}  {:>4} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4}  {}\n",
            r.position,
            r.team,
            r.points,
            r.played,
            r.wins,
            r.draws,
            r.losses,
            r.goals_for,
            r.goals_against,
            r.goal_difference,
            form,
            width = width,
        ));
    }
    out
}

pub fn match_list(kind: RoundKind, matches: &[MatchRecord], cap: usize) -> String {
    if matches.is_empty() {
        return format!("{}\n", kind.empty_message());
    }

    let mut out = String::new();
    for (idx, m) in listed(matches, cap).iter().enumerate() {
        let right = match kind {
            RoundKind::Last if m.score.is_empty() => " - ".to_string(),
            RoundKind::Last => m.score.clone(),
            RoundKind::Next => String::new(),
        };
        out.push_str(&format!(
            "[{}] {} vs {}  {}\n    {} · {}\n",
            idx, m.home, m.away, right, m.date, m.stadium
        ));
    }
    out
}

pub fn match_detail(d: &MatchDetail) -> String {
    let mut out = format!("{}\n{}\n{}\n", d.title, d.subtitle, RULE);

    if let Some(score) = &d.score {
        out.push_str(&format!("Resultado: {}\n", score));
    }

    if let Some((home, away)) = &d.context {
        out.push_str(&team_line(home));
        out.push_str(&team_line(away));
    }

    if d.has_scorers() {
        out.push_str(&scorer_lines(&d.home, &d.home_scorers));
        out.push_str(&scorer_lines(&d.away, &d.away_scorers));
    }
    out
}

fn team_line(ctx: &TeamContext) -> String {
    let mut line = format!("{}  Pos: {} · Pts: {}", ctx.team, ctx.position, ctx.points);
    if !ctx.last5.is_empty() {
        line.push_str("  ");
        line.extend(ctx.last5.iter());
    }
    line.push('\n');
    line
}

fn scorer_lines(team: &str, scorers: &[String]) -> String {
    let mut out = format!("{}:\n", team);
    if scorers.is_empty() {
        out.push_str(&format!("  {}\n", NO_GOALS));
    }
    for g in scorers {
        out.push_str(&format!("  {}\n", g));
    }
    out
}
