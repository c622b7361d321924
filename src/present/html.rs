//! Static page rendering. Detail views are `<dialog>` elements next to the
//! listing that opens them.

use crate::config::DisplayConfig;
use crate::models::{MatchRecord, NewsArticle, StandingsRow, TeamContext};
use crate::parser::SampleDataset;
use crate::pipeline::AppState;
use crate::present::{
    display_author, display_date, display_title, escape_html, form_badges, latest_headline, listed,
    round_or_sample, sidebar_top, snippet, MatchDetail, RoundKind, Zone, NO_GOALS, NO_NEWS,
    NO_STANDINGS,
};

pub fn render_page(state: &AppState, display: &DisplayConfig, samples: &dyn SampleDataset) -> String {
    let last = round_or_sample(&state.last_round, || samples.last_round());
    let next = round_or_sample(&state.next_round, || samples.next_round());

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"es\">\n<head><meta charset=\"utf-8\"><title>Liga</title></head>\n<body>\n");
    out.push_str(&format!(
        "<aside>\n<div id=\"sideLatest\">{}</div>\n<div id=\"sideTop\">{}</div>\n</aside>\n",
        escape_html(&latest_headline(&state.news)),
        escape_html(&sidebar_top(&state.standings, display.sidebar_top)),
    ));
    out.push_str(&render_news(&state.news, display.snippet_chars));
    out.push_str(&render_standings("standingsView", &state.standings));
    out.push_str(&render_round(RoundKind::Last, &last, &state.standings, display.max_listed_matches));
    out.push_str(&render_round(RoundKind::Next, &next, &state.standings, display.max_listed_matches));
    out.push_str("</body>\n</html>\n");
    out
}

// ── News ──────────────────────────────────────────────────────────────────────

pub fn render_news(news: &[NewsArticle], snippet_chars: usize) -> String {
    let mut out = String::from("<section id=\"newsList\">\n");
    if news.is_empty() {
        out.push_str(&placeholder(NO_NEWS));
        out.push_str("</section>\n");
        return out;
    }

    for (idx, n) in news.iter().enumerate() {
        let id = format!("news-{}", idx + 1);
        out.push_str(&format!(
            "<article class=\"news-item\">\n<h3>{}</h3>\n<div class=\"meta\">{} · {}</div>\n\
             <div class=\"small muted\">#{}</div>\n<div class=\"news-snippet\">{}</div>\n\
             <a class=\"news-more\" href=\"#{}\">Ver noticia</a>\n</article>\n",
            escape_html(display_title(n)),
            escape_html(&display_date(&n.date)),
            escape_html(display_author(n)),
            idx + 1,
            escape_html(&snippet(&n.body, snippet_chars)),
            id,
        ));
        out.push_str(&format!(
            "<dialog id=\"{}\" class=\"modal\">\n<h2>{}</h2>\n<div class=\"meta\">{} · {}</div>\n\
             <div class=\"body\">{}</div>\n</dialog>\n",
            id,
            escape_html(&n.title),
            escape_html(&display_date(&n.date)),
            escape_html(display_author(n)),
            escape_html(&n.body),
        ));
    }
    out.push_str("</section>\n");
    out
}

// ── Standings ─────────────────────────────────────────────────────────────────

pub fn render_standings(id: &str, rows: &[StandingsRow]) -> String {
    let mut out = format!("<section id=\"{}\">\n", escape_html(id));
    if rows.is_empty() {
        out.push_str(&placeholder(NO_STANDINGS));
        out.push_str("</section>\n");
        return out;
    }

    out.push_str(
        "<table>\n<thead><tr><th>#</th><th>Equipo</th><th>Pts</th><th>PJ</th><th>V</th><th>E</th>\
         <th>P</th><th>GF</th><th>GC</th><th>DG</th><th>Últ.</th></tr></thead>\n<tbody>\n",
    );
    for r in rows {
        let class = Zone::from_position(&r.position)
            .map(|z| format!(" class=\"{}\"", z.css_class()))
            .unwrap_or_default();
        let dots: String = form_badges(&r.form)
            .iter()
            .map(|b| format!("<span class=\"result-dot {}\"></span>", b.css_class()))
            .collect();

        out.push_str(&format!("<tr{}>", class));
        for cell in [
            &r.position,
            &r.team,
            &r.points,
            &r.played,
            &r.wins,
            &r.draws,
            &r.losses,
            &r.goals_for,
            &r.goals_against,
            &r.goal_difference,
        ] {
            out.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        out.push_str(&format!("<td>{}</td></tr>\n", dots));
    }
    out.push_str("</tbody>\n</table>\n</section>\n");
    out
}

// ── Matches ───────────────────────────────────────────────────────────────────

pub fn render_round(kind: RoundKind, matches: &[MatchRecord], standings: &[StandingsRow], cap: usize) -> String {
    let (id, prefix) = match kind {
        RoundKind::Last => ("lastList", "last"),
        RoundKind::Next => ("nextList", "next"),
    };

    let mut out = format!("<section id=\"{}\">\n", id);
    if matches.is_empty() {
        out.push_str(&placeholder(kind.empty_message()));
        out.push_str("</section>\n");
        return out;
    }

    for (idx, m) in listed(matches, cap).iter().enumerate() {
        let dialog_id = format!("{}-{}", prefix, idx + 1);
        let right = match kind {
            RoundKind::Last => {
                let score: &str = if m.score.is_empty() { " - " } else { &m.score };
                format!("<strong>{}</strong>", escape_html(score))
            }
            RoundKind::Next => "<span class=\"small muted\">Ver</span>".to_string(),
        };
        out.push_str(&format!(
            "<a class=\"match-row\" href=\"#{}\"><div><strong>{}</strong> <span class=\"muted\">vs</span> \
             <strong>{}</strong><div class=\"small muted\">{} · {}</div></div><div>{}</div></a>\n",
            dialog_id,
            escape_html(&m.home),
            escape_html(&m.away),
            escape_html(&m.date),
            escape_html(&m.stadium),
            right,
        ));
        out.push_str(&render_match_dialog(&dialog_id, &MatchDetail::build(m, standings)));
    }
    out.push_str("</section>\n");
    out
}

fn render_match_dialog(id: &str, d: &MatchDetail) -> String {
    let mut out = format!(
        "<dialog id=\"{}\" class=\"modal\">\n<h2>{}</h2>\n<div class=\"meta\">{}</div>\n",
        id,
        escape_html(&d.title),
        escape_html(&d.subtitle),
    );

    if let Some(score) = &d.score {
        out.push_str(&format!("<div class=\"score\"><strong>Resultado: {}</strong></div>\n", escape_html(score)));
    }

    if let Some((home, away)) = &d.context {
        out.push_str("<div class=\"context\">\n");
        out.push_str(&team_block(home));
        out.push_str(&team_block(away));
        out.push_str("</div>\n");
    }

    if d.has_scorers() {
        out.push_str("<div class=\"scorers\">\n");
        out.push_str(&scorer_block(&d.home, &d.home_scorers));
        out.push_str(&scorer_block(&d.away, &d.away_scorers));
        out.push_str("</div>\n");
    }

    out.push_str("</dialog>\n");
    out
}

fn team_block(ctx: &TeamContext) -> String {
    let dots: String = ctx
        .last5
        .iter()
        .map(|c| format!("<span class=\"result-dot\">{}</span>", escape_html(&c.to_string())))
        .collect();
    format!(
        "<div><strong>{}</strong><div class=\"small muted\">Pos: {} · Pts: {}</div><div class=\"last5\">{}</div></div>\n",
        escape_html(&ctx.team),
        escape_html(&ctx.position),
        escape_html(&ctx.points),
        dots,
    )
}

fn scorer_block(team: &str, scorers: &[String]) -> String {
    let lines: String = if scorers.is_empty() {
        format!("<div class=\"small muted\">{}</div>", NO_GOALS)
    } else {
        scorers.iter().map(|g| format!("<div>{}</div>", escape_html(g))).collect()
    };
    format!("<div><strong>{}</strong>{}</div>\n", escape_html(team), lines)
}

fn placeholder(msg: &str) -> String {
    format!("<div class=\"small muted\">{}</div>\n", escape_html(msg))
}
