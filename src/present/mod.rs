//! Data shaping for the widgets: defaults, snippets, table zones, form
//! badges, match details. No layout lives here; `html` and `text` render.

pub mod context;
pub mod html;
pub mod text;

use crate::models::{MatchRecord, NewsArticle, StandingsRow, TeamContext};
use crate::parser::cleaner::{leading_int, parse_timestamp, squash_ws};

pub use context::{match_context, team_context, NO_VALUE};

pub const UNTITLED: &str = "Sin título";
pub const DEFAULT_AUTHOR: &str = "Staff";
pub const NO_NEWS: &str = "No hay noticias.";
pub const NO_NEWS_SHORT: &str = "Sin noticias";
pub const NO_STANDINGS: &str = "Clasificación no disponible.";
pub const NO_LAST_ROUND: &str = "No hay registros de la última jornada.";
pub const NO_NEXT_ROUND: &str = "No hay partidos programados.";
pub const NO_GOALS: &str = "Sin goles";

// ── Escaping ──────────────────────────────────────────────────────────────────

/// Neutralise markup before any field reaches a page.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

// ── News ──────────────────────────────────────────────────────────────────────

pub fn display_title(a: &NewsArticle) -> &str {
    if a.title.is_empty() { UNTITLED } else { &a.title }
}

pub fn display_author(a: &NewsArticle) -> &str {
    if a.author.is_empty() { DEFAULT_AUTHOR } else { &a.author }
}

/// "10/11/2025 10:00" for parseable dates, the raw text otherwise.
pub fn display_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => raw.trim().to_string(),
    }
}

/// Whitespace-collapsed body, cut to `max_chars` with an ellipsis.
pub fn snippet(body: &str, max_chars: usize) -> String {
    let flat = squash_ws(body);
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

/// Sidebar line for the newest article.
pub fn latest_headline(news: &[NewsArticle]) -> String {
    match news.first() {
        Some(top) => {
            let day = parse_timestamp(&top.date)
                .map(|dt| dt.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| top.date.clone());
            format!("{} · {}", display_title(top), day)
        }
        None => NO_NEWS_SHORT.to_string(),
    }
}

// ── Standings ─────────────────────────────────────────────────────────────────

/// Table band a position falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Leader,
    Top3,
    Top5,
    Top8,
    Playoff,
    Relegation,
}

impl Zone {
    pub fn from_position(position: &str) -> Option<Zone> {
        match leading_int(position)? {
            1 => Some(Zone::Leader),
            2..=3 => Some(Zone::Top3),
            4..=5 => Some(Zone::Top5),
            6..=8 => Some(Zone::Top8),
            19..=20 => Some(Zone::Playoff),
            21..=24 => Some(Zone::Relegation),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Zone::Leader => "top1",
            Zone::Top3 => "top3",
            Zone::Top5 => "top4_5",
            Zone::Top8 => "top6_7_8",
            Zone::Playoff => "playoff",
            Zone::Relegation => "descenso",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormBadge {
    Win,
    Draw,
    Loss,
    Blank,
}

impl FormBadge {
    pub fn from_code(c: char) -> Self {
        match c {
            'V' | 'v' => FormBadge::Win,
            'E' | 'e' => FormBadge::Draw,
            'D' | 'd' => FormBadge::Loss,
            _ => FormBadge::Blank,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            FormBadge::Win => 'V',
            FormBadge::Draw => 'E',
            FormBadge::Loss => 'D',
            FormBadge::Blank => '·',
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FormBadge::Win => "win",
            FormBadge::Draw => "draw",
            FormBadge::Loss => "loss",
            FormBadge::Blank => "none",
        }
    }
}

/// The table's form column: the first five codes of the streak, separators
/// removed, padded with blanks.
pub fn form_badges(form: &str) -> [FormBadge; 5] {
    let mut badges = [FormBadge::Blank; 5];
    let codes = form.chars().filter(|c| !c.is_whitespace() && *c != ',');
    for (slot, c) in badges.iter_mut().zip(codes) {
        *slot = FormBadge::from_code(c);
    }
    badges
}

/// "1. Aston Villa (78) · 2. KFC Nise Team (76)"
pub fn sidebar_top(rows: &[StandingsRow], n: usize) -> String {
    rows.iter()
        .take(n)
        .map(|r| {
            let pts: &str = if r.points.is_empty() { "0" } else { &r.points };
            format!("{}. {} ({})", r.position, r.team, pts)
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

// ── Matches ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    Last,
    Next,
}

impl RoundKind {
    pub fn empty_message(self) -> &'static str {
        match self {
            RoundKind::Last => NO_LAST_ROUND,
            RoundKind::Next => NO_NEXT_ROUND,
        }
    }
}

/// The parsed round, or the sample round when the parse came back empty.
pub fn round_or_sample(parsed: &[MatchRecord], sample: impl FnOnce() -> Vec<MatchRecord>) -> Vec<MatchRecord> {
    if parsed.is_empty() { sample() } else { parsed.to_vec() }
}

/// The head of a match list as shown in a listing.
pub fn listed(matches: &[MatchRecord], cap: usize) -> &[MatchRecord] {
    &matches[..matches.len().min(cap)]
}

/// Everything a match detail view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchDetail {
    pub home: String,
    pub away: String,
    pub title: String,
    pub subtitle: String,
    pub score: Option<String>,
    pub context: Option<(TeamContext, TeamContext)>,
    pub home_scorers: Vec<String>,
    pub away_scorers: Vec<String>,
}

impl MatchDetail {
    pub fn build(m: &MatchRecord, standings: &[StandingsRow]) -> Self {
        let subtitle = [m.date.as_str(), m.stadium.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");

        Self {
            home: m.home.clone(),
            away: m.away.clone(),
            title: format!("{} vs {}", m.home, m.away),
            subtitle,
            score: (!m.score.is_empty()).then(|| m.score.clone()),
            context: match_context(m, standings),
            home_scorers: m.home_scorers(),
            away_scorers: m.away_scorers(),
        }
    }

    pub fn has_scorers(&self) -> bool {
        !self.home_scorers.is_empty() || !self.away_scorers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{BuiltinSamples, SampleDataset};

    #[test]
    fn test_escape_html_neutralises_markup() {
        let nasty = r#"<script>alert("x&y")</script> 'q' `t`"#;
        let safe = escape_html(nasty);
        assert_eq!(
            safe,
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt; &#39;q&#39; &#96;t&#96;"
        );
        for c in ['<', '>', '"', '\'', '`'] {
            assert!(!safe.contains(c), "{} survived", c);
        }
        assert_eq!(escape_html("Crónica · 2-1"), "Crónica · 2-1");
    }

    #[test]
    fn test_news_display_defaults() {
        let a = NewsArticle::default();
        assert_eq!(display_title(&a), UNTITLED);
        assert_eq!(display_author(&a), DEFAULT_AUTHOR);
        assert_eq!(display_date("2025-11-10T10:00:00"), "10/11/2025 10:00");
        assert_eq!(display_date("mañana"), "mañana");
    }

    #[test]
    fn test_snippet_cuts_on_chars() {
        assert_eq!(snippet("  a\n\nb  ", 10), "a b");
        assert_eq!(snippet("ááááá ééééé", 5), "ááááá…");
        assert_eq!(snippet("abc def", 4), "abc…");
    }

    #[test]
    fn test_latest_headline() {
        assert_eq!(
            latest_headline(&BuiltinSamples.news()),
            "Inicio de la Temporada T4: Expectación máxima · 10/11/2025"
        );
        assert_eq!(latest_headline(&[]), NO_NEWS_SHORT);
    }

    #[test]
    fn test_zones() {
        assert_eq!(Zone::from_position("1"), Some(Zone::Leader));
        assert_eq!(Zone::from_position("3"), Some(Zone::Top3));
        assert_eq!(Zone::from_position("5"), Some(Zone::Top5));
        assert_eq!(Zone::from_position("8"), Some(Zone::Top8));
        assert_eq!(Zone::from_position("12"), None);
        assert_eq!(Zone::from_position("20"), Some(Zone::Playoff));
        assert_eq!(Zone::from_position("24"), Some(Zone::Relegation));
        assert_eq!(Zone::from_position("x"), None);
        assert_eq!(Zone::Top5.css_class(), "top4_5");
    }

    #[test]
    fn test_form_badges_take_first_five() {
        use FormBadge::*;
        assert_eq!(form_badges("V, E d  x V V"), [Win, Draw, Loss, Blank, Win]);
        assert_eq!(form_badges("VE"), [Win, Draw, Blank, Blank, Blank]);
        assert_eq!(form_badges(""), [Blank; 5]);
    }

    #[test]
    fn test_sidebar_top() {
        let mut rows = BuiltinSamples.standings();
        rows[1].points.clear();
        assert_eq!(sidebar_top(&rows, 5), "1. Aston Villa (78) · 2. KFC Nise Team (0)");
        assert_eq!(sidebar_top(&rows, 1), "1. Aston Villa (78)");
    }

    #[test]
    fn test_round_or_sample() {
        let sample = || BuiltinSamples.last_round();
        assert_eq!(round_or_sample(&[], sample), BuiltinSamples.last_round());

        let parsed = vec![MatchRecord { home: "X".into(), ..Default::default() }];
        assert_eq!(round_or_sample(&parsed, sample), parsed);
    }

    #[test]
    fn test_listing_is_capped() {
        let many = vec![MatchRecord::default(); 12];
        assert_eq!(listed(&many, 10).len(), 10);
        assert_eq!(listed(&many[..3], 10).len(), 3);
    }

    #[test]
    fn test_match_detail() {
        let m = BuiltinSamples.last_round().remove(0);
        let d = MatchDetail::build(&m, &BuiltinSamples.standings());
        assert_eq!(d.title, "KFC Nise Team vs Exeter City");
        assert_eq!(d.subtitle, "2025-11-12 · KFC Nise Arena");
        assert_eq!(d.score.as_deref(), Some("2-1"));
        assert_eq!(d.home_scorers, vec!["Falco(50)", "Shawn(91)"]);
        assert!(d.has_scorers());
        let (home, away) = d.context.clone().unwrap();
        assert_eq!(home.position, "2");
        assert_eq!(away.position, NO_VALUE);

        let fixture = MatchDetail::build(&BuiltinSamples.next_round()[0], &[]);
        assert!(fixture.score.is_none());
        assert!(fixture.context.is_none());
        assert!(!fixture.has_scorers());
    }
}
