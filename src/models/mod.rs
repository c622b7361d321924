use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── News ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub date: String, // ordering key, parsed on demand
    pub author: String,
    pub body: String,
}

// ── Standings ─────────────────────────────────────────────────────────────────

/// One table row. Numeric columns stay as the source wrote them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StandingsRow {
    pub position: String,
    pub team: String,
    pub points: String,
    pub played: String,
    pub wins: String,
    pub draws: String,
    pub losses: String,
    pub goals_for: String,
    pub goals_against: String,
    pub goal_difference: String,
    pub form: String,
    /// At most 5 result codes, most recent last.
    pub last5: Vec<char>,
    /// Header columns with no fixed slot, keyed verbatim.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

// ── Matches ───────────────────────────────────────────────────────────────────

/// A played match (score/scorers filled) or a scheduled fixture.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub home: String,
    pub away: String,
    pub stadium: String,
    pub date: String,
    pub score: String,         // "A-B" or empty
    pub scorers_home: String,  // comma-joined
    pub scorers_away: String,
    /// Block-format keys with no fixed slot, keyed verbatim.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl MatchRecord {
    pub fn is_played(&self) -> bool {
        !self.score.is_empty()
            || !self.scorers_home.trim().is_empty()
            || !self.scorers_away.trim().is_empty()
    }

    pub fn home_scorers(&self) -> Vec<String> {
        split_scorers(&self.scorers_home)
    }

    pub fn away_scorers(&self) -> Vec<String> {
        split_scorers(&self.scorers_away)
    }
}

fn split_scorers(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

// ── Cross-reference ───────────────────────────────────────────────────────────

/// A team's table context as shown next to a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamContext {
    pub team: String,
    pub position: String,
    pub points: String,
    pub last5: Vec<char>,
    pub found: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorers_split_into_lines() {
        let m = MatchRecord {
            scorers_home: "Falco(50), Shawn(91)".into(),
            scorers_away: " Amemiya(44) ,".into(),
            ..Default::default()
        };
        assert_eq!(m.home_scorers(), vec!["Falco(50)", "Shawn(91)"]);
        assert_eq!(m.away_scorers(), vec!["Amemiya(44)"]);
    }

    #[test]
    fn test_fixture_is_not_played() {
        let m = MatchRecord {
            home: "A".into(),
            away: "B".into(),
            ..Default::default()
        };
        assert!(!m.is_played());

        let m = MatchRecord { score: "2-1".into(), ..m };
        assert!(m.is_played());
    }
}
