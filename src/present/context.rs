//! Cross-reference between a match and the table: position, points and
//! recent results for each side.

use crate::models::{MatchRecord, StandingsRow, TeamContext};

/// Shown for a team the table does not list.
pub const NO_VALUE: &str = "-";

/// Look a team up by trimmed, case-insensitive exact name. Rows with an empty
/// name never match.
pub fn find_team<'a>(team: &str, standings: &'a [StandingsRow]) -> Option<&'a StandingsRow> {
    let wanted = team.trim().to_lowercase();
    standings
        .iter()
        .find(|r| !r.team.is_empty() && r.team.trim().to_lowercase() == wanted)
}

pub fn team_context(team: &str, standings: &[StandingsRow]) -> TeamContext {
    match find_team(team, standings) {
        Some(row) => TeamContext {
            team: team.to_string(),
            position: row.position.clone(),
            points: row.points.clone(),
            last5: row.last5.clone(),
            found: true,
        },
        None => TeamContext {
            team: team.to_string(),
            position: NO_VALUE.to_string(),
            points: NO_VALUE.to_string(),
            last5: Vec::new(),
            found: false,
        },
    }
}

/// Context for both sides, or `None` when there is nothing to show: an empty
/// table or a match without team names.
pub fn match_context(m: &MatchRecord, standings: &[StandingsRow]) -> Option<(TeamContext, TeamContext)> {
    if standings.is_empty() || (m.home.is_empty() && m.away.is_empty()) {
        return None;
    }
    Some((team_context(&m.home, standings), team_context(&m.away, standings)))
}
