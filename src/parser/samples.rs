//! Placeholder content shown while the league's data files do not exist yet.

use crate::models::{MatchRecord, NewsArticle, StandingsRow};
use crate::parser::cleaner::derive_last5;

/// Swappable provider of the fallback datasets.
pub trait SampleDataset: Send + Sync {
    fn news(&self) -> Vec<NewsArticle>;
    fn standings(&self) -> Vec<StandingsRow>;
    fn last_round(&self) -> Vec<MatchRecord>;
    fn next_round(&self) -> Vec<MatchRecord>;
}

/// The hand-written dataset bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSamples;

impl SampleDataset for BuiltinSamples {
    fn news(&self) -> Vec<NewsArticle> {
        vec![
            NewsArticle {
                title: "Inicio de la Temporada T4: Expectación máxima".into(),
                date: "2025-11-10T10:00:00".into(),
                author: "Comité".into(),
                body: "La liga arranca con cambios... Esta es una noticia de ejemplo para \
                       comprobar la previsualización y el modal de lectura completa."
                    .into(),
            },
            NewsArticle {
                title: "KFC Nise ficha sorpresa".into(),
                date: "2025-11-09T16:20:00".into(),
                author: "Redacción".into(),
                body: "Rumores de mercado... Otra noticia de ejemplo para rellenar la lista.".into(),
            },
        ]
    }

    fn standings(&self) -> Vec<StandingsRow> {
        vec![
            sample_row(["1", "Aston Villa", "78", "34", "23", "9", "2", "91", "47", "44", "VVEDV"]),
            sample_row(["2", "KFC Nise Team", "76", "34", "21", "13", "0", "87", "49", "38", "VVVVE"]),
        ]
    }

    fn last_round(&self) -> Vec<MatchRecord> {
        vec![MatchRecord {
            home: "KFC Nise Team".into(),
            away: "Exeter City".into(),
            stadium: "KFC Nise Arena".into(),
            date: "2025-11-12".into(),
            score: "2-1".into(),
            scorers_home: "Falco(50),Shawn(91)".into(),
            scorers_away: "Amemiya(44)".into(),
            ..Default::default()
        }]
    }

    fn next_round(&self) -> Vec<MatchRecord> {
        vec![MatchRecord {
            home: "KFC Nise Team".into(),
            away: "Golden Wind".into(),
            stadium: "KFC Nise Arena".into(),
            date: "2025-11-20".into(),
            ..Default::default()
        }]
    }
}

fn sample_row(c: [&str; 11]) -> StandingsRow {
    StandingsRow {
        position: c[0].into(),
        team: c[1].into(),
        points: c[2].into(),
        played: c[3].into(),
        wins: c[4].into(),
        draws: c[5].into(),
        losses: c[6].into(),
        goals_for: c[7].into(),
        goals_against: c[8].into(),
        goal_difference: c[9].into(),
        form: c[10].into(),
        last5: derive_last5(c[10]),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_samples_are_renderable() {
        let s = BuiltinSamples;
        assert_eq!(s.news().len(), 2);
        assert_eq!(s.standings().len(), 2);
        assert_eq!(s.standings()[0].last5, vec!['V', 'V', 'E', 'D', 'V']);
        assert!(s.last_round()[0].is_played());
        assert!(!s.next_round()[0].is_played());
    }
}
