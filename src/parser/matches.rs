//! Match lists for both the last and the next round.
//!
//! Pipe lines carry no header, so the record shape is chosen by how many
//! columns a line has. Two result layouts exist in the wild (separate goal
//! columns and a pre-joined score); both are accepted.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::models::MatchRecord;
use crate::parser::cleaner::join_score;
use crate::parser::format::{
    col, meaningful_lines, sniff_records, split_blocks, split_delimited, split_key_value, strip_bom,
    TextFormat,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowShape {
    /// `home|away|stadium|date`
    Fixture,
    /// `home|away|score|stadium|date|scorers_home|scorers_away`
    JoinedScore,
    /// `home|away|gh|ga|stadium|date|scorers_home|scorers_away[|...]`
    SplitScore,
    /// Anything else: teams first, stadium and date last.
    Degraded,
}

const SHAPES: &[(RangeInclusive<usize>, RowShape)] = &[
    (4..=4, RowShape::Fixture),
    (7..=7, RowShape::JoinedScore),
    (8..=usize::MAX, RowShape::SplitScore),
];

impl RowShape {
    fn for_width(width: usize) -> Self {
        SHAPES
            .iter()
            .find(|(range, _)| range.contains(&width))
            .map(|(_, shape)| *shape)
            .unwrap_or(RowShape::Degraded)
    }

    fn extract(self, cols: &[String]) -> MatchRecord {
        let c = |i: usize| col(cols, i).to_string();

        match self {
            RowShape::Fixture => MatchRecord {
                home: c(0),
                away: c(1),
                stadium: c(2),
                date: c(3),
                ..Default::default()
            },
            RowShape::JoinedScore => MatchRecord {
                home: c(0),
                away: c(1),
                score: c(2),
                stadium: c(3),
                date: c(4),
                scorers_home: c(5),
                scorers_away: c(6),
                ..Default::default()
            },
            RowShape::SplitScore => MatchRecord {
                home: c(0),
                away: c(1),
                score: join_score(col(cols, 2), col(cols, 3)),
                stadium: c(4),
                date: c(5),
                scorers_home: c(6),
                scorers_away: c(7),
                ..Default::default()
            },
            RowShape::Degraded => {
                let from_end = |back: usize| {
                    cols.len()
                        .checked_sub(back)
                        .map(|i| col(cols, i).to_string())
                        .unwrap_or_default()
                };
                MatchRecord {
                    home: c(0),
                    away: c(1),
                    stadium: from_end(2),
                    date: from_end(1),
                    ..Default::default()
                }
            }
        }
    }
}

/// Parse a round's match list. Absent or blank text yields an empty list;
/// substituting sample fixtures is up to the caller.
pub fn parse_matches(raw: Option<&str>) -> Vec<MatchRecord> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let raw = strip_bom(raw);

    let lines = meaningful_lines(raw);
    if lines.is_empty() {
        return Vec::new();
    }

    match sniff_records(&lines) {
        TextFormat::DelimitedPipe => split_delimited(&lines, b'|')
            .iter()
            .map(|cols| {
                let shape = RowShape::for_width(cols.len());
                if shape == RowShape::Degraded {
                    debug!("Match line with {} columns, best-effort fields", cols.len());
                }
                shape.extract(cols)
            })
            .collect(),
        TextFormat::Block => split_blocks(raw).iter().map(|b| parse_block(b)).collect(),
        TextFormat::DelimitedComma | TextFormat::Unrecognized => Vec::new(),
    }
}

/// Every `key: value` line becomes a field; lines without a colon are skipped.
fn parse_block(block: &str) -> MatchRecord {
    let mut record = MatchRecord::default();

    for (key, value) in block.lines().filter_map(split_key_value) {
        let value = value.to_string();
        match key {
            "home" => record.home = value,
            "away" => record.away = value,
            "stadium" => record.stadium = value,
            "date" => record.date = value,
            "score" => record.score = value,
            "scorers_home" => record.scorers_home = value,
            "scorers_away" => record.scorers_away = value,
            _ => {
                record.extra.insert(key.to_string(), value);
            }
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<MatchRecord> {
        parse_matches(Some(raw))
    }

    #[test]
    fn test_shape_table() {
        assert_eq!(RowShape::for_width(4), RowShape::Fixture);
        assert_eq!(RowShape::for_width(7), RowShape::JoinedScore);
        assert_eq!(RowShape::for_width(8), RowShape::SplitScore);
        assert_eq!(RowShape::for_width(12), RowShape::SplitScore);
        for width in [0, 1, 2, 3, 5, 6] {
            assert_eq!(RowShape::for_width(width), RowShape::Degraded);
        }
    }

    #[test]
    fn test_four_columns_is_a_fixture() {
        let m = &parse("A|B|Stadium|2025-01-01")[0];
        assert_eq!(m.home, "A");
        assert_eq!(m.away, "B");
        assert_eq!(m.stadium, "Stadium");
        assert_eq!(m.date, "2025-01-01");
        assert_eq!(m.score, "");
        assert!(!m.is_played());
    }

    #[test]
    fn test_eight_columns_join_the_score() {
        let m = &parse("A|B|2|1|Stadium|2025-01-01|Scorer1|Scorer2")[0];
        assert_eq!(m.score, "2-1");
        assert_eq!(m.stadium, "Stadium");
        assert_eq!(m.date, "2025-01-01");
        assert_eq!(m.scorers_home, "Scorer1");
        assert_eq!(m.scorers_away, "Scorer2");
    }

    #[test]
    fn test_blank_goal_column_drops_stray_hyphen() {
        let m = &parse("A|B||1|Stadium|2025-01-01||Scorer2")[0];
        assert_eq!(m.score, "1");
        let m = &parse("A|B|3||Stadium|2025-01-01|Scorer1|")[0];
        assert_eq!(m.score, "3");
        let m = &parse("A|B|||Stadium|2025-01-01||")[0];
        assert_eq!(m.score, "");
    }

    #[test]
    fn test_extra_columns_past_eight_are_ignored() {
        let m = &parse("A|B|0|0|S|D|h|a|junk|more")[0];
        assert_eq!(m.scorers_away, "a");
        assert!(m.extra.is_empty());
    }

    #[test]
    fn test_seven_columns_keep_joined_score() {
        let m = &parse("A|B|3-2|Stadium|2025-01-01|X(10),Y(20)|Z(5)")[0];
        assert_eq!(m.score, "3-2");
        assert_eq!(m.home_scorers(), vec!["X(10)", "Y(20)"]);
        assert_eq!(m.away_scorers(), vec!["Z(5)"]);
    }

    #[test]
    fn test_odd_widths_take_stadium_and_date_from_the_end() {
        let m = &parse("A|B|x|Stadium|2025-01-01")[0];
        assert_eq!(m.home, "A");
        assert_eq!(m.stadium, "Stadium");
        assert_eq!(m.date, "2025-01-01");
        assert_eq!(m.score, "");

        let m = &parse("A|B")[0];
        assert_eq!(m.stadium, "A");
        assert_eq!(m.date, "B");
    }

    #[test]
    fn test_line_without_pipe_in_pipe_text_is_degraded() {
        let rows = parse("A|B|S|D\nlonely");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].home, "lonely");
        assert_eq!(rows[1].away, "");
        assert_eq!(rows[1].stadium, "");
        assert_eq!(rows[1].date, "lonely");
    }

    #[test]
    fn test_block_format_keys_are_verbatim() {
        let raw = "home: KFC Nise Team\naway: Golden Wind\ndate: 2025-11-20\nreferee: Ortiz\nno colon line\n---\nHome: Upper\naway: X";
        let rows = parse(raw);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].home, "KFC Nise Team");
        assert_eq!(rows[0].away, "Golden Wind");
        assert_eq!(rows[0].extra.get("referee").map(String::as_str), Some("Ortiz"));
        assert_eq!(rows[1].home, "");
        assert_eq!(rows[1].extra.get("Home").map(String::as_str), Some("Upper"));
    }

    #[test]
    fn test_leading_bom_keeps_first_key() {
        let m = &parse("\u{FEFF}home: A\naway: B")[0];
        assert_eq!(m.home, "A");
        assert!(m.extra.is_empty());

        let m = &parse("\u{FEFF}A|B|Stadium|2025-01-01")[0];
        assert_eq!(m.home, "A");
    }

    #[test]
    fn test_absent_and_blank_text_give_empty_list() {
        assert!(parse_matches(None).is_empty());
        assert!(parse("\n \n").is_empty());
    }

    #[test]
    fn test_order_is_preserved_and_unbounded() {
        let raw: String = (0..15)
            .map(|i| format!("H{}|A{}|S|2025-01-01", i, i))
            .collect::<Vec<_>>()
            .join("\n");
        let rows = parse(&raw);
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[14].home, "H14");
    }
}
