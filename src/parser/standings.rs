use tracing::{debug, info};

use crate::models::StandingsRow;
use crate::parser::cleaner::{collapse_ws_runs, derive_last5, has_alpha, is_numeric_like, looks_like_streak};
use crate::parser::format::{
    col, meaningful_lines, sniff_table, split_delimited, strip_bom, TextFormat,
};
use crate::parser::samples::SampleDataset;

/// Parse a standings table (the live table and the prediction share this).
///
/// Accepts `|` or `,` delimited rows, with or without a header row. Absent
/// text, or a first line with neither delimiter, yields the sample table.
/// Rows keep file order and are never dropped.
pub fn parse_standings(raw: Option<&str>, samples: &dyn SampleDataset) -> Vec<StandingsRow> {
    let Some(raw) = raw else {
        debug!("No standings text, using sample table");
        return samples.standings();
    };
    let raw = strip_bom(raw);

    let lines = meaningful_lines(raw);
    if lines.is_empty() {
        return Vec::new();
    }

    let delimiter = match sniff_table(&lines) {
        format @ (TextFormat::DelimitedPipe | TextFormat::DelimitedComma) => format.delimiter(),
        TextFormat::Block | TextFormat::Unrecognized => None,
    };
    let Some(delimiter) = delimiter else {
        info!("Standings text has no recognised delimiter, using sample table");
        return samples.standings();
    };

    let mut rows = split_delimited(&lines, delimiter);
    let header = if rows.first().is_some_and(|first| is_header(first)) {
        Some(rows.remove(0))
    } else {
        None
    };
    debug!("Standings: {} rows, header={:?}", rows.len(), header);

    rows.iter()
        .map(|cols| match &header {
            Some(header) => from_header(header, cols),
            None => positional(cols),
        })
        .map(finish)
        .collect()
}

/// First column not a number and some column has a letter.
fn is_header(cols: &[String]) -> bool {
    !is_numeric_like(col(cols, 0)) && cols.iter().any(|c| has_alpha(c))
}

fn from_header(header: &[String], cols: &[String]) -> StandingsRow {
    let mapped: Vec<(&str, &str)> = header
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), col(cols, i)))
        .collect();

    let mut row = StandingsRow::default();
    for (name, value) in &mapped {
        set_field(&mut row, name, value);
    }

    if row.form.is_empty() {
        if let Some((_, streak)) = mapped.iter().find(|(_, v)| looks_like_streak(v)) {
            row.form = streak.to_string();
        }
    }
    row
}

fn set_field(row: &mut StandingsRow, name: &str, value: &str) {
    let value = value.to_string();
    match name {
        "pos" => row.position = value,
        "team" => row.team = value,
        "pts" => row.points = value,
        "pj" => row.played = value,
        "v" => row.wins = value,
        "e" => row.draws = value,
        "p" => row.losses = value,
        "gf" => row.goals_for = value,
        "gc" => row.goals_against = value,
        "dg" => row.goal_difference = value,
        "form" => row.form = value,
        _ => {
            row.extra.insert(name.to_string(), value);
        }
    }
}

/// `pos|team|pts|pj|v|e|p|gf|gc|dg|[pct|]form`: some exports put an extra
/// column before the streak, so column 11 wins over column 10 when filled.
fn positional(cols: &[String]) -> StandingsRow {
    let form = match col(cols, 11) {
        "" => col(cols, 10),
        f => f,
    };

    StandingsRow {
        position: col(cols, 0).to_string(),
        team: col(cols, 1).to_string(),
        points: col(cols, 2).to_string(),
        played: col(cols, 3).to_string(),
        wins: col(cols, 4).to_string(),
        draws: col(cols, 5).to_string(),
        losses: col(cols, 6).to_string(),
        goals_for: col(cols, 7).to_string(),
        goals_against: col(cols, 8).to_string(),
        goal_difference: col(cols, 9).to_string(),
        form: form.to_string(),
        ..Default::default()
    }
}

fn finish(mut row: StandingsRow) -> StandingsRow {
    row.form = collapse_ws_runs(&row.form);
    row.last5 = derive_last5(&row.form);
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::samples::BuiltinSamples;

    fn parse(raw: &str) -> Vec<StandingsRow> {
        parse_standings(Some(raw), &BuiltinSamples)
    }

    #[test]
    fn test_pipe_without_header_twelve_columns() {
        let rows = parse("1|Team A|50|20|15|3|2|40|10|30||VEDVV");
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!(r.position, "1");
        assert_eq!(r.team, "Team A");
        assert_eq!(r.points, "50");
        assert_eq!(r.played, "20");
        assert_eq!(r.goal_difference, "30");
        assert_eq!(r.form, "VEDVV");
        assert_eq!(r.last5, vec!['V', 'E', 'D', 'V', 'V']);
    }

    #[test]
    fn test_form_falls_back_to_column_ten() {
        let rows = parse("3|Team C|41|20|12|5|3|33|20|13|D  V   V E D V");
        assert_eq!(rows[0].form, "D V V E D V");
        assert_eq!(rows[0].last5, vec!['V', 'V', 'E', 'D', 'V']);
    }

    #[test]
    fn test_pct_column_before_form_is_skipped() {
        let rows = parse("2|Team B|44|20|13|5|2|35|15|20|0.73|V V E");
        assert_eq!(rows[0].form, "V V E");
        assert_eq!(rows[0].last5, vec!['V', 'V', 'E']);
    }

    #[test]
    fn test_comma_header_without_streak() {
        let rows = parse("pos,team,pts\n1,Team A,50");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, "1");
        assert_eq!(rows[0].team, "Team A");
        assert_eq!(rows[0].points, "50");
        assert_eq!(rows[0].form, "");
        assert!(rows[0].last5.is_empty());
    }

    #[test]
    fn test_header_streak_found_under_other_name() {
        let rows = parse("pos,team,pts,racha,notes\n1,Team A,50,V E  D V,top");
        assert_eq!(rows[0].form, "V E D V");
        assert_eq!(rows[0].last5, vec!['V', 'E', 'D', 'V']);
        assert_eq!(rows[0].extra.get("racha").map(String::as_str), Some("V E  D V"));
        assert_eq!(rows[0].extra.get("notes").map(String::as_str), Some("top"));
    }

    #[test]
    fn test_header_names_are_verbatim() {
        let rows = parse("Pos|Team|pts\n1|Team A|50");
        assert_eq!(rows[0].position, "");
        assert_eq!(rows[0].team, "");
        assert_eq!(rows[0].points, "50");
        assert_eq!(rows[0].extra.get("Team").map(String::as_str), Some("Team A"));
    }

    #[test]
    fn test_numeric_first_row_is_data() {
        let rows = parse("1,Team A,50\n2,Team B,47");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].team, "Team B");
    }

    #[test]
    fn test_short_rows_are_kept() {
        let rows = parse("1|Team A\n2");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].points, "");
        assert_eq!(rows[1].position, "2");
        assert_eq!(rows[1].team, "");
    }

    #[test]
    fn test_non_numeric_values_pass_through() {
        let rows = parse("1|Team A|n/a|?|x");
        assert_eq!(rows[0].points, "n/a");
        assert_eq!(rows[0].played, "?");
    }

    #[test]
    fn test_absent_text_gives_sample_table() {
        let rows = parse_standings(None, &BuiltinSamples);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team, "Aston Villa");
    }

    #[test]
    fn test_unrecognised_delimiter_gives_sample_table() {
        let rows = parse("1 Team A 50");
        assert_eq!(rows, BuiltinSamples.standings());
    }

    #[test]
    fn test_leading_bom_does_not_hide_header() {
        let rows = parse("\u{FEFF}pos,team,pts\n1,Team A,50");
        assert_eq!(rows[0].position, "1");
        assert_eq!(rows[0].team, "Team A");
        assert!(rows[0].extra.is_empty());
    }

    #[test]
    fn test_blank_text_gives_empty_table() {
        assert!(parse("\n   \n").is_empty());
    }
}
