//! Format sniffing and the low-level splitters shared by every record parser.
//!
//! Two encodings are in circulation:
//!   - delimited: one record per line, columns split on `|` (or `,` for the
//!     standings table)
//!   - block: records separated by a rule line of 3+ hyphens, fields written
//!     as `key: value` lines
//!
//! Which one a text uses is decided from its first meaningful line only.

use tracing::debug;

/// Result of sniffing a raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    DelimitedPipe,
    DelimitedComma,
    Block,
    Unrecognized,
}

impl TextFormat {
    pub fn delimiter(self) -> Option<u8> {
        match self {
            TextFormat::DelimitedPipe => Some(b'|'),
            TextFormat::DelimitedComma => Some(b','),
            TextFormat::Block | TextFormat::Unrecognized => None,
        }
    }
}

/// Drop a leading UTF-8 byte-order mark; editors on Windows like to add one.
pub fn strip_bom(raw: &str) -> &str {
    raw.strip_prefix('\u{FEFF}').unwrap_or(raw)
}

/// Trimmed, non-blank lines.
pub fn meaningful_lines(raw: &str) -> Vec<&str> {
    raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

/// News and match texts: pipe-delimited if the first line has a `|`,
/// block format otherwise.
pub fn sniff_records(lines: &[&str]) -> TextFormat {
    match lines.first() {
        Some(first) if first.contains('|') => TextFormat::DelimitedPipe,
        _ => TextFormat::Block,
    }
}

/// Standings texts: `|` wins over `,`; neither means the text is unusable.
pub fn sniff_table(lines: &[&str]) -> TextFormat {
    match lines.first() {
        Some(first) if first.contains('|') => TextFormat::DelimitedPipe,
        Some(first) if first.contains(',') => TextFormat::DelimitedComma,
        _ => TextFormat::Unrecognized,
    }
}

// ── Delimited ─────────────────────────────────────────────────────────────────

/// Split every line into trimmed columns. One row per line, always; quotes
/// carry no meaning and short rows are kept as they are.
pub fn split_delimited(lines: &[&str], delimiter: u8) -> Vec<Vec<String>> {
    let joined = lines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(joined.as_bytes());

    let mut rows = Vec::with_capacity(lines.len());
    for result in reader.records() {
        match result {
            Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
            Err(e) => {
                debug!("Delimited reader gave up ({}), splitting by hand", e);
                return split_by_hand(lines, delimiter);
            }
        }
    }

    if rows.len() != lines.len() {
        debug!("Delimited reader returned {} rows for {} lines", rows.len(), lines.len());
        return split_by_hand(lines, delimiter);
    }
    rows
}

fn split_by_hand(lines: &[&str], delimiter: u8) -> Vec<Vec<String>> {
    let delimiter = char::from(delimiter);
    lines
        .iter()
        .map(|l| l.split(delimiter).map(|c| c.trim().to_string()).collect())
        .collect()
}

/// Column `i`, or "" past the end of a short row.
pub fn col(cols: &[String], i: usize) -> &str {
    cols.get(i).map(String::as_str).unwrap_or("")
}

// ── Block ─────────────────────────────────────────────────────────────────────

fn is_rule(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 3 && t.bytes().all(|b| b == b'-')
}

/// Split a block-format text on hyphen rule lines. Blocks are trimmed and
/// empty ones dropped.
pub fn split_blocks(raw: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if is_rule(line) {
            blocks.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    blocks.push(current.join("\n"));

    blocks
        .into_iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect()
}

/// `key: value` split on the first colon. A line starting with a colon, or
/// without one, is not a field.
pub fn split_key_value(line: &str) -> Option<(&str, &str)> {
    match line.find(':') {
        Some(idx) if idx > 0 => Some((line[..idx].trim(), line[idx + 1..].trim())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom_only_at_start() {
        assert_eq!(strip_bom("\u{FEFF}title: x"), "title: x");
        assert_eq!(strip_bom("a\u{FEFF}b"), "a\u{FEFF}b");
        assert_eq!(strip_bom(""), "");
    }

    #[test]
    fn test_meaningful_lines_drop_blanks() {
        let lines = meaningful_lines("\n  a|b  \r\n\n   \nc\n");
        assert_eq!(lines, vec!["a|b", "c"]);
    }

    #[test]
    fn test_sniff_records() {
        assert_eq!(sniff_records(&["2025-01-01|Title|Lead"]), TextFormat::DelimitedPipe);
        assert_eq!(sniff_records(&["title: x", "a|b"]), TextFormat::Block);
        assert_eq!(sniff_records(&[]), TextFormat::Block);
    }

    #[test]
    fn test_sniff_table_prefers_pipe() {
        assert_eq!(sniff_table(&["1|A,B|50"]), TextFormat::DelimitedPipe);
        assert_eq!(sniff_table(&["pos,team,pts"]), TextFormat::DelimitedComma);
        assert_eq!(sniff_table(&["pos team pts"]), TextFormat::Unrecognized);
        assert_eq!(TextFormat::DelimitedComma.delimiter(), Some(b','));
        assert_eq!(TextFormat::Block.delimiter(), None);
    }

    #[test]
    fn test_split_delimited_keeps_every_line() {
        let rows = split_delimited(&["a | b |", "\"q|x", "solo"], b'|');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["a", "b", ""]);
        assert_eq!(rows[1], vec!["\"q", "x"]);
        assert_eq!(rows[2], vec!["solo"]);
    }

    #[test]
    fn test_col_defaults_to_empty() {
        let cols = vec!["x".to_string()];
        assert_eq!(col(&cols, 0), "x");
        assert_eq!(col(&cols, 5), "");
    }

    #[test]
    fn test_split_blocks_on_rules() {
        let raw = "title: A\nbody: one\n---\n\n-----\ntitle: B\n  ---  \n";
        let blocks = split_blocks(raw);
        assert_eq!(blocks, vec!["title: A\nbody: one", "title: B"]);
    }

    #[test]
    fn test_two_hyphens_are_not_a_rule() {
        assert_eq!(split_blocks("a: 1\n--\nb: 2").len(), 1);
    }

    #[test]
    fn test_split_key_value_first_colon() {
        assert_eq!(
            split_key_value("date: 2025-11-10T10:00:00"),
            Some(("date", "2025-11-10T10:00:00"))
        );
        assert_eq!(split_key_value(":orphan"), None);
        assert_eq!(split_key_value("no colon here"), None);
        assert_eq!(split_key_value("key:"), Some(("key", "")));
    }
}
