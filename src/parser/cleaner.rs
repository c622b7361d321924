use chrono::{DateTime, NaiveDate, NaiveDateTime};

// ── Dates ─────────────────────────────────────────────────────────────────────

/// Parse a publication date: ISO (with or without time / offset), or the
/// usual hand-typed variants. "2025-11-10T10:00:00" | "2025-11-10" | "10/11/2025"
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%b %d, %Y", "%d %b %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Sort key in epoch millis. Missing or unparseable dates sort as 0.
pub fn date_sort_key(s: &str) -> i64 {
    parse_timestamp(s)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

// ── Text ──────────────────────────────────────────────────────────────────────

/// Collapse runs of 2+ whitespace characters to one space, then trim.
/// Single whitespace characters are left as they are.
pub fn collapse_ws_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = String::new();

    for c in s.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        flush_run(&mut out, &mut run);
        out.push(c);
    }
    flush_run(&mut out, &mut run);

    out.trim().to_string()
}

fn flush_run(out: &mut String, run: &mut String) {
    match run.chars().count() {
        0 => {}
        1 => out.push_str(run),
        _ => out.push(' '),
    }
    run.clear();
}

/// Collapse every whitespace run to one space and trim. "a \n  b" → "a b"
pub fn squash_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Standings helpers ─────────────────────────────────────────────────────────

/// Last 5 result codes of a streak, whitespace ignored. Shorter streaks give
/// fewer codes.
pub fn derive_last5(form: &str) -> Vec<char> {
    let codes: Vec<char> = form.chars().filter(|c| !c.is_whitespace()).collect();
    let start = codes.len().saturating_sub(5);
    codes[start..].to_vec()
}

/// A value that could be a streak: only `V E D` (any case), spaces, hyphens
/// and commas, and at most 20 characters once trimmed.
pub fn looks_like_streak(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_whitespace() || matches!(c, 'V' | 'v' | 'E' | 'e' | 'D' | 'd' | '-' | ','))
        && s.trim().chars().count() <= 20
}

/// Whether a header candidate reads as a number. Blank counts as numeric (0).
pub fn is_numeric_like(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return true;
    }

    let unsigned = s.trim_start_matches(['+', '-']);
    if matches!(unsigned, "Infinity") {
        return true;
    }
    if !unsigned.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '.') {
        // rules out "inf", "nan" and friends that f64::from_str accepts
        return false;
    }

    if s.len() > 2 && s.is_char_boundary(2) {
        let radix = match &s[..2] {
            "0x" | "0X" => Some(16),
            "0o" | "0O" => Some(8),
            "0b" | "0B" => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return u64::from_str_radix(&s[2..], radix).is_ok();
        }
    }

    s.parse::<f64>().is_ok()
}

pub fn has_alpha(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
}

/// Leading integer of a position cell. "3" → 3 | "3º" → 3 | "-" → None
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

// ── Match helpers ─────────────────────────────────────────────────────────────

/// Join separate goal columns into "A-B". A blank side leaves a stray hyphen,
/// which is dropped: ("", "1") → "1" | ("2", "") → "2" | ("", "") → ""
pub fn join_score(home_goals: &str, away_goals: &str) -> String {
    strip_stray_hyphen(&format!("{}-{}", home_goals, away_goals))
}

/// Drop one leading hyphen, or failing that one trailing hyphen, then the
/// first doubled hyphen.
pub fn strip_stray_hyphen(s: &str) -> String {
    let s = match s.strip_prefix('-') {
        Some(rest) => rest,
        None => s.strip_suffix('-').unwrap_or(s),
    };
    s.replacen("--", "", 1)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
