use crate::model::CoefficientSet;

/// Parse `key=value` rc text into a coefficient set.
///
/// Blank lines and `#` comments are ignored. Everything else must split on
/// the first `=` into a non-empty key and a base-10 integer; lines that
/// don't are returned as dropped instead of failing the parse. A later
/// line for the same key replaces the earlier value.
pub fn parse_rc(source: &str) -> (CoefficientSet, Vec<String>) {
    let mut set = CoefficientSet::new();
    let mut dropped = Vec::new();

    for raw in source.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Some((key, value)) => set.insert(key, value),
            None => dropped.push(raw.to_string()),
        }
    }

    (set, dropped)
}

fn parse_line(line: &str) -> Option<(&str, i64)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = value.trim().parse::<i64>().ok()?;
    Some((key, value))
}
