//! The newline-delimited text format: `<tag>:<k1>,<k2>,...` per record,
//! a bare tag for an empty structure.

use crate::error::PersistError;
use crate::record::{Record, StructureKind};

/// Encode records one per line, with a trailing newline.
pub fn encode(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(record.kind.as_tag());
        if !record.keys.is_empty() {
            out.push(':');
            let keys: Vec<String> = record.keys.iter().map(|k| k.to_string()).collect();
            out.push_str(&keys.join(","));
        }
        out.push('\n');
    }
    out
}

/// Decode a record per non-blank line. An unreadable key token is skipped
/// silently; a missing or unknown structure tag is an error, since guessing
/// the structure would corrupt the reload.
pub fn decode(input: &str) -> Result<Vec<Record>, PersistError> {
    let mut records = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (tag, rest) = match line.split_once(':') {
            Some((tag, rest)) => (tag.trim(), rest),
            None => (line, ""),
        };
        if tag.is_empty() {
            return Err(PersistError::MissingTag(idx + 1));
        }
        let kind = StructureKind::from_tag(tag)
            .ok_or_else(|| PersistError::UnknownStructure(tag.to_string()))?;
        let (keys, _skipped) = parse_keys(rest);
        records.push(Record { kind, keys });
    }
    Ok(records)
}

/// Parse comma-separated raw tokens into keys, skipping tokens that are
/// not integers and counting the skips. Accepts the full-width comma the
/// original save files contain alongside the ASCII one.
pub fn parse_keys(input: &str) -> (Vec<i64>, usize) {
    let mut keys = Vec::new();
    let mut skipped = 0;
    for token in input.split([',', '，']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<i64>() {
            Ok(key) => keys.push(key),
            Err(_) => skipped += 1,
        }
    }
    (keys, skipped)
}
