//! Line format for the persisted word library.
//!
//! One record per line, four tab-separated fields:
//!
//! ```text
//! <folder>\t<english>\t<chinese>\t<error count>\n
//! ```
//!
//! The error count may be missing on files written before miss tracking
//! existed; it then defaults to 0. Fields are assumed tab- and
//! newline-free, which the input layer enforces before text reaches the
//! store.

use crate::error::{Result, VocabError};
use crate::store::{WordEntry, WordStore};

/// Render every entry of the store in the on-disk line format.
pub fn serialize(store: &WordStore) -> String {
    let mut out = String::new();
    for entry in store.entries() {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\n",
            entry.folder, entry.english, entry.chinese, entry.error_count
        ));
    }
    out
}

/// Parse one record line. `number` is the 1-based line number used in the
/// malformed-record error.
pub fn parse_line(line: &str, number: usize) -> Result<WordEntry> {
    let mut parts = line.splitn(4, '\t');
    let folder = parts.next().unwrap_or("").trim();
    let english = parts.next().unwrap_or("").trim();
    let chinese = parts.next().unwrap_or("").trim();

    if folder.is_empty() || english.is_empty() || chinese.is_empty() {
        return Err(VocabError::MalformedRecord { line: number });
    }

    // A missing or unparsable count is an old-format line, not an error.
    let error_count = parts
        .next()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(0);

    Ok(WordEntry {
        english: english.to_string(),
        chinese: chinese.to_string(),
        folder: folder.to_string(),
        error_count,
    })
}

/// Parse a whole file, skipping blank and malformed lines.
pub fn deserialize(data: &str) -> Vec<WordEntry> {
    let mut entries = Vec::new();
    for (i, line) in data.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        match parse_line(line, i + 1) {
            Ok(entry) => entries.push(entry),
            Err(e) => log::warn!("skipping record: {e}"),
        }
    }
    entries
}
