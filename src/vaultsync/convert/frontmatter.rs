//! Front matter delimiter extraction and line-oriented field parsing.
//!
//! Only the `---` fenced block at the very start of the file is recognized.
//! Field lines are `key: value`; this is deliberately not a YAML parser, so
//! nested structures and multi-line values are read line by line like
//! everything else.

use crate::model::FrontMatter;
use once_cell::sync::Lazy;
use regex::Regex;

/// `---\n`, then the shortest run of any characters (newlines included) up to
/// the first `\n---\n`, then everything else as the body. Anchored at both ends.
static DELIMITED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").expect("front matter regex"));

/// Splits raw note text into its front matter block and body.
/// Returns `None` when the text does not open with a fenced block.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let caps = DELIMITED.captures(text)?;
    let front = caps.get(1)?.as_str();
    let body = caps.get(2)?.as_str();
    Some((front, body))
}

/// Parses `key: value` lines. Colons after the first are kept in the value;
/// every `:`-separated segment is trimmed before being rejoined.
pub fn parse_fields(block: &str) -> FrontMatter {
    let mut fields = FrontMatter::default();

    for line in block.split('\n') {
        let mut segments = line.split(':').map(str::trim);
        let key = match segments.next() {
            Some(k) if !k.is_empty() => k,
            _ => continue,
        };
        let rest: Vec<&str> = segments.collect();
        if rest.is_empty() {
            continue;
        }
        let value = rest.join(":");
        if value.is_empty() {
            continue;
        }
        fields.insert(key, value);
    }

    fields
}
