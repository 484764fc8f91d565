//! Line-oriented front-matter extraction for SKILL.md files.
//!
//! This is deliberately not a YAML parser: the metadata contract is flat
//! `key: value` pairs, and skill files in the wild contain enough almost-YAML
//! that a strict parser would reject files we want to accept. Anything the
//! reducer does not recognize is skipped, never an error.

use std::collections::HashMap;

/// Parse the leading `---`-delimited block of a skill file into a flat map.
///
/// Returns an empty map when the text does not start with `---` or the
/// closing delimiter never appears. Within the block, blank lines, `#`
/// comment lines, and lines without a `:` are skipped; keys and values are
/// trimmed; a value wrapped in one matching pair of single or double quotes
/// loses exactly that pair. A duplicated key keeps the last value.
pub fn parse(text: &str) -> HashMap<String, String> {
    let mut data = HashMap::new();

    if !text.starts_with("---") {
        return data;
    }
    let parts: Vec<&str> = text.splitn(3, "---").collect();
    if parts.len() < 3 {
        return data;
    }

    for line in parts[1].lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            data.insert(
                key.trim().to_string(),
                strip_quote_pair(value.trim()).to_string(),
            );
        }
    }

    data
}

/// Remove one layer of wrapping quotes, if the value carries a matching pair.
/// A lone quote character is not a pair and is left alone.
fn strip_quote_pair(value: &str) -> &str {
    if value.len() >= 2 {
        let quoted = (value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\''));
        if quoted {
            return &value[1..value.len() - 1];
        }
    }
    value
}
