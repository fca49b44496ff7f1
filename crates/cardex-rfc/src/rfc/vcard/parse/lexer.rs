//! Escape-aware content line lexing.

/// Splits `s` on every separator that is not preceded by a backslash.
///
/// Only the immediately preceding character is inspected, matching the
/// lookbehind rule vCard exporters rely on in practice.
#[must_use]
pub fn split_unescaped(s: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev = None;

    for (i, c) in s.char_indices() {
        if c == separator && prev != Some('\\') {
            parts.push(&s[start..i]);
            start = i + separator.len_utf8();
        }
        prev = Some(c);
    }

    parts.push(&s[start..]);
    parts
}

/// A property line split into its components.
///
/// `payload` holds the colon-delimited segments after the first unescaped
/// colon; single-value properties use the first segment, URL values are
/// rejoined from all of them.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property name, uppercased, with any `item<n>.` group prefix stripped.
    pub name: String,
    /// Raw parameter strings in order of appearance.
    pub params: Vec<String>,
    /// Payload segments (at least one).
    pub payload: Vec<String>,
}

/// Parses a property line into its components.
///
/// Format: `[group.]name[;param]*:value[:value]*`
///
/// Returns `None` for lines without an unescaped colon; such lines carry
/// no payload and are skipped by the converter.
#[must_use]
pub fn parse_content_line(line: &str) -> Option<ContentLine> {
    let pieces = split_unescaped(line, ':');
    if pieces.len() < 2 {
        tracing::trace!(line, "no unescaped colon, skipping line");
        return None;
    }

    let mut head = split_unescaped(pieces[0], ';').into_iter();
    // split_unescaped always yields at least one part
    let name = strip_group(head.next()?).to_ascii_uppercase();
    let params: Vec<String> = head.map(ToString::to_string).collect();
    let payload: Vec<String> = pieces[1..].iter().map(ToString::to_string).collect();

    Some(ContentLine {
        name,
        params,
        payload,
    })
}

/// Strips an `item<digits>.` group prefix (case-insensitive).
///
/// Names carrying a group that does not match the pattern are kept
/// unchanged; an item label with no dot at all is logged and kept.
fn strip_group(name: &str) -> &str {
    match name.split_once('.') {
        Some((group, rest)) if is_item_group(group) => rest,
        Some(_) => name,
        None => {
            if is_item_group(name) {
                tracing::warn!(name, "item group label without dotted property");
            }
            name
        }
    }
}

fn is_item_group(s: &str) -> bool {
    s.len() > 4
        && s.as_bytes()[..4].eq_ignore_ascii_case(b"item")
        && s.bytes().skip(4).all(|b| b.is_ascii_digit())
}
