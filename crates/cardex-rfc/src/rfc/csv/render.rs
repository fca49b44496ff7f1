//! Cell cleaning and row serialization.
//!
//! Every cell, including the last of a row, is followed by the delimiter,
//! and rows end with CRLF. Quoting wraps cells in `"` without escaping
//! embedded quotes.

/// Cleans a raw field value for tabular output.
///
/// Unescapes `\:` `\;` `\,` `\=` unconditionally. When quoting is enabled
/// the value may safely carry line breaks and literal delimiters, so `\n`,
/// `\r` and the escaped delimiter are unescaped too. The value is then
/// whitespace-trimmed and any trailing run of `;` or `\` characters left
/// over from partially consumed structured values is stripped.
#[must_use]
pub fn clean_value(raw: &str, delimiter: char, quote: bool) -> String {
    let mut text = raw
        .replace("\\:", ":")
        .replace("\\;", ";")
        .replace("\\,", ",")
        .replace("\\=", "=");

    if quote {
        text = text.replace("\\n", "\n").replace("\\r", "\r");
        let escaped_delimiter = format!("\\{delimiter}");
        text = text.replace(&escaped_delimiter, &delimiter.to_string());
    }

    text.trim().trim_end_matches([';', '\\']).to_string()
}

/// Appends one cleaned cell plus the trailing delimiter.
pub fn append_cell(out: &mut String, raw: &str, delimiter: char, quote: bool) {
    if quote {
        out.push('"');
    }
    out.push_str(&clean_value(raw, delimiter, quote));
    if quote {
        out.push('"');
    }
    out.push(delimiter);
}

/// Appends a full CRLF-terminated row.
pub fn append_row<'a>(
    out: &mut String,
    cells: impl IntoIterator<Item = &'a str>,
    delimiter: char,
    quote: bool,
) {
    for cell in cells {
        append_cell(out, cell, delimiter, quote);
    }
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_unescapes_common_sequences() {
        assert_eq!(clean_value(r"a\:b\;c\,d\=e", ',', false), "a:b;c,d=e");
    }

    #[test]
    fn clean_quote_mode_unescapes_line_breaks_and_delimiter() {
        assert_eq!(clean_value(r"one\ntwo", ',', true), "one\ntwo");
        assert_eq!(clean_value(r"a\,b", ',', true), "a,b");
        // Without quoting, line-break escapes are left alone.
        assert_eq!(clean_value(r"one\ntwo", ',', false), r"one\ntwo");
    }

    #[test]
    fn clean_strips_trailing_structured_leftovers() {
        assert_eq!(clean_value("Acme;;", ',', false), "Acme");
        assert_eq!(clean_value("Acme\\", ',', false), "Acme");
        assert_eq!(clean_value("Acme;\\;\\", ',', false), "Acme");
        // Interior separators survive.
        assert_eq!(clean_value("Acme;Engineering", ',', false), "Acme;Engineering");
    }

    #[test]
    fn clean_is_idempotent() {
        let once = clean_value(r"a\,b ; trailing;;", ',', true);
        let twice = clean_value(&once, ',', true);
        assert_eq!(once, twice);
    }

    #[test]
    fn cell_is_quoted_and_delimited() {
        let mut out = String::new();
        append_cell(&mut out, " value ", ',', true);
        assert_eq!(out, "\"value\",");
    }

    #[test]
    fn cell_without_quoting() {
        let mut out = String::new();
        append_cell(&mut out, "value", ';', false);
        assert_eq!(out, "value;");
    }

    #[test]
    fn row_has_trailing_delimiter_and_crlf() {
        let mut out = String::new();
        append_row(&mut out, ["a", "b"], ',', true);
        assert_eq!(out, "\"a\",\"b\",\r\n");
    }
}
