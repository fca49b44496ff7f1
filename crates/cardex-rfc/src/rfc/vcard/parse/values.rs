//! Structured value parsers for the N and ADR properties.

use super::lexer::split_unescaped;

/// Builds a display name from an N property value.
///
/// A well-formed value splits into exactly five components
/// (family;given;additional;prefix;suffix) and is reassembled as
/// "prefix given additional family suffix". Any other component count
/// falls back to the whole trimmed value.
#[must_use]
pub fn display_name(value: &str) -> String {
    let parts = split_unescaped(value, ';');

    if let [family, given, additional, prefix, suffix] = parts.as_slice() {
        [prefix, given, additional, family, suffix]
            .map(|s| s.trim())
            .join(" ")
    } else {
        tracing::debug!(
            components = parts.len(),
            "N value does not have five components, using raw value"
        );
        value.trim().to_string()
    }
}

/// Address components extracted from an ADR property value.
///
/// Post-office box and extended address are parsed past but not retained;
/// the output schema has no columns for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Parses an ADR property value.
///
/// ADR has 7 components: PO Box;Extended;Street;Locality;Region;PostalCode;
/// Country. Exporters frequently omit the trailing country; any missing
/// trailing component defaults to empty rather than failing.
#[must_use]
pub fn parse_address(value: &str) -> AddressParts {
    let parts = split_unescaped(value, ';');
    let part = |i: usize| {
        parts
            .get(i)
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    AddressParts {
        street: part(2),
        city: part(3),
        state: part(4),
        postal_code: part(5),
        country: part(6),
    }
}
