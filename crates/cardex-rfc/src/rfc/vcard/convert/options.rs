//! Converter configuration.

use cardex_core::types::EmailLabel;

/// Options fixed for the lifetime of one converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Cell separator, appended after every cell including the last.
    pub delimiter: char,
    /// Wrap cells in `"` and unescape line breaks inside values.
    pub quote: bool,
    /// Maximum addresses retained per record.
    pub max_addresses: u32,
    /// Maximum telephone numbers retained per phone column.
    pub max_telephones: u32,
    /// Maximum email addresses retained per email column.
    pub max_emails: u32,
    /// Header label for the non-work email column.
    pub email_label: EmailLabel,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: true,
            max_addresses: 1,
            max_telephones: 1,
            max_emails: 1,
            email_label: EmailLabel::Personal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.delimiter, ',');
        assert!(options.quote);
        assert_eq!(options.max_addresses, 1);
        assert_eq!(options.max_telephones, 1);
        assert_eq!(options.max_emails, 1);
        assert_eq!(options.email_label, EmailLabel::Personal);
    }
}
