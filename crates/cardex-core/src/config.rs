use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::EmailLabel;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub convert: ConvertSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSettings {
    pub delimiter: String,
    pub quote: bool,
    pub max_addresses: u32,
    pub max_telephones: u32,
    pub max_emails: u32,
    pub email_label: EmailLabel,
}

impl ConvertSettings {
    /// ## Summary
    /// Returns the configured delimiter as a single character.
    ///
    /// ## Errors
    /// Returns an error if the configured delimiter is not exactly one
    /// character.
    pub fn delimiter_char(&self) -> CoreResult<char> {
        let mut chars = self.delimiter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(CoreError::InvalidConfiguration(format!(
                "delimiter must be a single character, got {:?}",
                self.delimiter
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `.env` file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("convert.delimiter", ",")?
            .set_default("convert.quote", true)?
            .set_default("convert.max_addresses", 1)?
            .set_default("convert.max_telephones", 1)?
            .set_default("convert.max_emails", 1)?
            .set_default("convert.email_label", "personal")?
            .set_default("logging.level", "info")?
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(delimiter: &str) -> ConvertSettings {
        ConvertSettings {
            delimiter: delimiter.to_string(),
            quote: true,
            max_addresses: 1,
            max_telephones: 1,
            max_emails: 1,
            email_label: EmailLabel::Personal,
        }
    }

    #[test]
    fn delimiter_single_char() {
        assert_eq!(settings(";").delimiter_char().ok(), Some(';'));
    }

    #[test]
    fn delimiter_rejects_multi_char() {
        assert!(settings(",,").delimiter_char().is_err());
        assert!(settings("").delimiter_char().is_err());
    }
}
