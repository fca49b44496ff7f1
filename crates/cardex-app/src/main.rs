//! CLI for converting vCard (VCF) address books to CSV.
//!
//! # Examples
//!
//! ```bash
//! # Convert to stdout
//! cardex contacts.vcf
//!
//! # Semicolon-delimited, unquoted, written to a file
//! cardex contacts.vcf -d ";" --no-quote -o contacts.csv
//! ```

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cardex_core::config::{Settings, load_config};
use cardex_rfc::rfc::vcard::{ConvertOptions, convert};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cardex")]
#[command(author, version, about = "Convert vCard address books to CSV", long_about = None)]
struct Cli {
    /// Input VCF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output CSV file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Cell delimiter, "," or ";"
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Do not quote cells
    #[arg(long)]
    no_quote: bool,

    /// Header label for the non-work email column (home or personal)
    #[arg(long, value_name = "LABEL")]
    email_label: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let settings = load_config()?;
    let options = resolve_options(&settings, &cli)?;

    tracing::debug!(?options, input = %cli.input.display(), "starting conversion");

    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let csv = convert(&input, options)
        .with_context(|| format!("failed to convert {}", cli.input.display()))?;

    match &cli.output {
        Some(path) => fs::write(path, csv)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(csv.as_bytes())
            .context("failed to write to stdout")?,
    }

    Ok(())
}

/// Merges loaded settings with command-line overrides.
fn resolve_options(settings: &Settings, cli: &Cli) -> Result<ConvertOptions> {
    let delimiter = match cli.delimiter {
        Some(d) => d,
        None => settings.convert.delimiter_char()?,
    };

    let email_label = match &cli.email_label {
        Some(label) => label.parse()?,
        None => settings.convert.email_label,
    };

    Ok(ConvertOptions {
        delimiter,
        quote: !cli.no_quote && settings.convert.quote,
        max_addresses: settings.convert.max_addresses,
        max_telephones: settings.convert.max_telephones,
        max_emails: settings.convert.max_emails,
        email_label,
    })
}

#[cfg(test)]
mod tests {
    use cardex_core::config::{ConvertSettings, LoggingConfig};
    use cardex_core::types::EmailLabel;

    use super::*;

    fn settings() -> Settings {
        Settings {
            convert: ConvertSettings {
                delimiter: ",".to_string(),
                quote: true,
                max_addresses: 1,
                max_telephones: 1,
                max_emails: 1,
                email_label: EmailLabel::Personal,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    #[test]
    fn defaults_come_from_settings() {
        let cli = Cli::try_parse_from(["cardex", "in.vcf"]).unwrap();
        let options = resolve_options(&settings(), &cli).unwrap();
        assert_eq!(options.delimiter, ',');
        assert!(options.quote);
        assert_eq!(options.email_label, EmailLabel::Personal);
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "cardex",
            "in.vcf",
            "-d",
            ";",
            "--no-quote",
            "--email-label",
            "home",
        ])
        .unwrap();
        let options = resolve_options(&settings(), &cli).unwrap();
        assert_eq!(options.delimiter, ';');
        assert!(!options.quote);
        assert_eq!(options.email_label, EmailLabel::Home);
    }

    #[test]
    fn bad_email_label_is_rejected() {
        let cli =
            Cli::try_parse_from(["cardex", "in.vcf", "--email-label", "office"]).unwrap();
        assert!(resolve_options(&settings(), &cli).is_err());
    }
}
