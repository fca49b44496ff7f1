//! The eager vCard-to-CSV converter.
//!
//! A stateful line-by-line scanner: `BEGIN:VCARD` is ignored, `END:VCARD`
//! flushes the in-progress record as one output row, and every other
//! non-empty line is classified as a property. Dispatch is deliberately
//! not gated on being inside a BEGIN/END pair; stray property lines and
//! an unpaired `END:VCARD` are handled permissively. A trailing record
//! with no `END:VCARD` is never flushed.

mod options;

pub use options::ConvertOptions;

use crate::error::{ConvertError, ConvertResult};
use crate::rfc::csv::append_row;

use super::core::{Column, RecordState, classify_email, classify_telephone};
use super::parse::{ContentLine, display_name, parse_address, parse_content_line};

/// Converts vCard text into CSV in one pass.
///
/// Construction performs the entire conversion; the rendered output is
/// immutable afterwards.
#[derive(Debug)]
pub struct Converter {
    options: ConvertOptions,
    state: RecordState,
    output: String,
}

impl Converter {
    /// Parses `input` and renders the full CSV text.
    ///
    /// ## Errors
    /// Returns [`ConvertError::EmptyInput`] when `input` is empty; all
    /// other anomalies are resolved by skipping the offending line.
    #[tracing::instrument(skip(input, options), fields(input_len = input.len()))]
    pub fn new(input: &str, options: ConvertOptions) -> ConvertResult<Self> {
        if input.is_empty() {
            tracing::warn!("empty vCard input");
            return Err(ConvertError::EmptyInput);
        }

        let mut converter = Self {
            options,
            state: RecordState::new(),
            output: String::new(),
        };

        converter.append_header();
        for line in input.split('\n') {
            converter.scan_line(line.trim());
        }

        tracing::debug!(output_len = converter.output.len(), "conversion finished");

        Ok(converter)
    }

    /// The rendered CSV text (header plus one row per closed record).
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the converter, returning the rendered CSV text.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }

    /// Read access to the in-progress record.
    #[must_use]
    pub fn record(&self) -> &RecordState {
        &self.state
    }

    /// Write access to the in-progress record.
    pub fn record_mut(&mut self) -> &mut RecordState {
        &mut self.state
    }

    fn append_header(&mut self) {
        let email_label = self.options.email_label;
        append_row(
            &mut self.output,
            Column::ALL.iter().map(|c| c.header(email_label)),
            self.options.delimiter,
            self.options.quote,
        );
    }

    fn scan_line(&mut self, line: &str) {
        if line.is_empty() {
            return;
        }

        if starts_with_ignore_ascii_case(line, "BEGIN:VCARD") {
            return;
        }

        if starts_with_ignore_ascii_case(line, "END:VCARD") {
            self.flush_record();
            return;
        }

        if let Some(content) = parse_content_line(line) {
            self.dispatch(&content);
        }
    }

    fn dispatch(&mut self, line: &ContentLine) {
        let Some(first) = line.payload.first() else {
            return;
        };

        match line.name.as_str() {
            "N" => self.state.set(Column::Name, display_name(first)),
            "FN" => self.state.set(Column::Name, first.clone()),
            "TITLE" => self.state.set(Column::JobTitle, first.clone()),
            "ORG" => self.state.set(Column::Organisation, first.clone()),
            "ADR" => self.process_address(first),
            "TEL" => self.process_telephone(&line.params, first),
            "EMAIL" => self.process_email(&line.params, first),
            "URL" => self.state.set(Column::Website, line.payload.join(":")),
            other => tracing::trace!(property = other, "skipping unrecognized property"),
        }
    }

    fn process_address(&mut self, value: &str) {
        if !self.state.try_accept_address(self.options.max_addresses) {
            tracing::debug!("address cap reached, dropping ADR");
            return;
        }

        let address = parse_address(value);
        self.state.set(Column::StreetName, address.street);
        self.state.set(Column::City, address.city);
        self.state.set(Column::StateProvince, address.state);
        self.state.set(Column::ZipPostCode, address.postal_code);
        self.state.set(Column::Country, address.country);
    }

    fn process_telephone(&mut self, params: &[String], number: &str) {
        let column = classify_telephone(params);
        if self.state.try_accept(column, self.options.max_telephones) {
            self.state.set(column, number);
        } else {
            tracing::debug!(?column, "telephone cap reached, dropping TEL");
        }
    }

    fn process_email(&mut self, params: &[String], address: &str) {
        let column = classify_email(params);
        if self.state.try_accept(column, self.options.max_emails) {
            self.state.set(column, address);
        } else {
            tracing::debug!(?column, "email cap reached, dropping EMAIL");
        }
    }

    fn flush_record(&mut self) {
        append_row(
            &mut self.output,
            self.state.values(),
            self.options.delimiter,
            self.options.quote,
        );
        self.state.reset();
    }
}

/// One-shot conversion helper.
///
/// ## Errors
/// Returns [`ConvertError::EmptyInput`] when `input` is empty.
pub fn convert(input: &str, options: ConvertOptions) -> ConvertResult<String> {
    Ok(Converter::new(input, options)?.into_output())
}

fn starts_with_ignore_ascii_case(line: &str, prefix: &str) -> bool {
    line.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
