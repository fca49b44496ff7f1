//! vCard (VCF) handling.
//!
//! This module parses vCard address-book text and converts it into
//! delimited rows against a fixed column schema.
//!
//! ## Overview
//!
//! The converter is a line-by-line scanner: it accumulates one in-progress
//! contact record, classifies each property line (N, FN, ORG, TITLE, ADR,
//! TEL, EMAIL, URL), and flushes a CSV row whenever a record ends. The
//! whole input is consumed eagerly; there is no streaming API.
//!
//! ## Usage
//!
//! ```rust
//! use cardex_rfc::rfc::vcard::{ConvertOptions, Converter};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! FN:John Smith\r\n\
//! TEL;TYPE=WORK:555-1234\r\n\
//! END:VCARD\r\n";
//!
//! let converter = Converter::new(input, ConvertOptions::default()).unwrap();
//! assert!(converter.output().contains("John Smith"));
//! ```
//!
//! ## Lenient by design
//!
//! Only empty input is fatal. Malformed structured values, unknown
//! properties, unmatched BEGIN/END markers and the like are resolved by
//! skipping the line or falling back to an unstructured value.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`Column`, `RecordState`, classification)
//! - [`parse`] - Content-line lexing and structured value parsing
//! - [`convert`] - The eager converter

pub mod convert;
pub mod core;
pub mod parse;


// Re-export commonly used types
pub use self::core::{Column, RecordState};
pub use convert::{ConvertOptions, Converter, convert};
