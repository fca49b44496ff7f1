//! vCard to CSV conversion core.
//!
//! Parses vCard (VCF) address-book text and renders one delimited row per
//! contact against a fixed column schema. See [`rfc::vcard`] for the
//! conversion entry points.

pub mod error;
pub mod rfc;
