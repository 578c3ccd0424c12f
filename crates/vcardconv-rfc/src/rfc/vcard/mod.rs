//! Apple Contacts vCard engine.
//!
//! This module turns an Apple Contacts `.vcf` export into contacts made of
//! semantic fields, and provides the optional field transforms.
//!
//! ## Usage
//!
//! ```rust
//! use vcardconv_rfc::rfc::vcard::{NormalizeOptions, normalize, parse};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:Jane Doe\r\n\
//! TEL;type=CELL;type=VOICE;type=pref:(555) 123-4567\r\n\
//! X-CUSTOM-FIELD:foo\r\n\
//! END:VCARD\r\n";
//!
//! let (contacts, unknown) = parse(input).unwrap();
//! assert_eq!(unknown.len(), 1);
//!
//! let options = NormalizeOptions {
//!     apply_phone_reformat: true,
//!     ..NormalizeOptions::default()
//! };
//! let normalized = normalize(&contacts, &options);
//! assert_eq!(normalized[0].fields[1].value.to_text(), "555-123-4567");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCardProperty`, `Field`, `Contact`, `UnknownReport`)
//! - [`parse`] - Unfolding, tokenizing, assembling, and parse errors
//! - [`classify`] - Dialect tables and the field classifier
//! - [`normalize`] - Address, phone, preferred-duplicate and reorder transforms

pub mod classify;
pub mod core;
pub mod normalize;
pub mod parse;


// Re-export commonly used types
pub use classify::{APPLE_CONTACTS, Classifier, Dialect};
pub use core::{
    Contact, Field, FieldCategory, FieldValue, PostalAddress, UnknownEntry, UnknownReport,
    VCardParameter, VCardProperty,
};
pub use normalize::{
    NormalizeOptions, duplicate_preferred, normalize, normalize_address, normalize_phone, reorder,
};
pub use parse::{MalformedInputError, MalformedInputKind, ParseResult, parse, parse_with_dialect};
