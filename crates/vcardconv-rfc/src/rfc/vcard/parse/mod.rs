//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use vcardconv_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL;type=INTERNET;type=WORK:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let (contacts, unknown) = parse::parse(input).unwrap();
//! assert_eq!(contacts[0].full_name(), Some("John Doe"));
//! assert!(unknown.is_empty());
//! ```
//!
//! ## Pipeline
//!
//! - [`Unfolder`] joins folded physical lines lazily
//! - [`tokenize`] splits a logical line into group, name, parameters and value
//! - [`Assembler`] groups tokens into records and classifies each record

mod error;
mod lexer;
mod parser;
mod values;


pub use error::{MalformedInputError, MalformedInputKind, ParseResult};
pub use lexer::{LogicalLine, Token, Unfolder, tokenize, unfold};
pub use parser::{Assembler, parse, parse_with_dialect};
pub use values::{decode_components, split_structured, unescape_text};
