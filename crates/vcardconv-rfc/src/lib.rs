//! Apple Contacts vCard parsing and field normalization.
//!
//! See [`rfc::vcard`] for the entry points.

pub mod error;
pub mod rfc;
