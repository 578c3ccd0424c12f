//! Core vCard and contact types.

mod contact;
mod field;
mod parameter;
mod property;
mod unknown;

pub use contact::Contact;
pub use field::{Field, FieldCategory, FieldValue, PostalAddress};
pub use parameter::{VCardParameter, types};
pub use property::{PropertyValue, VCardProperty, names};
pub use unknown::{UnknownEntry, UnknownReport};
