//! Output formats for converted contacts.
//!
//! All formats share one [`ColumnLayout`] so that CSV columns, JSON keys and
//! console lines appear in the same order.

pub mod columns;
pub mod csv_writer;
pub mod display;
pub mod json_writer;

pub use columns::{Column, ColumnLayout};
pub use csv_writer::{DEFAULT_VALUE_SEPARATOR, write_csv};
pub use display::{write_contacts, write_unknown_report};
pub use json_writer::{contacts_to_json, write_json};
