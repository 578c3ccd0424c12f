//! Optional post-assembly transforms.
//!
//! Each transform takes a contact and returns a new one, so they can be
//! applied independently and in any order. [`normalize`] chains the enabled
//! ones as address → phone → preferred → reorder.

mod address;
mod phone;
mod preferred;
mod reorder;

pub use address::{format_postal_block, normalize_address};
pub use phone::{format_us_phone, normalize_phone};
pub use preferred::{PREFERRED_SUFFIX, duplicate_preferred, preferred_label};
pub use reorder::reorder;

use vcardconv_core::config::NormalizeConfig;

use crate::rfc::vcard::core::Contact;

/// Which transforms to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each flag toggles an independent transform"
)]
pub struct NormalizeOptions {
    pub apply_address_reformat: bool,
    pub apply_phone_reformat: bool,
    pub include_preferred_duplicates: bool,
    pub apply_reorder: bool,
}

impl From<&NormalizeConfig> for NormalizeOptions {
    fn from(config: &NormalizeConfig) -> Self {
        Self {
            apply_address_reformat: config.address,
            apply_phone_reformat: config.phone,
            include_preferred_duplicates: config.preferred,
            apply_reorder: config.reorder,
        }
    }
}

type Transform = fn(&Contact) -> Contact;

impl NormalizeOptions {
    /// Enabled transforms in application order.
    fn stages(self) -> Vec<(&'static str, Transform)> {
        let all: [(bool, &'static str, Transform); 4] = [
            (self.apply_address_reformat, "address", normalize_address),
            (self.apply_phone_reformat, "phone", normalize_phone),
            (
                self.include_preferred_duplicates,
                "preferred",
                duplicate_preferred,
            ),
            (self.apply_reorder, "reorder", reorder),
        ];
        all.into_iter()
            .filter(|(enabled, _, _)| *enabled)
            .map(|(_, name, transform)| (name, transform))
            .collect()
    }
}

/// Applies the enabled transforms to every contact.
///
/// Each stage sees the complete output of the previous one.
#[must_use]
pub fn normalize(contacts: &[Contact], options: &NormalizeOptions) -> Vec<Contact> {
    let mut current = contacts.to_vec();
    for (name, transform) in options.stages() {
        tracing::debug!(stage = name, contacts = current.len(), "Applying normalizer");
        current = current.iter().map(transform).collect();
    }
    current
}
