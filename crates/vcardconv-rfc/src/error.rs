use thiserror::Error;

use crate::rfc::vcard::parse::MalformedInputError;

/// vCard engine errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
