//! vCard parse error types.

use std::fmt;

use thiserror::Error;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, MalformedInputError>;

/// A structural defect in the input that aborts parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: {message}")]
pub struct MalformedInputError {
    /// The kind of defect.
    pub kind: MalformedInputKind,
    /// Physical line number where the offending logical line starts (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl MalformedInputError {
    /// Creates a new malformed input error.
    #[must_use]
    pub fn new(kind: MalformedInputKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// A folded continuation with nothing before it to continue.
    #[must_use]
    pub fn orphan_continuation(line: usize) -> Self {
        Self::new(
            MalformedInputKind::OrphanContinuation,
            line,
            "continuation line before any content line",
        )
    }

    /// A content line without the `:` that separates name from value.
    #[must_use]
    pub fn missing_colon(line: usize) -> Self {
        Self::new(
            MalformedInputKind::MissingColon,
            line,
            "missing colon separator",
        )
    }

    /// `END:VCARD` with no record open.
    #[must_use]
    pub fn unmatched_end(line: usize) -> Self {
        Self::new(
            MalformedInputKind::UnmatchedEnd,
            line,
            "END:VCARD without matching BEGIN:VCARD",
        )
    }

    /// Input ended while a record was still open.
    #[must_use]
    pub fn unterminated_record(begin_line: usize) -> Self {
        Self::new(
            MalformedInputKind::UnterminatedRecord,
            begin_line,
            "vCard not closed with END:VCARD",
        )
    }
}

/// The kind of malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedInputKind {
    /// Continuation line with no preceding logical line.
    OrphanContinuation,
    /// No unescaped colon in a content line.
    MissingColon,
    /// Empty or ill-formed property name.
    InvalidPropertyName,
    /// `END:VCARD` without an open record.
    UnmatchedEnd,
    /// End of input inside a record.
    UnterminatedRecord,
    /// `BEGIN:VCARD` inside an open record.
    NestedRecord,
}

impl fmt::Display for MalformedInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanContinuation => write!(f, "orphan continuation"),
            Self::MissingColon => write!(f, "missing colon"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::UnmatchedEnd => write!(f, "unmatched END"),
            Self::UnterminatedRecord => write!(f, "unterminated record"),
            Self::NestedRecord => write!(f, "nested record"),
        }
    }
}
