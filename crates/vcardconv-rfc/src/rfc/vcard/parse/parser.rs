//! Contact assembly: token stream → contacts.

use super::error::{MalformedInputError, MalformedInputKind, ParseResult};
use super::lexer::{Token, Unfolder, tokenize};
use crate::rfc::vcard::classify::{APPLE_CONTACTS, Classifier, Dialect};
use crate::rfc::vcard::core::{Contact, UnknownReport, VCardProperty};

/// Parses an Apple Contacts export into contacts and the unknown-field report.
///
/// ## Summary
/// Unfolds, tokenizes, classifies and assembles the whole input in one pass.
///
/// ## Errors
/// Returns a [`MalformedInputError`] for orphan continuations, lines without
/// a colon, unmatched or nested record markers, and unterminated records.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<(Vec<Contact>, UnknownReport)> {
    parse_with_dialect(input, &APPLE_CONTACTS)
}

/// Parses with an explicit dialect table.
///
/// ## Errors
/// Same as [`parse`].
#[tracing::instrument(
    skip(input, dialect),
    fields(input_len = input.len(), dialect = dialect.name)
)]
pub fn parse_with_dialect(
    input: &str,
    dialect: &Dialect,
) -> ParseResult<(Vec<Contact>, UnknownReport)> {
    tracing::debug!("Parsing vCard document");

    let mut assembler = Assembler::new(Classifier::new(dialect));
    for line in Unfolder::new(input) {
        let line = line?;
        let token = tokenize(&line)?;
        assembler.push(token, line.line)?;
    }

    let (contacts, report) = assembler.finish()?;

    tracing::debug!(
        contacts = contacts.len(),
        unknown = report.len(),
        "Parsed vCards"
    );

    Ok((contacts, report))
}

#[derive(Debug)]
struct OpenRecord {
    begin_line: usize,
    properties: Vec<VCardProperty>,
}

/// Groups tokens into contacts at record boundaries.
///
/// Properties of an open record are buffered so that group labels written
/// after the property they label can still be resolved; classification runs
/// at `END:VCARD` in arrival order.
#[derive(Debug)]
pub struct Assembler<'d> {
    classifier: Classifier<'d>,
    open: Option<OpenRecord>,
    contacts: Vec<Contact>,
    report: UnknownReport,
}

impl<'d> Assembler<'d> {
    #[must_use]
    pub fn new(classifier: Classifier<'d>) -> Self {
        Self {
            classifier,
            open: None,
            contacts: Vec::new(),
            report: UnknownReport::new(),
        }
    }

    /// Feeds one token.
    ///
    /// ## Errors
    /// Returns an error for `END:VCARD` with no open record and for
    /// `BEGIN:VCARD` inside an open record.
    pub fn push(&mut self, token: Token, line: usize) -> ParseResult<()> {
        match token {
            Token::Begin => {
                if let Some(open) = &self.open {
                    return Err(MalformedInputError::new(
                        MalformedInputKind::NestedRecord,
                        line,
                        format!(
                            "BEGIN:VCARD inside record opened at line {}",
                            open.begin_line
                        ),
                    ));
                }
                self.open = Some(OpenRecord {
                    begin_line: line,
                    properties: Vec::new(),
                });
            }
            Token::End => {
                let record = self
                    .open
                    .take()
                    .ok_or_else(|| MalformedInputError::unmatched_end(line))?;
                self.close(record);
            }
            Token::Property(property) => match &mut self.open {
                Some(open) => open.properties.push(property),
                None => {
                    tracing::warn!(
                        line,
                        property = %property.name,
                        "Skipping property outside vCard"
                    );
                }
            },
        }
        Ok(())
    }

    fn close(&mut self, record: OpenRecord) {
        let contact_index = self.contacts.len();
        let fields =
            self.classifier
                .classify_record(&record.properties, contact_index, &mut self.report);

        tracing::trace!(
            contact_index,
            begin_line = record.begin_line,
            fields = fields.len(),
            "Assembled contact"
        );

        self.contacts.push(Contact::new(fields));
    }

    /// Finishes the stream.
    ///
    /// ## Errors
    /// Returns an error if a record is still open.
    pub fn finish(self) -> ParseResult<(Vec<Contact>, UnknownReport)> {
        if let Some(open) = self.open {
            return Err(MalformedInputError::unterminated_record(open.begin_line));
        }
        Ok((self.contacts, self.report))
    }
}
