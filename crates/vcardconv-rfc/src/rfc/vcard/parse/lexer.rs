//! vCard lexer: line unfolding and content line tokenizing.

use std::iter::{Enumerate, Filter, Peekable};
use std::str::Lines;

use super::error::{MalformedInputError, MalformedInputKind, ParseResult};
use super::values::{decode_components, unescape_text};
use crate::rfc::vcard::core::{PropertyValue, VCardProperty, names};

/// Properties whose values are semicolon-structured.
const STRUCTURED_PROPERTIES: &[&str] = &[names::N, names::ORG, names::ADR];

/// Byte order mark some editors put in front of the first line.
const BOM: char = '\u{feff}';

/// Value of the BEGIN/END properties that delimit a record.
const VCARD_COMPONENT: &str = "VCARD";

/// One unfolded logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// Physical line number (1-based) where the logical line starts.
    pub line: usize,
    /// Line content with continuations joined.
    pub text: String,
}

type PhysicalLines<'a> = Peekable<Filter<Enumerate<Lines<'a>>, fn(&(usize, &'a str)) -> bool>>;

/// Lazily joins folded physical lines into logical lines.
///
/// A physical line starting with a single space or tab continues the previous
/// logical line; the whitespace character is dropped and the rest appended
/// without a separator. Blank physical lines are skipped. Handles CRLF and
/// bare LF, and ignores a leading byte order mark.
pub struct Unfolder<'a> {
    lines: PhysicalLines<'a>,
}

fn is_not_blank(entry: &(usize, &str)) -> bool {
    !entry.1.is_empty()
}

fn continuation(line: &str) -> Option<&str> {
    line.strip_prefix([' ', '\t'])
}

impl<'a> Unfolder<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let filter: fn(&(usize, &'a str)) -> bool = is_not_blank;
        let input = input.strip_prefix(BOM).unwrap_or(input);
        Self {
            lines: input.lines().enumerate().filter(filter).peekable(),
        }
    }
}

impl Iterator for Unfolder<'_> {
    type Item = ParseResult<LogicalLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, first) = self.lines.next()?;
        let line = index + 1;

        if continuation(first).is_some() {
            return Some(Err(MalformedInputError::orphan_continuation(line)));
        }

        let mut text = first.to_string();
        while let Some(rest) = self.lines.peek().and_then(|&(_, next)| continuation(next)) {
            text.push_str(rest);
            self.lines.next();
        }

        Some(Ok(LogicalLine { line, text }))
    }
}

/// Unfolds a whole document.
///
/// ## Errors
/// Returns an error if a continuation line precedes every content line.
pub fn unfold(input: &str) -> ParseResult<Vec<LogicalLine>> {
    Unfolder::new(input).collect()
}

/// A tokenized logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `BEGIN:VCARD`
    Begin,
    /// `END:VCARD`
    End,
    Property(VCardProperty),
}

/// Tokenizes a single logical line.
///
/// Format: `[group.]name[;param=value[,value]*]*:value`
///
/// ## Errors
/// Returns an error if the line has no unescaped colon or an invalid name.
pub fn tokenize(line: &LogicalLine) -> ParseResult<Token> {
    let line_num = line.line;
    let text = line.text.as_str();

    let colon_pos =
        find_value_separator(text).ok_or_else(|| MalformedInputError::missing_colon(line_num))?;

    let (name_params, value) = text.split_at(colon_pos);
    let value = &value[1..];

    let (name_part, params_str) = match find_unquoted(name_params, ';') {
        Some(semi_pos) => (&name_params[..semi_pos], Some(&name_params[semi_pos + 1..])),
        None => (name_params, None),
    };

    let (group, name) = parse_group(name_part);

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(MalformedInputError::new(
            MalformedInputKind::InvalidPropertyName,
            line_num,
            format!("{name:?}"),
        ));
    }

    let name = name.to_ascii_uppercase();

    if group.is_none() && value.trim().eq_ignore_ascii_case(VCARD_COMPONENT) {
        if name == names::BEGIN {
            return Ok(Token::Begin);
        }
        if name == names::END {
            return Ok(Token::End);
        }
    }

    let decoded = if STRUCTURED_PROPERTIES.contains(&name.as_str()) {
        PropertyValue::Components(decode_components(value))
    } else {
        PropertyValue::Text(unescape_text(value))
    };

    let mut property = VCardProperty {
        group: group.map(String::from),
        name,
        params: Vec::new(),
        value: decoded,
        raw_value: value.to_string(),
    };

    if let Some(params_str) = params_str {
        for (param_name, values) in parse_parameters(params_str) {
            property.add_param_values(&param_name, values);
        }
    }

    Ok(Token::Property(property))
}

/// Finds the colon that separates name/params from value.
///
/// Skips colons inside quoted parameter values and backslash-escaped colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Finds `needle` outside double quotes.
fn find_unquoted(s: &str, needle: char) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if c == needle && !in_quotes {
            return Some(i);
        }
    }
    None
}

/// Splits `s` on `sep` outside double quotes.
fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = s;
    while let Some(pos) = find_unquoted(rest, sep) {
        parts.push(&rest[..pos]);
        rest = &rest[pos + sep.len_utf8()..];
    }
    parts.push(rest);
    parts
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some(dot_pos) = s.find('.') {
        let potential_group = &s[..dot_pos];
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Parses `name=value[,value]*` parameters separated by `;`.
///
/// A bare parameter without `=` is the legacy TYPE shorthand (`;HOME`).
fn parse_parameters(s: &str) -> Vec<(String, Vec<String>)> {
    split_unquoted(s, ';')
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(|p| match find_unquoted(p, '=') {
            Some(eq_pos) => (
                p[..eq_pos].to_ascii_uppercase(),
                parse_param_values(&p[eq_pos + 1..]),
            ),
            None => ("TYPE".to_string(), parse_param_values(p)),
        })
        .collect()
}

/// Parses comma-separated parameter values, removing quotes and decoding
/// RFC 6868 caret escapes.
fn parse_param_values(s: &str) -> Vec<String> {
    split_unquoted(s, ',')
        .into_iter()
        .map(|v| decode_param_value(v.trim_matches('"')))
        .collect()
}

fn decode_param_value(s: &str) -> String {
    let mut value = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '^' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => value.push('\n'),
            Some('\'') => value.push('"'),
            Some('^') => value.push('^'),
            Some(other) => {
                value.push('^');
                value.push(other);
            }
            None => value.push('^'),
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical(text: &str) -> LogicalLine {
        LogicalLine {
            line: 1,
            text: text.to_string(),
        }
    }

    fn property(text: &str) -> VCardProperty {
        match tokenize(&logical(text)).unwrap() {
            Token::Property(prop) => prop,
            other => panic!("expected property, got {other:?}"),
        }
    }

    #[test]
    fn unfold_crlf() {
        let lines = unfold("FN:John\r\n Doe\r\n").unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "FN:JohnDoe");
    }

    #[test]
    fn unfold_bare_lf_and_tab() {
        let lines = unfold("FN:John\n\tDoe\nNOTE:x\n").unwrap();
        assert_eq!(lines[0].text, "FN:JohnDoe");
        assert_eq!(lines[1].text, "NOTE:x");
        assert_eq!(lines[1].line, 3);
    }

    #[test]
    fn unfold_strips_only_one_whitespace_char() {
        let lines = unfold("NOTE:a\r\n  b\r\n").unwrap();
        assert_eq!(lines[0].text, "NOTE:a b");
    }

    #[test]
    fn unfold_skips_blank_lines() {
        let lines = unfold("A:1\n\nB:2\n").unwrap();
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["A:1", "B:2"]);
    }

    #[test]
    fn unfold_rejects_leading_continuation() {
        let err = unfold(" orphan\r\nFN:x\r\n").unwrap_err();
        assert_eq!(err.kind, MalformedInputKind::OrphanContinuation);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn unfold_ignores_byte_order_mark() {
        let lines = unfold("\u{feff}BEGIN:VCARD\r\nEND:VCARD\r\n").unwrap();
        assert_eq!(lines[0].text, "BEGIN:VCARD");
        assert_eq!(lines[0].line, 1);
    }

    #[test]
    fn unfolder_is_lazy() {
        let mut unfolder = Unfolder::new("A:1\n B\nC:2\n");
        assert_eq!(unfolder.next().unwrap().unwrap().text, "A:1B");
        assert_eq!(unfolder.next().unwrap().unwrap().text, "C:2");
        assert!(unfolder.next().is_none());
    }

    #[test]
    fn tokenize_sentinels() {
        assert_eq!(tokenize(&logical("BEGIN:VCARD")).unwrap(), Token::Begin);
        assert_eq!(tokenize(&logical("end:vcard")).unwrap(), Token::End);
    }

    #[test]
    fn tokenize_simple_line() {
        let prop = property("FN:John Doe");
        assert!(prop.group.is_none());
        assert_eq!(prop.name, "FN");
        assert!(prop.params.is_empty());
        assert_eq!(prop.as_text(), Some("John Doe"));
    }

    #[test]
    fn tokenize_grouped_line() {
        let prop = property("item1.X-ABLabel:_$!<Anniversary>!$_");
        assert_eq!(prop.group.as_deref(), Some("item1"));
        assert_eq!(prop.name, "X-ABLABEL");
    }

    #[test]
    fn tokenize_merges_repeated_type_params() {
        let prop = property("TEL;type=CELL;type=VOICE;type=pref:(555) 123-4567");
        assert_eq!(prop.params.len(), 1);
        assert_eq!(
            prop.type_values().collect::<Vec<_>>(),
            vec!["CELL", "VOICE", "pref"]
        );
        assert!(prop.is_preferred());
    }

    #[test]
    fn tokenize_comma_separated_values() {
        let prop = property("TEL;TYPE=home,voice;PREF=1:+1-555-555-5555");
        assert_eq!(prop.params.len(), 2);
        assert!(prop.has_type("home"));
        assert!(prop.has_type("voice"));
        assert_eq!(prop.get_param_value("PREF"), Some("1"));
    }

    #[test]
    fn tokenize_bare_parameter_is_type() {
        let prop = property("TEL;HOME;VOICE:555-1234");
        assert!(prop.has_type("home"));
        assert!(prop.has_type("voice"));
    }

    #[test]
    fn tokenize_quoted_param_with_colon_and_semicolon() {
        let prop = property("ADR;LABEL=\"1 Main St; Suite: 2\":;;1 Main St;;;;");
        assert_eq!(prop.get_param_value("LABEL"), Some("1 Main St; Suite: 2"));
        assert_eq!(prop.value.component(2), "1 Main St");
    }

    #[test]
    fn tokenize_colon_in_value() {
        let prop = property("URL:https://example.com:8080/path");
        assert_eq!(prop.as_text(), Some("https://example.com:8080/path"));
    }

    #[test]
    fn tokenize_apple_escaped_url() {
        let prop = property(r"item2.URL;type=pref:http\://example.com");
        assert_eq!(prop.as_text(), Some("http://example.com"));
        assert_eq!(prop.raw_value, r"http\://example.com");
    }

    #[test]
    fn tokenize_structured_values() {
        let prop = property(r"N:Doe;John;Q\;R;;");
        assert_eq!(
            prop.value,
            PropertyValue::Components(vec![
                "Doe".into(),
                "John".into(),
                "Q;R".into(),
                String::new(),
                String::new(),
            ])
        );
        assert_eq!(prop.raw_value, r"Doe;John;Q\;R;;");
    }

    #[test]
    fn tokenize_decodes_text_escapes() {
        let prop = property(r"NOTE:line one\nline two\, with comma");
        assert_eq!(prop.as_text(), Some("line one\nline two, with comma"));
    }

    #[test]
    fn tokenize_missing_colon() {
        let err = tokenize(&logical("FN John")).unwrap_err();
        assert_eq!(err.kind, MalformedInputKind::MissingColon);
    }

    #[test]
    fn tokenize_invalid_name() {
        let err = tokenize(&logical(":value")).unwrap_err();
        assert_eq!(err.kind, MalformedInputKind::InvalidPropertyName);
    }

    #[test]
    fn invalid_name_is_named_once() {
        let err = tokenize(&logical("BAD NAME:value")).unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid property name: \"BAD NAME\"");
    }

    #[test]
    fn caret_decoding_in_params() {
        let prop = property("X-SOCIALPROFILE;x-user=a^'b^'^n:x");
        assert_eq!(prop.get_param_value("X-USER"), Some("a\"b\"\n"));
    }
}
