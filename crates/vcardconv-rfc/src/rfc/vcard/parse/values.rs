//! vCard value decoding.

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash).
/// Apple Contacts also writes `\:` inside URLs.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&escaped @ (',' | ';' | ':' | '\\')) => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
///
/// The returned slices are still escaped.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            ';' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a structured value and decodes each component.
#[must_use]
pub fn decode_components(s: &str) -> Vec<String> {
    split_structured(s).into_iter().map(unescape_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unescape_known_sequences() {
        assert_eq!(unescape_text(r"a\,b\;c\nd\\e"), "a,b;c\nd\\e");
        assert_eq!(unescape_text(r"http\://example.com"), "http://example.com");
    }

    #[test]
    fn unescape_keeps_unknown_sequences() {
        assert_eq!(unescape_text(r"a\tb"), r"a\tb");
        assert_eq!(unescape_text("trailing\\"), "trailing\\");
    }

    #[test]
    fn split_respects_escaped_semicolon() {
        assert_eq!(split_structured(r"a\;b;c"), vec![r"a\;b", "c"]);
    }

    #[test]
    fn split_after_escaped_backslash() {
        assert_eq!(split_structured(r"a\\;b"), vec![r"a\\", "b"]);
    }

    #[test]
    fn decode_address_components() {
        let parts = decode_components(r";;1 Main St\nApt 2;Springfield;IL;62704;");
        assert_eq!(parts.len(), 7);
        assert_eq!(parts[2], "1 Main St\nApt 2");
        assert_eq!(parts[6], "");
    }
}
