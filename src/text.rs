//! Line splitting for typeset specification extracts.
//!
//! Text exported from a paginated document carries form feeds at page
//! breaks and the occasional stray record separator next to the usual
//! newline conventions. Every one of those ends a line.

/// Word characters as regular-expression word boundaries see them.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true for every character that terminates a line.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split a document into lines.
///
/// `\r\n` counts as a single terminator and a terminator at the very end of
/// the text does not produce a trailing empty line.
pub fn document_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        let mut end = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(_, '\n')) = chars.peek() {
                chars.next();
                end += 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Leading run of ASCII digits of `s` (possibly empty).
pub(crate) fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

/// Strip at least one whitespace character from the front of `s`.
fn strip_required_whitespace(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    (trimmed.len() < s.len()).then_some(trimmed)
}

/// Match a test-set heading such as `5.3  Test set 7` and return its ordinal.
///
/// The heading is `<section>.<digits>`, whitespace, the words `Test set` in
/// any case, whitespace and the ordinal. Anything may follow the ordinal.
/// An ordinal too large for `u32` does not make a heading.
pub fn test_set_header(line: &str, section: &str) -> Option<u32> {
    let rest = line.strip_prefix(section)?.strip_prefix('.')?;
    let clause = leading_digits(rest);
    if clause.is_empty() {
        return None;
    }
    let rest = strip_required_whitespace(&rest[clause.len()..])?;
    let keyword = rest.get(..8)?;
    if !keyword.eq_ignore_ascii_case("test set") {
        return None;
    }
    let rest = strip_required_whitespace(&rest[8..])?;
    let ordinal = leading_digits(rest);
    if ordinal.is_empty() {
        return None;
    }
    ordinal.parse().ok()
}
