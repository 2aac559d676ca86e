//! Hex-pair tokenizer shared by both document scanners.
//!
//! Data lines in the extracts print one byte per two-digit group, e.g.
//! `00 01 02 03`. A token is a whole word of exactly two hex digits, so
//! numbering, page footers such as `3GPP` and prose words contribute
//! nothing.

use crate::text::is_word_char;

/// Extract the two-digit hex words of `line`, in order, lowercased.
pub fn hex_pairs(line: &str) -> Vec<String> {
    line.split(|c: char| !is_word_char(c))
        .filter(|word| word.len() == 2 && word.bytes().all(|b| b.is_ascii_hexdigit()))
        .map(|word| word.to_ascii_lowercase())
        .collect()
}

/// Concatenation of [`hex_pairs`], the form both scanners accumulate.
pub fn hex_run(line: &str) -> String {
    hex_pairs(line).concat()
}
