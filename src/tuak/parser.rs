// Line scanner for the TUAK test sets of TS 35.233

use serde::{Deserialize, Serialize};

use super::{HexField, LengthField, SetOnce};
use crate::text::{document_lines, is_word_char, leading_digits, test_set_header};

/// Section number that prefixes every TUAK test-set heading
pub const TUAK_SECTION: &str = "6";

/// Line that opens the bit-string restatement of a test set
const BINARY_FORMAT_MARKER: &str = "Binary Format";

/// One TUAK test set. Every field except `id` is optional and set at most
/// once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuakVector {
    pub id: u32,

    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub k: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub rand: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub sqn: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub amf: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub top: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub topc: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub f1: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub f1_star: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub f2: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub f3: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub f4: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub f5: SetOnce<String>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub f5_star: SetOnce<String>,

    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub klength: SetOnce<u32>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub maclength: SetOnce<u32>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub cklength: SetOnce<u32>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub iklength: SetOnce<u32>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub reslength: SetOnce<u32>,
    #[serde(default, skip_serializing_if = "SetOnce::is_unset")]
    pub keccak_iterations: SetOnce<u32>,
}

impl TuakVector {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn hex_slot_mut(&mut self, field: HexField) -> &mut SetOnce<String> {
        match field {
            HexField::K => &mut self.k,
            HexField::Rand => &mut self.rand,
            HexField::Sqn => &mut self.sqn,
            HexField::Amf => &mut self.amf,
            HexField::Top => &mut self.top,
            HexField::Topc => &mut self.topc,
            HexField::F1 => &mut self.f1,
            HexField::F1Star => &mut self.f1_star,
            HexField::F2 => &mut self.f2,
            HexField::F3 => &mut self.f3,
            HexField::F4 => &mut self.f4,
            HexField::F5 => &mut self.f5,
            HexField::F5Star => &mut self.f5_star,
        }
    }

    fn length_slot_mut(&mut self, field: LengthField) -> &mut SetOnce<u32> {
        match field {
            LengthField::Klength => &mut self.klength,
            LengthField::MacLength => &mut self.maclength,
            LengthField::CkLength => &mut self.cklength,
            LengthField::IkLength => &mut self.iklength,
            LengthField::ResLength => &mut self.reslength,
            LengthField::KeccakIterations => &mut self.keccak_iterations,
        }
    }

    /// Value of a hex field, if the document supplied it
    pub fn hex(&self, field: HexField) -> Option<&str> {
        let slot = match field {
            HexField::K => &self.k,
            HexField::Rand => &self.rand,
            HexField::Sqn => &self.sqn,
            HexField::Amf => &self.amf,
            HexField::Top => &self.top,
            HexField::Topc => &self.topc,
            HexField::F1 => &self.f1,
            HexField::F1Star => &self.f1_star,
            HexField::F2 => &self.f2,
            HexField::F3 => &self.f3,
            HexField::F4 => &self.f4,
            HexField::F5 => &self.f5,
            HexField::F5Star => &self.f5_star,
        };
        slot.get().map(String::as_str)
    }

    /// Value of a length or iteration field, if the document supplied it
    pub fn length(&self, field: LengthField) -> Option<u32> {
        let slot = match field {
            LengthField::Klength => &self.klength,
            LengthField::MacLength => &self.maclength,
            LengthField::CkLength => &self.cklength,
            LengthField::IkLength => &self.iklength,
            LengthField::ResLength => &self.reslength,
            LengthField::KeccakIterations => &self.keccak_iterations,
        };
        slot.get().copied()
    }

    /// Record a hex field. A field already set for this test set keeps its
    /// value and `false` is returned.
    pub fn set_hex(&mut self, field: HexField, value: String) -> bool {
        let id = self.id;
        let stored = self.hex_slot_mut(field).set(value);
        if !stored {
            log::debug!("test set {}: ignoring repeated {}", id, field.label());
        }
        stored
    }

    /// Record a length field with the same first-writer-wins rule as
    /// [`TuakVector::set_hex`].
    pub fn set_length(&mut self, field: LengthField, value: u32) -> bool {
        let id = self.id;
        let stored = self.length_slot_mut(field).set(value);
        if !stored {
            log::debug!("test set {}: ignoring repeated {}", id, field.label());
        }
        stored
    }
}

/// Find `<label> = <digits>` with `label` as a whole word.
///
/// Later occurrences are tried when an earlier one is not followed by a
/// well-formed value.
fn assignment_value(line: &str, label: &str) -> Option<u32> {
    line.match_indices(label).find_map(|(idx, _)| {
        if line[..idx].chars().next_back().map_or(false, is_word_char) {
            return None;
        }
        let rest = &line[idx + label.len()..];
        if rest.chars().next().map_or(false, is_word_char) {
            return None;
        }
        let rest = rest.trim_start().strip_prefix('=')?.trim_start();
        let digits = leading_digits(rest);
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    })
}

/// Split a `<name>:<whitespace><hex>` line.
///
/// The name is ASCII alphanumerics and `*`. The hex value must end at a
/// word boundary, so `K: 00ffzz` is not a key/value line.
fn key_value(line: &str) -> Option<(&str, &str)> {
    let name_len = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '*'))
        .unwrap_or(line.len());
    if name_len == 0 {
        return None;
    }
    let (name, rest) = line.split_at(name_len);
    let rest = rest.strip_prefix(':')?;
    let value_part = rest.trim_start();
    if value_part.len() == rest.len() {
        return None;
    }
    let value_len = value_part
        .find(|c: char| !c.is_ascii_hexdigit())
        .unwrap_or(value_part.len());
    if value_len == 0 {
        return None;
    }
    let (value, tail) = value_part.split_at(value_len);
    if tail.chars().next().map_or(false, is_word_char) {
        return None;
    }
    Some((name, value))
}

/// Single-pass scanner over the lines of a TS 35.233 extract.
#[derive(Debug, Default)]
pub struct TuakScanner {
    current: Option<TuakVector>,
    in_binary_format: bool,
    sealed: Vec<TuakVector>,
}

impl TuakScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the scanner by one document line.
    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(id) = test_set_header(line, TUAK_SECTION) {
            self.seal_current();
            self.current = Some(TuakVector::new(id));
            self.in_binary_format = false;
            return;
        }

        let Some(vector) = self.current.as_mut() else {
            return;
        };

        if line.starts_with(BINARY_FORMAT_MARKER) {
            self.in_binary_format = true;
            return;
        }
        if self.in_binary_format {
            return;
        }

        if line.contains("bits") || line.contains("KeccakIterations") {
            for field in LengthField::ALL {
                if let Some(value) = assignment_value(line, field.label()) {
                    vector.set_length(field, value);
                }
            }
            return;
        }

        if let Some((label, value)) = key_value(line) {
            if let Some(field) = HexField::from_label(label) {
                vector.set_hex(field, value.to_ascii_lowercase());
            }
        }
    }

    /// Seal the vector under construction and return every vector in
    /// document order.
    pub fn finish(mut self) -> Vec<TuakVector> {
        self.seal_current();
        self.sealed
    }

    fn seal_current(&mut self) {
        if let Some(vector) = self.current.take() {
            log::debug!("sealed TUAK test set {}", vector.id);
            self.sealed.push(vector);
        }
    }
}

/// Extract every TUAK test set from a TS 35.233 text extract.
pub fn parse_tuak_vectors(text: &str) -> Vec<TuakVector> {
    let mut scanner = TuakScanner::new();
    for line in document_lines(text) {
        scanner.feed_line(line);
    }
    scanner.finish()
}
