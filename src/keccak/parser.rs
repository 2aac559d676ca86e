// Line scanner for the Keccak-f[1600] test sets of TS 35.232

use serde::{Deserialize, Serialize};

use crate::hex_tokens::hex_run;
use crate::text::{document_lines, test_set_header};

/// Section number that prefixes every Keccak test-set heading
pub const KECCAK_SECTION: &str = "5";

/// Any line starting with this character ends the Keccak chapter
const NEXT_SECTION_PREFIX: char = '6';

/// One permutation known-answer entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeccakVector {
    /// Test-set ordinal as printed in the document
    pub id: u32,
    /// Permutation input, lowercase hex
    #[serde(rename = "in")]
    pub input_hex: String,
    /// Permutation output, lowercase hex
    #[serde(rename = "out")]
    pub output_hex: String,
    /// Input length in bytes
    #[serde(rename = "in_len")]
    pub input_len: usize,
    /// Output length in bytes
    #[serde(rename = "out_len")]
    pub output_len: usize,
}

impl KeccakVector {
    /// Start an empty vector for test set `id`
    pub fn new(id: u32) -> Self {
        Self {
            id,
            input_hex: String::new(),
            output_hex: String::new(),
            input_len: 0,
            output_len: 0,
        }
    }

    /// Recompute the byte lengths from the accumulated hex.
    pub fn seal(&mut self) {
        self.input_len = self.input_hex.len() / 2;
        self.output_len = self.output_hex.len() / 2;
    }

    /// True when the lengths agree with the hex strings.
    pub fn is_consistent(&self) -> bool {
        self.input_hex.len() % 2 == 0
            && self.output_hex.len() % 2 == 0
            && self.input_len == self.input_hex.len() / 2
            && self.output_len == self.output_hex.len() / 2
    }
}

/// Which hex block the scanner is accumulating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before the first heading or after the chapter ended
    Idle,
    InSection(Block),
}

/// Single-pass scanner over the lines of a TS 35.232 extract.
///
/// Feed every line in document order with [`KeccakScanner::feed_line`] and
/// collect the vectors with [`KeccakScanner::finish`].
#[derive(Debug)]
pub struct KeccakScanner {
    state: ScanState,
    current: Option<KeccakVector>,
    sealed: Vec<KeccakVector>,
}

impl Default for KeccakScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl KeccakScanner {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            current: None,
            sealed: Vec::new(),
        }
    }

    /// Advance the scanner by one document line.
    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();

        if let Some(id) = test_set_header(line, KECCAK_SECTION) {
            self.seal_current();
            self.current = Some(KeccakVector::new(id));
            self.state = ScanState::InSection(Block::None);
            return;
        }

        let block = match self.state {
            ScanState::Idle => return,
            ScanState::InSection(block) => block,
        };

        // The vector stays open; it is sealed by the next heading or EOF.
        if line.starts_with(NEXT_SECTION_PREFIX) {
            self.state = ScanState::Idle;
            return;
        }
        if line.starts_with("IN") {
            self.state = ScanState::InSection(Block::Input);
            return;
        }
        if line.starts_with("OUT") {
            self.state = ScanState::InSection(Block::Output);
            return;
        }

        let Some(vector) = self.current.as_mut() else {
            return;
        };
        match block {
            Block::None => {}
            Block::Input => vector.input_hex.push_str(&hex_run(line)),
            Block::Output => vector.output_hex.push_str(&hex_run(line)),
        }
    }

    /// Seal the vector under construction and return every vector in
    /// document order.
    pub fn finish(mut self) -> Vec<KeccakVector> {
        self.seal_current();
        self.sealed
    }

    fn seal_current(&mut self) {
        if let Some(mut vector) = self.current.take() {
            vector.seal();
            log::debug!(
                "sealed Keccak test set {} ({} input bytes, {} output bytes)",
                vector.id,
                vector.input_len,
                vector.output_len
            );
            self.sealed.push(vector);
        }
    }
}

/// Extract every Keccak-f[1600] test set from a TS 35.232 text extract.
pub fn parse_keccak_vectors(text: &str) -> Vec<KeccakVector> {
    let mut scanner = KeccakScanner::new();
    for line in document_lines(text) {
        scanner.feed_line(line);
    }
    scanner.finish()
}
