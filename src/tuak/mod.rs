/*!
 * TUAK parameter and test-vector extraction
 *
 * Scans the conformance chapter of TS 35.233 (section 6). Each test set
 * lists its bit lengths, Keccak iteration count and the hex inputs and
 * outputs of f1..f5*, followed by a "Binary Format" restatement of the
 * same values that is skipped.
 */

mod fields;
mod parser;
mod set_once;

pub use fields::{HexField, LengthField};
pub use parser::*;
pub use set_once::SetOnce;

#[cfg(test)]
mod tests;
