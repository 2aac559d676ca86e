/*!
 * Keccak-f[1600] known-answer vector extraction
 *
 * Scans the chapter of TS 35.232 that lists the permutation test sets
 * (section 5) and recovers each set's IN and OUT byte strings.
 */

mod parser;

pub use parser::*;
