/*!
 * Canonical JSON fixtures
 *
 * Writing: a fixture is a JSON object holding a provenance string under
 * `source` and one or more named result arrays. Output is canonical (keys
 * sorted at every level, two-space indentation, no trailing newline) so an
 * unchanged document regenerates byte-identical files.
 *
 * Reading: typed loaders for the Keccak and TUAK fixtures with structural
 * consistency checks for downstream test suites.
 */

mod document;
mod loader;

pub use document::*;
pub use loader::*;
