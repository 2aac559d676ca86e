/*!
 * TUAK Test-Vector Extraction
 *
 * Converts the text extracts of two 3GPP specifications into canonical JSON
 * known-answer fixtures for implementations of the TUAK algorithm set:
 *
 * - TS 35.232 (implementers' test data): Keccak-f[1600] permutation
 *   vectors, one IN/OUT pair per test set
 * - TS 35.233 (design conformance test data): TUAK parameter sets with
 *   key material, bit lengths and the expected f1..f5* outputs
 *
 * The documents are typeset text rather than a formal grammar, so both
 * scanners extract what they recognise and silently drop everything else.
 * Only reading the documents and writing the fixtures can fail.
 */

/// Common error types
pub mod error;

/// Line splitting and heading recognition
pub mod text;

/// Two-digit hex token extraction
pub mod hex_tokens;

/// Keccak-f[1600] vector scanner for TS 35.232
pub mod keccak;

/// TUAK vector scanner for TS 35.233
pub mod tuak;

/// Canonical JSON fixture writing and loading
pub mod fixtures;

/// Input and output locations
pub mod config;

/// End-to-end fixture generation
pub mod generator;

// Re-export main types for convenience
pub use config::GeneratorConfig;
pub use error::{VectorError, VectorResult};
pub use fixtures::{FixtureDocument, KeccakFixture, TuakFixture};
pub use generator::{generate, GenerationReport};
pub use keccak::{parse_keccak_vectors, KeccakVector};
pub use tuak::{parse_tuak_vectors, TuakVector};

/// The types and functions most callers need.
pub mod prelude {
    pub use crate::config::GeneratorConfig;
    pub use crate::error::{VectorError, VectorResult};
    pub use crate::fixtures::load_keccak_fixture;
    pub use crate::fixtures::load_tuak_fixture;
    pub use crate::fixtures::write_fixtures;
    pub use crate::fixtures::FixtureDocument;
    pub use crate::fixtures::KeccakFixture;
    pub use crate::fixtures::TuakFixture;
    pub use crate::generator::generate;
    pub use crate::generator::GenerationReport;
    pub use crate::hex_tokens::hex_pairs;
    pub use crate::keccak::parse_keccak_vectors;
    pub use crate::keccak::KeccakVector;
    pub use crate::tuak::parse_tuak_vectors;
    pub use crate::tuak::HexField;
    pub use crate::tuak::LengthField;
    pub use crate::tuak::TuakVector;
}
