// Typed fixture loading and structural consistency checks

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::FixtureDocument;
use crate::error::{error_codes, VectorError, VectorResult};
use crate::keccak::KeccakVector;
use crate::tuak::{HexField, LengthField, TuakVector};

/// Key of the result array in Keccak fixtures
pub const KECCAK_SECTION_KEY: &str = "keccak_f1600";

/// Key of the result array in TUAK fixtures
pub const TUAK_SECTION_KEY: &str = "tests";

/// Bit length of the anonymity key produced by f5 and f5*
pub const AK_BITS: usize = 48;

/// JSON container for Keccak-f[1600] vectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeccakFixture {
    pub source: String,
    pub keccak_f1600: Vec<KeccakVector>,
}

/// JSON container for TUAK vectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuakFixture {
    pub source: String,
    pub tests: Vec<TuakVector>,
}

/// Decode `value` as lowercase hex, reporting `name` on failure.
fn decode_field(source: &str, id: u32, name: &str, value: &str) -> VectorResult<Vec<u8>> {
    if value.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(VectorError::invalid_fixture(
            source,
            id,
            &format!("{} is not lowercase", name),
            error_codes::FIXTURE_BAD_HEX,
        ));
    }
    hex::decode(value).map_err(|e| {
        VectorError::invalid_fixture(
            source,
            id,
            &format!("{} is not valid hex: {}", name, e),
            error_codes::FIXTURE_BAD_HEX,
        )
    })
}

fn check_bits(source: &str, id: u32, name: &str, bytes: &[u8], bits: usize) -> VectorResult<()> {
    if bytes.len() * 8 != bits {
        return Err(VectorError::invalid_fixture(
            source,
            id,
            &format!("{} bit length = {}, want {}", name, bytes.len() * 8, bits),
            error_codes::FIXTURE_LENGTH_MISMATCH,
        ));
    }
    Ok(())
}

impl KeccakFixture {
    pub fn new(source: impl Into<String>, keccak_f1600: Vec<KeccakVector>) -> Self {
        Self {
            source: source.into(),
            keccak_f1600,
        }
    }

    pub fn to_document(&self) -> VectorResult<FixtureDocument> {
        FixtureDocument::new(self.source.as_str())
            .with_section(KECCAK_SECTION_KEY, self.keccak_f1600.as_slice())
    }

    /// Check that every entry holds even-length lowercase hex and byte
    /// lengths that agree with it.
    pub fn validate(&self) -> VectorResult<()> {
        for vector in &self.keccak_f1600 {
            let input = decode_field(&self.source, vector.id, "in", &vector.input_hex)?;
            let output = decode_field(&self.source, vector.id, "out", &vector.output_hex)?;
            if vector.input_len != input.len() || vector.output_len != output.len() {
                return Err(VectorError::invalid_fixture(
                    &self.source,
                    vector.id,
                    &format!(
                        "lengths ({}, {}) disagree with hex ({}, {})",
                        vector.input_len,
                        vector.output_len,
                        input.len(),
                        output.len()
                    ),
                    error_codes::FIXTURE_LENGTH_MISMATCH,
                ));
            }
        }
        Ok(())
    }
}

impl TuakFixture {
    pub fn new(source: impl Into<String>, tests: Vec<TuakVector>) -> Self {
        Self {
            source: source.into(),
            tests,
        }
    }

    pub fn to_document(&self) -> VectorResult<FixtureDocument> {
        FixtureDocument::new(self.source.as_str())
            .with_section(TUAK_SECTION_KEY, self.tests.as_slice())
    }

    /// Check every present hex field and, where the test set states a bit
    /// length, that the measured field has exactly that many bits.
    pub fn validate(&self) -> VectorResult<()> {
        for vector in &self.tests {
            for field in HexField::ALL {
                let Some(value) = vector.hex(field) else {
                    continue;
                };
                let bytes = decode_field(&self.source, vector.id, field.key(), value)?;
                if matches!(field, HexField::F5 | HexField::F5Star) {
                    check_bits(&self.source, vector.id, field.key(), &bytes, AK_BITS)?;
                }
            }

            for length in LengthField::ALL {
                let Some(bits) = vector.length(length) else {
                    continue;
                };
                for &field in length.measures() {
                    if let Some(value) = vector.hex(field) {
                        let bytes = decode_field(&self.source, vector.id, field.key(), value)?;
                        check_bits(&self.source, vector.id, field.key(), &bytes, bits as usize)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> VectorResult<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| VectorError::IoError(format!("read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| VectorError::SerializationError(format!("decode {}: {}", path.display(), e)))
}

/// Load and validate a Keccak-f[1600] fixture.
pub fn load_keccak_fixture(path: &Path) -> VectorResult<KeccakFixture> {
    let fixture: KeccakFixture = load_json(path)?;
    fixture.validate()?;
    log::debug!(
        "loaded {} Keccak vectors from {}",
        fixture.keccak_f1600.len(),
        path.display()
    );
    Ok(fixture)
}

/// Load and validate a TUAK fixture.
pub fn load_tuak_fixture(path: &Path) -> VectorResult<TuakFixture> {
    let fixture: TuakFixture = load_json(path)?;
    fixture.validate()?;
    log::debug!("loaded {} TUAK vectors from {}", fixture.tests.len(), path.display());
    Ok(fixture)
}
