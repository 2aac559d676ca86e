/*!
 * Fixture generation driver
 *
 * Reads both specification extracts, runs both scanners and commits the
 * three fixtures as one batch. Both documents reference the same Keccak
 * vectors, so the TS 35.232 vectors are written a second time under the
 * TS 35.233 provenance.
 */

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{VectorError, VectorResult};
use crate::fixtures::{write_fixtures, KeccakFixture, TuakFixture};
use crate::keccak::{parse_keccak_vectors, KeccakVector};
use crate::tuak::{parse_tuak_vectors, TuakVector};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub keccak_vectors: usize,
    pub tuak_vectors: usize,
    /// Fixture files written, in commit order
    pub written: Vec<PathBuf>,
}

/// Read a source document wholly into memory.
pub fn read_document(path: &Path) -> VectorResult<String> {
    let text = fs::read_to_string(path).map_err(|e| VectorError::source_unavailable(path, &e))?;
    log::info!("read {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// Parsed contents of both documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedVectors {
    pub keccak: Vec<KeccakVector>,
    pub tuak: Vec<TuakVector>,
}

/// Run both scanners over the document texts.
pub fn extract(ts35232_text: &str, ts35233_text: &str) -> ExtractedVectors {
    let keccak = parse_keccak_vectors(ts35232_text);
    if keccak.is_empty() {
        log::warn!("no Keccak test sets found in the TS 35.232 extract");
    }
    let tuak = parse_tuak_vectors(ts35233_text);
    if tuak.is_empty() {
        log::warn!("no TUAK test sets found in the TS 35.233 extract");
    }
    ExtractedVectors { keccak, tuak }
}

/// Generate all three fixtures described by `config`.
///
/// Both documents are read before anything is written; a missing or
/// unreadable document aborts the run with no fixture touched.
pub fn generate(config: &GeneratorConfig) -> VectorResult<GenerationReport> {
    let ts35232_text = read_document(&config.keccak_document_path())?;
    let ts35233_text = read_document(&config.tuak_document_path())?;

    let vectors = extract(&ts35232_text, &ts35233_text);
    log::info!(
        "extracted {} Keccak and {} TUAK test sets",
        vectors.keccak.len(),
        vectors.tuak.len()
    );

    let keccak_count = vectors.keccak.len();
    let tuak_count = vectors.tuak.len();

    let ts35232_keccak = KeccakFixture::new(config.ts35232_keccak.source.as_str(), vectors.keccak);
    let ts35233_keccak = KeccakFixture::new(
        config.ts35233_keccak.source.as_str(),
        ts35232_keccak.keccak_f1600.clone(),
    );
    let ts35233_tuak = TuakFixture::new(config.ts35233_tuak.source.as_str(), vectors.tuak);

    let batch = vec![
        (config.fixture_path(&config.ts35232_keccak), ts35232_keccak.to_document()?),
        (config.fixture_path(&config.ts35233_keccak), ts35233_keccak.to_document()?),
        (config.fixture_path(&config.ts35233_tuak), ts35233_tuak.to_document()?),
    ];
    let written = write_fixtures(&batch)?;

    Ok(GenerationReport {
        keccak_vectors: keccak_count,
        tuak_vectors: tuak_count,
        written,
    })
}
