/*!
 * Generator configuration
 *
 * Paths are relative to a repository root holding `reference/` (the text
 * extracts) and `testdata/` (the generated fixtures).
 */

use std::path::{Path, PathBuf};

use crate::error::{VectorError, VectorResult};

/// Directory holding the specification text extracts
pub const REFERENCE_DIR: &str = "reference";

/// Directory receiving the generated fixtures
pub const TESTDATA_DIR: &str = "testdata";

/// TS 35.232 chapters 4-7 (Keccak-f[1600] implementers' test data)
pub const TS35232_EXTRACT: &str = "35232-i00_chapter4-7.txt";

/// TS 35.233 chapters 5-6 (TUAK design conformance test data)
pub const TS35233_EXTRACT: &str = "35233-i00_chapter5-6.txt";

pub const TS35232_SOURCE: &str = "3GPP TS 35.232 V18.0.0 (Implementers test data) - text extract";

pub const TS35233_SOURCE: &str =
    "3GPP TS 35.233 V18.0.0 (Design conformance test data) - text extract";

/// One output fixture: file name under the testdata directory and the
/// provenance label recorded in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureTarget {
    pub file_name: String,
    pub source: String,
}

impl FixtureTarget {
    pub fn new(file_name: &str, source: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            source: source.to_string(),
        }
    }
}

/// Input documents and output fixtures of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Repository root
    pub root: PathBuf,

    /// TS 35.232 extract, relative to `root`
    pub keccak_document: PathBuf,

    /// TS 35.233 extract, relative to `root`
    pub tuak_document: PathBuf,

    /// Fixture directory, relative to `root`
    pub testdata_dir: PathBuf,

    /// Keccak vectors labelled with the TS 35.232 provenance
    pub ts35232_keccak: FixtureTarget,

    /// The same Keccak vectors labelled with the TS 35.233 provenance
    pub ts35233_keccak: FixtureTarget,

    /// TUAK vectors from TS 35.233
    pub ts35233_tuak: FixtureTarget,
}

impl GeneratorConfig {
    /// Default layout under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            keccak_document: Path::new(REFERENCE_DIR).join(TS35232_EXTRACT),
            tuak_document: Path::new(REFERENCE_DIR).join(TS35233_EXTRACT),
            testdata_dir: PathBuf::from(TESTDATA_DIR),
            ts35232_keccak: FixtureTarget::new("ts35232_keccak.json", TS35232_SOURCE),
            ts35233_keccak: FixtureTarget::new("ts35233_keccak.json", TS35233_SOURCE),
            ts35233_tuak: FixtureTarget::new("ts35233_vectors_text.json", TS35233_SOURCE),
        }
    }

    /// Walk up from `start` to the first directory holding the TS 35.232
    /// extract under `reference/`.
    pub fn discover(start: &Path) -> VectorResult<Self> {
        let marker = Path::new(REFERENCE_DIR).join(TS35232_EXTRACT);
        start
            .ancestors()
            .find(|dir| dir.join(&marker).is_file())
            .map(Self::new)
            .ok_or_else(|| VectorError::root_not_found(start))
    }

    pub fn keccak_document_path(&self) -> PathBuf {
        self.root.join(&self.keccak_document)
    }

    pub fn tuak_document_path(&self) -> PathBuf {
        self.root.join(&self.tuak_document)
    }

    /// Absolute path of a fixture target
    pub fn fixture_path(&self, target: &FixtureTarget) -> PathBuf {
        self.root.join(&self.testdata_dir).join(&target.file_name)
    }
}
