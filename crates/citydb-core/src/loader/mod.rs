// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (embedded data, files, decompression) and
//! delegates to the payload parsers (JSON records vs. bincode snapshot).

use crate::config::LoadOptions;
use crate::error::{CityDbError, Result};
use crate::gazetteer::Gazetteer;
use crate::raw::CitiesRaw;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;
mod snapshot;

/// The reference dataset compiled into the library.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/indian_cities.json");

static SHARED: OnceCell<Gazetteer> = OnceCell::new();

impl Gazetteer {
    /// Builds the gazetteer from the embedded reference dataset using the
    /// default [`LoadOptions`].
    ///
    /// Each call parses afresh and returns an owned value, so callers can
    /// inject it wherever it is needed.
    ///
    /// ```rust
    /// use citydb_core::Gazetteer;
    ///
    /// let db = Gazetteer::load()?;
    /// assert_eq!(db.get_by_id("mumbai").map(|c| c.name()), Some("Mumbai"));
    /// # Ok::<(), citydb_core::CityDbError>(())
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_with(&LoadOptions::default())
    }

    /// Embedded dataset with explicit options.
    pub fn load_with(opts: &LoadOptions) -> Result<Self> {
        Self::from_json_str(EMBEDDED_DATASET, opts)
    }

    /// Process-wide instance built once from the embedded dataset.
    ///
    /// Meant for front ends (wasm, CLI) that cannot thread a value through;
    /// library code should take a `&Gazetteer` instead.
    pub fn shared() -> Result<&'static Self> {
        SHARED.get_or_try_init(Self::load)
    }

    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "indian_cities.json"
    }

    /// Parses a JSON array of raw records.
    pub fn from_json_str(json: &str, opts: &LoadOptions) -> Result<Self> {
        let raw: CitiesRaw = serde_json::from_str(json)?;
        Self::from_records(raw, opts)
    }

    pub fn from_json_reader<R: Read>(reader: R, opts: &LoadOptions) -> Result<Self> {
        let raw: CitiesRaw = serde_json::from_reader(reader)?;
        Self::from_records(raw, opts)
    }

    /// Loads a dataset from disk, choosing the parser by file name:
    ///
    /// - `*.bin` — bincode snapshot written by [`Gazetteer::save_as`]
    /// - `*.json.gz` — gzipped JSON records (needs the `compact` feature)
    /// - anything else — plain JSON records
    pub fn load_from_path(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading gazetteer");

        let mut reader = common_io::open_stream(path)?;
        if common_io::is_snapshot(path) {
            let mut data = Vec::new();
            reader.read_to_end(&mut data)?;
            return Self::from_bytes_with(&data, opts);
        }
        Self::from_json_reader(reader, opts)
    }
}

pub(crate) fn not_found(path: &Path, e: std::io::Error) -> CityDbError {
    CityDbError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuplicatePolicy;
    use std::io::Write;

    #[test]
    fn embedded_dataset_loads_and_dedupes() {
        let db = Gazetteer::load().unwrap();
        assert_eq!(db.len(), 96);
        assert_eq!(db.stats().duplicates_resolved, 2);
    }

    #[test]
    fn embedded_dataset_has_duplicates_when_rejecting() {
        let opts = LoadOptions::default().with_duplicate_policy(DuplicatePolicy::Reject);
        assert!(matches!(
            Gazetteer::load_with(&opts),
            Err(CityDbError::DuplicateId { .. })
        ));
    }

    #[test]
    fn shared_instance_is_reused() {
        let a = Gazetteer::shared().unwrap();
        let b = Gazetteer::shared().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = Gazetteer::load_from_path("/definitely/not/here.json", &LoadOptions::default())
            .unwrap_err();
        assert!(matches!(err, CityDbError::NotFound(_)));
    }

    #[test]
    fn plain_json_file_loads() {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        f.write_all(EMBEDDED_DATASET.as_bytes()).unwrap();
        let db = Gazetteer::load_from_path(f.path(), &LoadOptions::default()).unwrap();
        assert_eq!(db.len(), 96);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Gazetteer::from_json_str("[{\"id\": 1}]", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, CityDbError::Json(_)));
    }

    #[test]
    fn default_is_empty() {
        assert!(Gazetteer::default().is_empty());
    }
}
