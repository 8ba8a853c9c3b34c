// crates/citydb-core/src/loader/common_io.rs
use super::not_found;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase().ends_with(suffix))
        .unwrap_or(false)
}

pub(super) fn is_gzip(path: &Path) -> bool {
    has_suffix(path, ".gz")
}

pub(super) fn is_snapshot(path: &Path) -> bool {
    has_suffix(path, ".bin") || has_suffix(path, ".bin.gz")
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`. Callers get a plain reader either way.
pub(super) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| not_found(path, e))?;
    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(crate::error::CityDbError::invalid(
                &path.display().to_string(),
                "gzip input requires the `compact` feature",
            ));
        }
    }

    Ok(Box::new(reader))
}
