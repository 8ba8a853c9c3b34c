// crates/citydb-core/src/loader/snapshot.rs
use crate::config::LoadOptions;
use crate::error::Result;
use crate::gazetteer::Gazetteer;
use crate::model::CityRecord;
use bincode::Options;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Guards against hostile or corrupt snapshots.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl Gazetteer {
    /// Serializes the resolved record list into a bincode snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(options().serialize(self.records())?)
    }

    /// Rebuilds a gazetteer from [`Gazetteer::to_bytes`] output.
    /// Records are validated again on the way in.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with(data, &LoadOptions::default())
    }

    pub fn from_bytes_with(data: &[u8], opts: &LoadOptions) -> Result<Self> {
        let records: Vec<CityRecord> = options().deserialize(data)?;
        Self::from_records(records.into_iter().map(Into::into), opts)
    }

    /// Writes a snapshot to `path`. A `.gz` suffix gzips it (needs the
    /// `compact` feature).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        let mut writer = BufWriter::new(File::create(path)?);

        if super::common_io::is_gzip(path) {
            #[cfg(feature = "compact")]
            {
                let mut gz = GzEncoder::new(writer, Compression::default());
                gz.write_all(&bytes)?;
                // finish() writes the trailer and surfaces its I/O errors
                gz.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(crate::error::CityDbError::invalid(
                    &path.display().to_string(),
                    "gzip output requires the `compact` feature",
                ));
            }
        } else {
            writer.write_all(&bytes)?;
            writer.flush()?;
        }

        tracing::info!(path = %path.display(), bytes = bytes.len(), "snapshot written");
        Ok(())
    }
}
