// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CityDbError>;

/// Everything that can go wrong while building or querying a [`Gazetteer`].
///
/// Lookups by id are total and return `Option`/empty collections; the
/// variants here surface from loading and from the explicit `try_*` APIs.
///
/// [`Gazetteer`]: crate::Gazetteer
#[derive(Debug, Error)]
pub enum CityDbError {
    /// A city id or dataset path could not be resolved.
    #[error("not found: {0}")]
    NotFound(String),

    /// Two records share an id and the load policy forbids resolving it.
    #[error("duplicate city id `{id}` in dataset")]
    DuplicateId { id: String },

    /// A record failed validation (coordinates, tier, population, ...).
    #[error("invalid record `{id}`: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl CityDbError {
    pub(crate) fn invalid(id: &str, reason: impl Into<String>) -> Self {
        CityDbError::InvalidRecord {
            id: id.to_owned(),
            reason: reason.into(),
        }
    }
}
