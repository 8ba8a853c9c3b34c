// crates/citydb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a gazetteer.
///
/// Returned by [`Gazetteer::stats`], these counts reflect the materialized
/// in-memory record set after duplicate ids were resolved at load time.
///
/// [`Gazetteer::stats`]: crate::Gazetteer::stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub cities: usize,
    pub states: usize,
    pub regions: usize,
    pub duplicates_resolved: usize,
}
