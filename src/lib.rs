//! citydb-rs: workspace umbrella crate.
//!
//! Re-exports [`citydb_core`] so the demos can `use citydb_rs::prelude::*`.

pub use citydb_core::*;
