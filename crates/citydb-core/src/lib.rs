// crates/citydb-core/src/lib.rs

pub mod common;
pub mod config;
pub mod distance;
pub mod error;
pub mod gazetteer;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod query;
pub mod route;
pub mod search;
pub mod text;
pub mod traits;
// Raw input shape shared by the JSON loader and test fixtures
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::common::DbStats;
pub use crate::config::{DuplicatePolicy, LoadOptions};
pub use crate::distance::{haversine_km, DistanceCalculator, EARTH_RADIUS_KM};
pub use crate::error::{CityDbError, Result};
pub use crate::gazetteer::{CityFilter, Gazetteer};
pub use crate::model::{CityRecord, Region, Tier};
pub use crate::query::{CityQuery, SuggestionCategory, Suggestions};
pub use crate::route::{EmissionFactors, RouteOption, RoutePlanner, TravelMode};
pub use crate::search::{AliasScoring, Ranker, ScoreWeights, ScoredCity};
pub use crate::text::fold_key;
