//! citydb prelude: bring common types and traits into scope for demos.

pub use crate::common::DbStats;
pub use crate::config::{DuplicatePolicy, LoadOptions};
pub use crate::distance::{haversine_km, DistanceCalculator};
pub use crate::error::{CityDbError, Result};
pub use crate::gazetteer::{CityFilter, Gazetteer};
pub use crate::model::{CityRecord, Region, Tier};
pub use crate::query::{CityQuery, Suggestions};
pub use crate::route::{EmissionFactors, RouteOption, RoutePlanner, TravelMode};
pub use crate::search::{AliasScoring, Ranker, ScoreWeights, ScoredCity};
pub use crate::text::fold_key;
pub use crate::traits::{Located, NameMatch};
