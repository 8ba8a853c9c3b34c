// crates/citydb-core/src/route.rs

//! # Route Options
//!
//! Rough per-mode travel estimates between two gazetteer cities, built on
//! the straight-line distance. No road network is involved: every mode
//! scales the great-circle distance by fixed factors.

use crate::distance::DistanceCalculator;
use crate::gazetteer::Gazetteer;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Walking,
    Cycling,
    PublicTransport,
    Driving,
    Flight,
}

impl TravelMode {
    pub const ALL: [TravelMode; 5] = [
        TravelMode::Walking,
        TravelMode::Cycling,
        TravelMode::PublicTransport,
        TravelMode::Driving,
        TravelMode::Flight,
    ];

    /// Multiplier applied to the straight-line distance.
    pub fn detour_factor(self) -> f64 {
        match self {
            TravelMode::PublicTransport => 1.2,
            _ => 1.0,
        }
    }

    /// Travel time per straight-line kilometre.
    pub fn minutes_per_km(self) -> f64 {
        match self {
            TravelMode::Walking => 12.0,
            TravelMode::Cycling => 4.0,
            TravelMode::PublicTransport => 3.0,
            TravelMode::Driving => 2.0,
            TravelMode::Flight => 0.5,
        }
    }

    pub fn is_eco_friendly(self) -> bool {
        matches!(
            self,
            TravelMode::Walking | TravelMode::Cycling | TravelMode::PublicTransport
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Walking => "Walking",
            TravelMode::Cycling => "Cycling",
            TravelMode::PublicTransport => "Public Transport",
            TravelMode::Driving => "Driving",
            TravelMode::Flight => "Flight",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// kg CO2 per travelled kilometre, per mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionFactors {
    pub walking: f64,
    pub cycling: f64,
    pub public_transport: f64,
    pub driving: f64,
    pub flight: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        EmissionFactors {
            walking: 0.0,
            cycling: 0.021,
            public_transport: 0.089,
            driving: 0.192,
            flight: 0.255,
        }
    }
}

impl EmissionFactors {
    pub fn for_mode(&self, mode: TravelMode) -> f64 {
        match mode {
            TravelMode::Walking => self.walking,
            TravelMode::Cycling => self.cycling,
            TravelMode::PublicTransport => self.public_transport,
            TravelMode::Driving => self.driving,
            TravelMode::Flight => self.flight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteOption {
    pub mode: TravelMode,
    pub distance_km: f64,
    pub duration_min: f64,
    pub emissions_kg: f64,
    pub eco_friendly: bool,
}

impl RouteOption {
    /// Estimate for `mode` over a straight-line distance of `km`.
    pub fn estimate(mode: TravelMode, km: f64, factors: &EmissionFactors) -> Self {
        let distance_km = km * mode.detour_factor();
        RouteOption {
            mode,
            distance_km,
            duration_min: km * mode.minutes_per_km(),
            emissions_kg: distance_km * factors.for_mode(mode),
            eco_friendly: mode.is_eco_friendly(),
        }
    }
}

/// Builds per-mode route options between gazetteer cities.
#[derive(Debug, Clone, Copy)]
pub struct RoutePlanner<'a> {
    distances: DistanceCalculator<'a>,
    factors: EmissionFactors,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(gazetteer: &'a Gazetteer) -> Self {
        Self::with_factors(gazetteer, EmissionFactors::default())
    }

    pub fn with_factors(gazetteer: &'a Gazetteer, factors: EmissionFactors) -> Self {
        RoutePlanner {
            distances: DistanceCalculator::new(gazetteer),
            factors,
        }
    }

    /// One option per [`TravelMode`], lowest emissions first.
    /// `None` if either id is unknown.
    ///
    /// ```rust
    /// use citydb_core::{Gazetteer, RoutePlanner, TravelMode};
    ///
    /// let db = Gazetteer::load()?;
    /// let routes = RoutePlanner::new(&db).plan("pune", "mumbai").unwrap();
    /// assert_eq!(routes[0].mode, TravelMode::Walking);
    /// assert_eq!(routes.last().unwrap().mode, TravelMode::Flight);
    /// # Ok::<(), citydb_core::CityDbError>(())
    /// ```
    pub fn plan(&self, from: &str, to: &str) -> Option<Vec<RouteOption>> {
        let km = self.distances.distance(from, to)?;
        Some(self.plan_for_distance(km))
    }

    /// Options for an already known straight-line distance.
    pub fn plan_for_distance(&self, km: f64) -> Vec<RouteOption> {
        let mut options: Vec<RouteOption> = TravelMode::ALL
            .into_iter()
            .map(|m| RouteOption::estimate(m, km, &self.factors))
            .collect();
        options.sort_by(|a, b| a.emissions_kg.total_cmp(&b.emissions_kg));
        tracing::debug!(km, "route options planned");
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn estimates_follow_mode_factors() {
        let f = EmissionFactors::default();
        let bus = RouteOption::estimate(TravelMode::PublicTransport, 100.0, &f);
        assert_relative_eq!(bus.distance_km, 120.0);
        assert_relative_eq!(bus.duration_min, 300.0);
        assert_relative_eq!(bus.emissions_kg, 120.0 * 0.089, epsilon = 1e-9);
        assert!(bus.eco_friendly);

        let bike = RouteOption::estimate(TravelMode::Cycling, 10.0, &f);
        assert_relative_eq!(bike.emissions_kg, 0.21, epsilon = 1e-9);
        assert_relative_eq!(bike.duration_min, 40.0);

        let car = RouteOption::estimate(TravelMode::Driving, 10.0, &f);
        assert!(!car.eco_friendly);
    }

    #[test]
    fn options_sorted_by_emissions() {
        let db = Gazetteer::load().unwrap();
        let routes = RoutePlanner::new(&db).plan("chennai", "kolkata").unwrap();
        assert_eq!(routes.len(), TravelMode::ALL.len());
        assert!(routes
            .windows(2)
            .all(|w| w[0].emissions_kg <= w[1].emissions_kg));
        let modes: Vec<_> = routes.iter().map(|r| r.mode).collect();
        assert_eq!(
            modes,
            [
                TravelMode::Walking,
                TravelMode::Cycling,
                TravelMode::PublicTransport,
                TravelMode::Driving,
                TravelMode::Flight
            ]
        );
    }

    #[test]
    fn custom_factors_reorder() {
        let db = Gazetteer::load().unwrap();
        let factors = EmissionFactors {
            flight: 0.0,
            ..EmissionFactors::default()
        };
        let routes = RoutePlanner::with_factors(&db, factors)
            .plan("delhi", "mumbai")
            .unwrap();
        // walking and flight both emit zero; walking comes first in mode order
        assert_eq!(routes[0].mode, TravelMode::Walking);
        assert_eq!(routes[1].mode, TravelMode::Flight);
    }

    #[test]
    fn unknown_city_yields_none() {
        let db = Gazetteer::load().unwrap();
        assert!(RoutePlanner::new(&db).plan("delhi", "atlantis").is_none());
    }
}
