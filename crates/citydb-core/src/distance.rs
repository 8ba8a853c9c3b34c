// crates/citydb-core/src/distance.rs

//! # Geospatial Distance Calculator

use crate::error::Result;
use crate::gazetteer::Gazetteer;
use crate::traits::Located;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km between two points given in degrees.
///
/// Plain haversine on a sphere of radius [`EARTH_RADIUS_KM`]; identical
/// points yield exactly 0 and the result is symmetric in its arguments.
///
/// ```rust
/// use citydb_core::haversine_km;
///
/// // Mumbai -> New Delhi
/// let d = haversine_km((19.0760, 72.8777), (28.6139, 77.2090));
/// assert!((d - 1148.1).abs() < 0.5);
/// ```
pub fn haversine_km<A: Located, B: Located>(a: A, b: B) -> f64 {
    let (lat1, lat2) = (a.latitude().to_radians(), b.latitude().to_radians());
    let d_lat = (b.latitude() - a.latitude()).to_radians();
    let d_lon = (b.longitude() - a.longitude()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distances between gazetteer cities, addressed by id.
#[derive(Debug, Clone, Copy)]
pub struct DistanceCalculator<'a> {
    gazetteer: &'a Gazetteer,
}

impl<'a> DistanceCalculator<'a> {
    pub fn new(gazetteer: &'a Gazetteer) -> Self {
        DistanceCalculator { gazetteer }
    }

    /// Kilometres between two cities, or `None` if either id is unknown.
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        let ca = self.gazetteer.get_by_id(a)?;
        let cb = self.gazetteer.get_by_id(b)?;
        Some(haversine_km(ca, cb))
    }

    /// Like [`DistanceCalculator::distance`], naming the missing id on failure.
    pub fn try_distance(&self, a: &str, b: &str) -> Result<f64> {
        let ca = self.gazetteer.try_get(a)?;
        let cb = self.gazetteer.try_get(b)?;
        Ok(haversine_km(ca, cb))
    }

    /// Distance from a city to an arbitrary point.
    pub fn distance_to_point(&self, id: &str, point: (f64, f64)) -> Result<f64> {
        let c = self.gazetteer.try_get(id)?;
        Ok(haversine_km(c, point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CityDbError;
    use approx::assert_relative_eq;

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(haversine_km((12.9716, 77.5946), (12.9716, 77.5946)), 0.0);
    }

    #[test]
    fn quarter_meridian() {
        // pole to equator is a quarter of the circumference
        let d = haversine_km((90.0, 0.0), (0.0, 0.0));
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_km((0.0, 0.0), (0.0, 180.0));
        assert_relative_eq!(d, std::f64::consts::PI * EARTH_RADIUS_KM, epsilon = 1e-6);
    }

    #[test]
    fn symmetric() {
        let a = (22.5726, 88.3639);
        let b = (13.0827, 80.2707);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn calculator_resolves_ids() {
        let db = Gazetteer::load().unwrap();
        let calc = DistanceCalculator::new(&db);
        let d = calc.distance("mumbai", "delhi").unwrap();
        assert_relative_eq!(d, 1148.09, epsilon = 0.05);
        assert_eq!(calc.distance("mumbai", "mumbai"), Some(0.0));
        assert_eq!(calc.distance("mumbai", "atlantis"), None);
        assert!(matches!(
            calc.try_distance("atlantis", "mumbai"),
            Err(CityDbError::NotFound(_))
        ));
    }

    #[test]
    fn distance_to_point_matches_ids() {
        let db = Gazetteer::load().unwrap();
        let calc = DistanceCalculator::new(&db);
        let by_point = calc.distance_to_point("mumbai", (28.6139, 77.2090)).unwrap();
        let by_id = calc.distance("mumbai", "delhi").unwrap();
        assert_relative_eq!(by_point, by_id, epsilon = 1e-9);
    }
}
